// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

/// 单步处理后的流程控制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// 继续处理下一项
    Continue,
    /// 停止处理剩余项
    Halt,
}

/// 可隔离失败的处理步骤
///
/// 每一项由 `run` 处理；返回的错误不会中断整个折叠，
/// 而是交给 `absorb` 记录后继续处理下一项。
#[async_trait]
pub trait IsolatedStep<T: Send>: Send {
    type Error: Send;

    /// 处理单项
    async fn run(&mut self, item: T) -> Result<Flow, Self::Error>;

    /// 吸收单项失败，通常在此输出结构化日志
    fn absorb(&mut self, error: Self::Error);
}

/// 折叠结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoldReport {
    /// 实际交给步骤处理的项数
    pub attempted: usize,
    /// 被吸收的失败项数
    pub absorbed: usize,
    /// 是否由步骤主动停止
    pub halted: bool,
}

/// 依次处理各项，隔离单项失败并计数
///
/// 顺序严格按照迭代器给出的顺序；步骤返回 `Flow::Halt` 后不再处理剩余项。
pub async fn fold_isolated<I, S>(items: I, step: &mut S) -> FoldReport
where
    I: IntoIterator,
    I::Item: Send,
    S: IsolatedStep<I::Item>,
{
    let mut report = FoldReport::default();

    for item in items {
        report.attempted += 1;
        match step.run(item).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Halt) => {
                report.halted = true;
                break;
            }
            Err(error) => {
                report.absorbed += 1;
                step.absorb(error);
            }
        }
    }

    report
}
