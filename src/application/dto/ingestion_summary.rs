// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 单次摄取的结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionSummary {
    /// 爬取到的候选记录数
    pub total: usize,
    /// 成功保存的记录数
    pub saved: usize,
    /// 因查询或保存失败而跳过的记录数
    pub skipped: usize,
    /// 遇到的已存在记录数
    pub duplicates: usize,
    /// 是否因遇到已存在记录而提前停止
    pub stopped_early: bool,
}
