// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 校验错误类型
///
/// 值对象在构造时违反格式或范围约束时返回，变体名称即被违反的约束
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("地区代码必须是两个字母 (ISO 3166-1 alpha-2): {0:?}")]
    InvalidRegion(String),

    #[error("评分必须在 0.0 到 10.0 之间: {0}")]
    RatingOutOfRange(f64),

    #[error("外部ID格式必须为 ttXXXXXXX 或 ttXXXXXXXX: {0:?}")]
    InvalidExternalId(String),

    #[error("无效的记录ID (需要UUID): {0:?}")]
    InvalidRecordId(String),

    #[error("抓取数量必须为正整数: {0}")]
    InvalidLimit(u32),

    #[error("请求参数无效: {0}")]
    InvalidRequest(String),
}
