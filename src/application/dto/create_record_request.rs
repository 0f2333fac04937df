// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 直接录入单条目录记录的请求
///
/// 评分与外部ID的格式由值对象在用例中再次校验
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateRecordRequestDto {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1888, max = 2100))]
    pub release_year: i32,
    pub rating: Option<f64>,
    pub external_id: Option<String>,
}
