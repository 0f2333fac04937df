// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 目录源返回顺序
///
/// 决定遇到已存在记录时的行为
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedOrdering {
    /// 从新到旧：已知记录之后的条目均已摄取过，遇到即停止
    #[default]
    NewestFirst,
    /// 无序：跳过已知记录并继续处理
    Unordered,
}

/// 摄取目录命令
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct IngestCatalogCommand {
    /// 地区代码，在用例中解析为 `Region`
    pub region_code: String,
    #[validate(range(min = 1))]
    pub limit: u32,
    #[serde(default)]
    pub ordering: FeedOrdering,
}

impl IngestCatalogCommand {
    pub fn new(region_code: impl Into<String>, limit: u32) -> Self {
        Self {
            region_code: region_code.into(),
            limit,
            ordering: FeedOrdering::default(),
        }
    }

    pub fn with_ordering(mut self, ordering: FeedOrdering) -> Self {
        self.ordering = ordering;
        self
    }
}
