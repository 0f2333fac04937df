// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::Region;
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

/// 目录源错误类型
#[derive(Error, Debug)]
pub enum FeedError {
    /// 请求失败（传输或解码）
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非成功状态码
    #[error("Feed responded with status {0}")]
    Status(u16),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

impl FeedError {
    /// 判断错误是否可重试
    ///
    /// 超时、连接失败、5xx 与 429 视为瞬时错误
    pub fn is_retryable(&self) -> bool {
        match self {
            FeedError::RequestFailed(e) => {
                e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
            }
            FeedError::Status(status) => *status >= 500 || *status == 429,
            FeedError::Other(_) => false,
        }
    }
}

/// 外部目录源特质
///
/// 给定地区与日期，返回至多 `limit` 条原始目录条目。
/// 返回值是未经信任的文档，调用方不得假设任何字段一定存在。
#[async_trait]
pub trait CatalogFeed: Send + Sync {
    async fn fetch(
        &self,
        region: &Region,
        date: NaiveDate,
        limit: u32,
    ) -> Result<serde_json::Value, FeedError>;
}
