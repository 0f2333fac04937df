// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{CatalogRecord, ExternalId, RecordId};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 存储中的数据无法还原为合法的领域对象
    #[error("Corrupted record {id}: {reason}")]
    Corrupted { id: String, reason: String },
    /// 其他存储后端错误
    #[error("Storage error: {0}")]
    Storage(String),
}

/// 目录记录仓库特质
///
/// 摄取流水线只依赖 `find_by_external_id` 与 `save` 两个点操作；
/// 其余查询供直接查询用例使用。仓库实现需自行保证单条插入的原子性。
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// 根据外部标识符查找记录
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(CatalogRecord))` - 记录已存在
    /// * `Ok(None)` - 记录不存在
    /// * `Err(RepositoryError)` - 查询失败
    async fn find_by_external_id(
        &self,
        external_id: &ExternalId,
    ) -> Result<Option<CatalogRecord>, RepositoryError>;

    /// 保存记录
    async fn save(&self, record: &CatalogRecord) -> Result<(), RepositoryError>;

    /// 根据ID查找记录
    async fn find_by_id(&self, id: RecordId) -> Result<Option<CatalogRecord>, RepositoryError>;

    /// 查询全部记录
    async fn find_all(&self) -> Result<Vec<CatalogRecord>, RepositoryError>;

    /// 按上映年份查询记录
    async fn find_by_release_year(&self, year: i32)
        -> Result<Vec<CatalogRecord>, RepositoryError>;
}
