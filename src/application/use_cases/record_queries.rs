// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    application::{dto::catalog_record_dto::CatalogRecordDto, use_cases::errors::UseCaseError},
    domain::{models::RecordId, repositories::catalog_repository::CatalogRepository},
};
use std::sync::Arc;

/// 目录记录查询用例
pub struct RecordQueryUseCase<R> {
    repo: Arc<R>,
}

impl<R: CatalogRepository> RecordQueryUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 根据ID查询单条记录
    ///
    /// # 参数
    ///
    /// * `id` - 记录ID字符串
    ///
    /// # 返回值
    ///
    /// * `Ok(CatalogRecordDto)` - 记录
    /// * `Err(UseCaseError::Validation)` - ID不是合法的UUID
    /// * `Err(UseCaseError::NotFound)` - 记录不存在
    pub async fn get_record(&self, id: &str) -> Result<CatalogRecordDto, UseCaseError> {
        let id = RecordId::parse(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(|record| CatalogRecordDto::from_entity(&record))
            .ok_or(UseCaseError::NotFound(id))
    }

    /// 列出记录，可按上映年份过滤
    pub async fn list_records(
        &self,
        release_year: Option<i32>,
    ) -> Result<Vec<CatalogRecordDto>, UseCaseError> {
        let records = match release_year {
            Some(year) => self.repo.find_by_release_year(year).await?,
            None => self.repo.find_all().await?,
        };

        Ok(records.iter().map(CatalogRecordDto::from_entity).collect())
    }
}
