// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{CatalogRecord, ExternalId, RecordId};
use crate::domain::repositories::catalog_repository::{CatalogRepository, RepositoryError};
use crate::domain::repositories::health_check::DatabaseHealthCheck;
use async_trait::async_trait;
use dashmap::DashMap;

/// 内存目录记录仓库
///
/// 未配置数据库时使用，进程退出后数据丢失
#[derive(Default)]
pub struct InMemoryCatalogRepository {
    records: DashMap<RecordId, CatalogRecord>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn collect_sorted<P>(&self, predicate: P) -> Vec<CatalogRecord>
    where
        P: Fn(&CatalogRecord) -> bool,
    {
        let mut records: Vec<CatalogRecord> = self
            .records
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by_key(|r| r.created_at());
        records
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn find_by_external_id(
        &self,
        external_id: &ExternalId,
    ) -> Result<Option<CatalogRecord>, RepositoryError> {
        Ok(self
            .records
            .iter()
            .find(|entry| entry.value().external_id() == Some(external_id))
            .map(|entry| entry.value().clone()))
    }

    async fn save(&self, record: &CatalogRecord) -> Result<(), RepositoryError> {
        self.records.insert(record.id(), record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<CatalogRecord>, RepositoryError> {
        Ok(self.records.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<CatalogRecord>, RepositoryError> {
        Ok(self.collect_sorted(|_| true))
    }

    async fn find_by_release_year(
        &self,
        year: i32,
    ) -> Result<Vec<CatalogRecord>, RepositoryError> {
        Ok(self.collect_sorted(|r| r.release_year() == year))
    }
}

/// 内存存储总是可用
#[async_trait]
impl DatabaseHealthCheck for InMemoryCatalogRepository {
    async fn is_healthy(&self) -> bool {
        true
    }
}
