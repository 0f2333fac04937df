// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{CatalogRecord, ExternalId, ExternalRating, RecordId};
use crate::domain::repositories::catalog_repository::{CatalogRepository, RepositoryError};
use crate::infrastructure::database::entities::catalog_record as catalog_entity;
use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, *};
use std::sync::Arc;

/// 目录记录仓库实现（SeaORM）
pub struct CatalogRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CatalogRepositoryImpl {
    /// 创建新的目录记录仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// 将数据库行还原为领域记录
///
/// 存储中的评分或外部ID不再满足约束时返回 `Corrupted`
fn to_domain(m: catalog_entity::Model) -> Result<CatalogRecord, RepositoryError> {
    let id = m.id;
    let corrupted = |reason: String| RepositoryError::Corrupted {
        id: id.to_string(),
        reason,
    };

    let rating = m
        .rating
        .map(ExternalRating::new)
        .transpose()
        .map_err(|e| corrupted(e.to_string()))?;
    let external_id = m
        .external_id
        .as_deref()
        .map(ExternalId::parse)
        .transpose()
        .map_err(|e| corrupted(e.to_string()))?;

    Ok(CatalogRecord::restore(
        RecordId::from(id),
        m.title,
        m.description,
        m.release_year,
        rating,
        external_id,
        m.created_at.into(),
        m.updated_at.into(),
    ))
}

fn to_active_model(record: &CatalogRecord) -> catalog_entity::ActiveModel {
    catalog_entity::ActiveModel {
        id: Set(record.id().as_uuid()),
        title: Set(record.title().to_string()),
        description: Set(record.description().to_string()),
        release_year: Set(record.release_year()),
        rating: Set(record.rating().map(|r| r.value())),
        external_id: Set(record.external_id().map(|id| id.value().to_string())),
        created_at: Set(record.created_at().into()),
        updated_at: Set(record.updated_at().into()),
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn find_by_external_id(
        &self,
        external_id: &ExternalId,
    ) -> Result<Option<CatalogRecord>, RepositoryError> {
        catalog_entity::Entity::find()
            .filter(catalog_entity::Column::ExternalId.eq(external_id.value()))
            .one(self.db.as_ref())
            .await?
            .map(to_domain)
            .transpose()
    }

    async fn save(&self, record: &CatalogRecord) -> Result<(), RepositoryError> {
        use catalog_entity::Column;

        catalog_entity::Entity::insert(to_active_model(record))
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Title,
                        Column::Description,
                        Column::ReleaseYear,
                        Column::Rating,
                        Column::ExternalId,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db.as_ref())
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<CatalogRecord>, RepositoryError> {
        catalog_entity::Entity::find_by_id(id.as_uuid())
            .one(self.db.as_ref())
            .await?
            .map(to_domain)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<CatalogRecord>, RepositoryError> {
        catalog_entity::Entity::find()
            .order_by_asc(catalog_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    async fn find_by_release_year(
        &self,
        year: i32,
    ) -> Result<Vec<CatalogRecord>, RepositoryError> {
        catalog_entity::Entity::find()
            .filter(catalog_entity::Column::ReleaseYear.eq(year))
            .order_by_asc(catalog_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(to_domain)
            .collect()
    }
}
