// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    application::{
        dto::{catalog_record_dto::CatalogRecordDto, create_record_request::CreateRecordRequestDto},
        use_cases::errors::UseCaseError,
    },
    domain::{
        models::{CatalogRecord, ExternalId, ExternalRating, RecordId},
        repositories::catalog_repository::CatalogRepository,
    },
    utils::errors::ValidationError,
};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// 直接录入单条记录的用例
///
/// 不做去重，外部ID只校验格式
pub struct CreateRecordUseCase<R> {
    repo: Arc<R>,
}

impl<R: CatalogRepository> CreateRecordUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        dto: CreateRecordRequestDto,
    ) -> Result<CatalogRecordDto, UseCaseError> {
        dto.validate()
            .map_err(|e| ValidationError::InvalidRequest(e.to_string()))?;

        let rating = dto.rating.map(ExternalRating::new).transpose()?;
        let external_id = dto
            .external_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(ExternalId::parse)
            .transpose()?;

        let record = CatalogRecord::new(
            RecordId::generate(),
            dto.title,
            dto.description,
            dto.release_year,
            rating,
            external_id,
        );

        self.repo.save(&record).await?;
        info!(id = %record.id(), title = record.title(), "Created catalog record");

        Ok(CatalogRecordDto::from_entity(&record))
    }
}
