// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::CatalogRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 目录记录的对外表示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecordDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub release_year: i32,
    pub rating: Option<f64>,
    pub external_id: Option<String>,
    /// 外部目录中的规范地址
    pub external_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogRecordDto {
    pub fn from_entity(record: &CatalogRecord) -> Self {
        Self {
            id: record.id().to_string(),
            title: record.title().to_string(),
            description: record.description().to_string(),
            release_year: record.release_year(),
            rating: record.rating().map(|r| r.value()),
            external_id: record.external_id().map(|id| id.value().to_string()),
            external_url: record.external_id().map(|id| id.to_url()),
            created_at: record.created_at(),
            updated_at: record.updated_at(),
        }
    }
}

impl From<&CatalogRecord> for CatalogRecordDto {
    fn from(record: &CatalogRecord) -> Self {
        Self::from_entity(record)
    }
}
