// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::external_id::ExternalId;
use super::external_rating::ExternalRating;
use super::record_id::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 目录记录实体
///
/// 流水线中传递的基本单元。由响应映射器或直接录入命令创建，
/// 经摄取处理器持久化后由存储持有。字段只能通过显式的更新方法修改，
/// 每次更新都会刷新 `updated_at`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    id: RecordId,
    title: String,
    description: String,
    release_year: i32,
    rating: Option<ExternalRating>,
    external_id: Option<ExternalId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CatalogRecord {
    /// 创建新的目录记录
    ///
    /// 创建时间与更新时间均设为当前时间
    pub fn new(
        id: RecordId,
        title: impl Into<String>,
        description: impl Into<String>,
        release_year: i32,
        rating: Option<ExternalRating>,
        external_id: Option<ExternalId>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            description: description.into(),
            release_year,
            rating,
            external_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// 从存储中恢复记录，保留原有时间戳
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: RecordId,
        title: String,
        description: String,
        release_year: i32,
        rating: Option<ExternalRating>,
        external_id: Option<ExternalId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            release_year,
            rating,
            external_id,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    pub fn rating(&self) -> Option<ExternalRating> {
        self.rating
    }

    pub fn external_id(&self) -> Option<&ExternalId> {
        self.external_id.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn update_rating(&mut self, rating: ExternalRating) {
        self.rating = Some(rating);
        self.touch();
    }

    pub fn update_external_id(&mut self, external_id: ExternalId) {
        self.external_id = Some(external_id);
        self.touch();
    }

    pub fn update_details(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        release_year: i32,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.release_year = release_year;
        self.touch();
    }

    /// 是否为近两年内的新作
    pub fn is_recent_release(&self, current_year: i32) -> bool {
        self.release_year >= current_year - 2
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample() -> CatalogRecord {
        CatalogRecord::new(
            RecordId::generate(),
            "Movie 1",
            "Description 1",
            2024,
            Some(ExternalRating::new(8.0).unwrap()),
            Some(ExternalId::parse("tt1234567").unwrap()),
        )
    }

    fn aged(record: CatalogRecord) -> CatalogRecord {
        let past = Utc::now() - Duration::days(1);
        CatalogRecord::restore(
            record.id,
            record.title,
            record.description,
            record.release_year,
            record.rating,
            record.external_id,
            past,
            past,
        )
    }

    #[test]
    fn test_new_sets_equal_timestamps() {
        let record = sample();
        assert_eq!(record.created_at(), record.updated_at());
        assert_eq!(record.title(), "Movie 1");
        assert_eq!(record.external_id().map(|id| id.value()), Some("tt1234567"));
    }

    #[test]
    fn test_update_rating_refreshes_updated_at() {
        let mut record = aged(sample());
        let before = record.updated_at();

        record.update_rating(ExternalRating::new(6.5).unwrap());

        assert_eq!(record.rating(), Some(ExternalRating::new(6.5).unwrap()));
        assert!(record.updated_at() > before);
        assert_eq!(record.created_at(), before);
    }

    #[test]
    fn test_update_external_id_refreshes_updated_at() {
        let mut record = aged(sample());
        let before = record.updated_at();

        record.update_external_id(ExternalId::parse("tt7654321").unwrap());

        assert_eq!(record.external_id().unwrap().value(), "tt7654321");
        assert!(record.updated_at() > before);
    }

    #[test]
    fn test_update_details() {
        let mut record = aged(sample());
        let before = record.updated_at();

        record.update_details("Renamed", "New description", 2021);

        assert_eq!(record.title(), "Renamed");
        assert_eq!(record.description(), "New description");
        assert_eq!(record.release_year(), 2021);
        assert!(record.updated_at() > before);
    }

    #[test]
    fn test_is_recent_release() {
        let record = sample();
        assert!(record.is_recent_release(2025));
        assert!(record.is_recent_release(2026));
        assert!(!record.is_recent_release(2027));
    }
}
