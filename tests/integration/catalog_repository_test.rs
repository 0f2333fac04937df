// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::sqlite_db;
use catalogrs::domain::models::{CatalogRecord, ExternalId, ExternalRating, RecordId};
use catalogrs::domain::repositories::catalog_repository::{CatalogRepository, RepositoryError};
use catalogrs::infrastructure::database::entities::catalog_record;
use catalogrs::infrastructure::repositories::catalog_repo_impl::CatalogRepositoryImpl;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use std::sync::Arc;

fn record(title: &str, year: i32, imdb_id: Option<&str>) -> CatalogRecord {
    CatalogRecord::new(
        RecordId::generate(),
        title,
        format!("About {}", title),
        year,
        Some(ExternalRating::new(6.5).unwrap()),
        imdb_id.map(|id| ExternalId::parse(id).unwrap()),
    )
}

#[tokio::test]
async fn test_save_and_find_by_external_id() {
    let db = Arc::new(sqlite_db().await);
    let repo = CatalogRepositoryImpl::new(db);
    let saved = record("Alpha", 2024, Some("tt0000001"));
    repo.save(&saved).await.unwrap();

    let found = repo
        .find_by_external_id(&ExternalId::parse("tt0000001").unwrap())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.id(), saved.id());
    assert_eq!(found.title(), "Alpha");
    assert_eq!(found.description(), "About Alpha");
    assert_eq!(found.release_year(), 2024);
    assert_eq!(found.rating(), saved.rating());
    assert_eq!(found.external_id(), saved.external_id());
    assert!(repo
        .find_by_external_id(&ExternalId::parse("tt9999999").unwrap())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_save_updates_existing_row() {
    let db = Arc::new(sqlite_db().await);
    let repo = CatalogRepositoryImpl::new(db);
    let mut saved = record("Alpha", 2024, None);
    repo.save(&saved).await.unwrap();

    saved.update_rating(ExternalRating::new(9.1).unwrap());
    saved.update_external_id(ExternalId::parse("tt0000042").unwrap());
    repo.save(&saved).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].rating(), Some(ExternalRating::new(9.1).unwrap()));
    assert_eq!(all[0].external_id().unwrap().value(), "tt0000042");
}

#[tokio::test]
async fn test_find_by_id_and_release_year() {
    let db = Arc::new(sqlite_db().await);
    let repo = CatalogRepositoryImpl::new(db);
    let old = record("Old", 2019, None);
    repo.save(&old).await.unwrap();
    repo.save(&record("New", 2024, Some("tt0000002"))).await.unwrap();

    assert_eq!(repo.find_by_id(old.id()).await.unwrap().unwrap().title(), "Old");
    assert!(repo.find_by_id(RecordId::generate()).await.unwrap().is_none());

    let recent = repo.find_by_release_year(2024).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].title(), "New");
}

#[tokio::test]
async fn test_row_violating_rating_bounds_is_reported() {
    let db = Arc::new(sqlite_db().await);
    let id = RecordId::generate();
    catalog_record::ActiveModel {
        id: Set(id.as_uuid()),
        title: Set("Broken".to_string()),
        description: Set(String::new()),
        release_year: Set(2024),
        rating: Set(Some(42.0)),
        external_id: Set(None),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    }
    .insert(db.as_ref())
    .await
    .unwrap();

    let repo = CatalogRepositoryImpl::new(db);
    let err = repo.find_by_id(id).await.unwrap_err();

    assert!(matches!(err, RepositoryError::Corrupted { .. }));
}
