// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{envelope, feed_client, node, today};
use catalogrs::application::dto::ingest_request::IngestCatalogCommand;
use catalogrs::application::use_cases::ingest_catalog::IngestCatalogUseCase;
use catalogrs::application::use_cases::record_queries::RecordQueryUseCase;
use catalogrs::domain::services::crawl_driver::CrawlDriver;
use catalogrs::infrastructure::repositories::memory_catalog_repo::InMemoryCatalogRepository;
use chrono::Days;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_day(server: &MockServer, offset: u64, response: ResponseTemplate) {
    let date = today().checked_sub_days(Days::new(offset)).unwrap();
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "variables": { "date": date.to_string() } })))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mount_empty_fallback(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_second_run_stops_at_known_records() {
    let server = MockServer::start().await;
    mount_day(
        &server,
        0,
        ResponseTemplate::new(200).set_body_json(envelope(vec![
            node("Alpha", "tt0000001"),
            node("Beta", "tt0000002"),
        ])),
    )
    .await;
    mount_empty_fallback(&server).await;

    let repo = Arc::new(InMemoryCatalogRepository::new());
    let driver = CrawlDriver::new(Arc::new(feed_client(&server, 0)));
    let use_case = IngestCatalogUseCase::new(driver, repo.clone());

    let first = use_case
        .execute_at(IngestCatalogCommand::new("US", 5), today())
        .await
        .unwrap();
    let second = use_case
        .execute_at(IngestCatalogCommand::new("US", 5), today())
        .await
        .unwrap();

    assert_eq!((first.total, first.saved, first.stopped_early), (2, 2, false));
    assert_eq!((second.total, second.saved, second.stopped_early), (2, 0, true));
    assert_eq!(second.duplicates, 1);
    assert_eq!(repo.len(), 2);

    let listed = RecordQueryUseCase::new(repo)
        .list_records(Some(2024))
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed
        .iter()
        .any(|r| r.external_url.as_deref() == Some("https://www.imdb.com/title/tt0000001/")));
}

#[tokio::test]
async fn test_failed_day_does_not_abort_ingestion() {
    let server = MockServer::start().await;
    mount_day(&server, 0, ResponseTemplate::new(500)).await;
    mount_day(
        &server,
        1,
        ResponseTemplate::new(200).set_body_json(envelope(vec![node("Gamma", "tt0000003")])),
    )
    .await;
    mount_empty_fallback(&server).await;

    let repo = Arc::new(InMemoryCatalogRepository::new());
    let driver = CrawlDriver::new(Arc::new(feed_client(&server, 0))).with_lookback_days(3);
    let use_case = IngestCatalogUseCase::new(driver, repo.clone());

    let summary = use_case
        .execute_at(IngestCatalogCommand::new("us", 10), today())
        .await
        .unwrap();

    assert_eq!(summary.total, 1);
    assert_eq!(summary.saved, 1);
    assert_eq!(summary.skipped, 0);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_invalid_region_sends_no_requests() {
    let server = MockServer::start().await;
    mount_empty_fallback(&server).await;

    let driver = CrawlDriver::new(Arc::new(feed_client(&server, 0)));
    let use_case = IngestCatalogUseCase::new(driver, Arc::new(InMemoryCatalogRepository::new()));

    assert!(use_case
        .execute_at(IngestCatalogCommand::new("USA", 5), today())
        .await
        .is_err());
    assert!(server.received_requests().await.unwrap().is_empty());
}
