// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{envelope, feed_client, node, today};
use catalogrs::domain::models::Region;
use catalogrs::feed::traits::{CatalogFeed, FeedError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_posts_new_titles_query() {
    let server = MockServer::start().await;
    let body = envelope(vec![node("Arcane", "tt11126994")]);

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("app-version", "3.13.0-web-web"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "operationName": "GetNewTitles",
            "variables": {
                "first": 3,
                "pageType": "NEW",
                "date": "2024-11-23",
                "country": "PL",
                "language": "pl",
                "platform": "WEB",
                "filter": { "packages": ["nfx"], "excludeIrrelevantTitles": false },
                "availableToPackages": ["nfx"]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let feed = feed_client(&server, 0);
    let region = Region::parse("pl").unwrap();

    let response = feed.fetch(&region, today(), 3).await.unwrap();

    assert_eq!(response, body);
}

#[tokio::test]
async fn test_retries_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let feed = feed_client(&server, 2);
    let region = Region::parse("US").unwrap();

    assert!(feed.fetch(&region, today(), 5).await.is_ok());
}

#[tokio::test]
async fn test_gives_up_after_max_retries() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let feed = feed_client(&server, 2);
    let region = Region::parse("US").unwrap();

    let err = feed.fetch(&region, today(), 5).await.unwrap_err();

    assert!(matches!(err, FeedError::Status(503)));
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let feed = feed_client(&server, 3);
    let region = Region::parse("US").unwrap();

    let err = feed.fetch(&region, today(), 5).await.unwrap_err();

    assert!(matches!(err, FeedError::Status(400)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_undecodable_body_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let feed = feed_client(&server, 0);
    let region = Region::parse("US").unwrap();

    let err = feed.fetch(&region, today(), 5).await.unwrap_err();

    assert!(matches!(err, FeedError::RequestFailed(_)));
}
