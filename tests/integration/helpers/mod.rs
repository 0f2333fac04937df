// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use catalogrs::config::settings::{DatabaseSettings, FeedSettings};
use catalogrs::feed::graphql_client::GraphQlCatalogFeed;
use catalogrs::feed::request_builder::{DEFAULT_API_VERSION, DEFAULT_PACKAGE};
use catalogrs::infrastructure::database::connection;
use catalogrs::infrastructure::database::entities::catalog_record;
use catalogrs::utils::retry_policy::RetryPolicy;
use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::MockServer;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 23).unwrap()
}

pub fn feed_settings(server: &MockServer) -> FeedSettings {
    FeedSettings {
        endpoint: format!("{}/graphql", server.uri()),
        api_version: DEFAULT_API_VERSION.to_string(),
        package: DEFAULT_PACKAGE.to_string(),
        timeout_secs: 5,
        max_retries: 2,
        retry_backoff_ms: 1,
        lookback_days: 7,
    }
}

/// 带极短退避的目录源客户端
pub fn feed_client(server: &MockServer, max_retries: u32) -> GraphQlCatalogFeed {
    GraphQlCatalogFeed::from_settings(&feed_settings(server))
        .unwrap()
        .with_retry_policy(RetryPolicy {
            max_retries,
            initial_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(5),
            ..RetryPolicy::fast()
        })
}

pub fn node(title: &str, imdb_id: &str) -> Value {
    json!({
        "id": format!("tm-{}", imdb_id),
        "content": {
            "title": title,
            "shortDescription": format!("About {}", title),
            "fullPath": format!("/us/movie/{}-2024", title.to_lowercase()),
            "scoring": { "imdbScore": 7.5, "imdbVotes": 1000 },
            "externalIds": { "imdbId": imdb_id }
        }
    })
}

pub fn envelope(nodes: Vec<Value>) -> Value {
    let edges: Vec<Value> = nodes
        .into_iter()
        .enumerate()
        .map(|(i, node)| json!({ "cursor": i.to_string(), "node": node }))
        .collect();
    json!({ "data": { "newTitles": { "totalCount": edges.len(), "edges": edges } } })
}

/// 单连接的内存SQLite，并按实体建表
pub async fn sqlite_db() -> DatabaseConnection {
    let settings = DatabaseSettings {
        url: Some("sqlite::memory:".to_string()),
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: Some(5),
        idle_timeout: None,
    };
    let db = connection::create_pool(&settings).await.unwrap();

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(catalog_record::Entity)))
        .await
        .unwrap();

    db
}
