// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::sqlite_db;
use catalogrs::application::dto::health_status::HealthStatus;
use catalogrs::application::use_cases::health_status::HealthStatusQueryUseCase;
use catalogrs::domain::repositories::health_check::DatabaseHealthCheck;
use catalogrs::infrastructure::database::health_check::SeaOrmHealthCheck;
use std::sync::Arc;

#[tokio::test]
async fn test_live_sqlite_database_is_healthy() {
    let db = Arc::new(sqlite_db().await);
    let check = Arc::new(SeaOrmHealthCheck::new(db));

    assert!(check.is_healthy().await);

    let dto = HealthStatusQueryUseCase::new(check).execute().await;
    assert_eq!(dto.status, HealthStatus::Healthy);
}

#[tokio::test]
async fn test_closed_pool_is_unhealthy() {
    let db = sqlite_db().await;
    let pool = db.get_sqlite_connection_pool().clone();
    pool.close().await;
    let check = Arc::new(SeaOrmHealthCheck::new(Arc::new(db)));

    let dto = HealthStatusQueryUseCase::new(check).execute().await;

    assert_eq!(dto.status, HealthStatus::Unhealthy);
}
