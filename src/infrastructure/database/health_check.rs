// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::health_check::DatabaseHealthCheck;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::warn;

/// 基于SeaORM连接的数据库健康检查
pub struct SeaOrmHealthCheck {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmHealthCheck {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DatabaseHealthCheck for SeaOrmHealthCheck {
    async fn is_healthy(&self) -> bool {
        match self.db.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}
