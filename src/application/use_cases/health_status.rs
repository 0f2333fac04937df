// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    application::dto::health_status::{HealthStatus, HealthStatusDto},
    domain::repositories::health_check::DatabaseHealthCheck,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

/// 健康状态查询用例
pub struct HealthStatusQueryUseCase<H: ?Sized> {
    health_check: Arc<H>,
}

impl<H: DatabaseHealthCheck + ?Sized> HealthStatusQueryUseCase<H> {
    pub fn new(health_check: Arc<H>) -> Self {
        Self { health_check }
    }

    /// 探测存储并返回带时间戳的健康状态
    pub async fn execute(&self) -> HealthStatusDto {
        let status = if self.health_check.is_healthy().await {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };
        debug!(?status, "Health status checked");

        HealthStatusDto {
            status,
            timestamp: Utc::now(),
        }
    }
}
