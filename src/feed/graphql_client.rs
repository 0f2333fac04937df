// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::FeedSettings;
use crate::domain::models::Region;
use crate::feed::request_builder::{FeedRequest, RequestBuilder};
use crate::feed::traits::{CatalogFeed, FeedError};
use crate::utils::retry_policy::RetryPolicy;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

/// GraphQL 目录源
///
/// 基于reqwest实现，带单次请求超时与瞬时错误重试
pub struct GraphQlCatalogFeed {
    client: Client,
    endpoint: Url,
    builder: RequestBuilder,
    retry_policy: RetryPolicy,
}

impl GraphQlCatalogFeed {
    /// 根据配置创建目录源
    ///
    /// # 参数
    ///
    /// * `settings` - 目录源配置
    ///
    /// # 返回值
    ///
    /// * `Ok(GraphQlCatalogFeed)` - 目录源
    /// * `Err(FeedError)` - 端点地址无效或HTTP客户端构建失败
    pub fn from_settings(settings: &FeedSettings) -> Result<Self, FeedError> {
        let endpoint = Url::parse(&settings.endpoint)
            .map_err(|e| FeedError::Other(format!("Invalid feed endpoint: {}", e)))?;

        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; catalogrs/0.1)")
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            builder: RequestBuilder::new(settings.package.clone(), settings.api_version.clone()),
            retry_policy: retry_policy_for(settings),
        })
    }

    /// 替换重试策略
    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    async fn send_once(&self, request: &FeedRequest) -> Result<serde_json::Value, FeedError> {
        let mut http_request = self.client.post(self.endpoint.clone());
        for (name, value) in &request.headers {
            http_request = http_request.header(*name, value);
        }

        let start = Instant::now();
        let response = http_request.json(&request.body).send().await?;
        let status = response.status();

        debug!(
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Feed responded"
        );

        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        Ok(response.json::<serde_json::Value>().await?)
    }
}

/// 由配置推导重试策略
///
/// 退避上限不低于配置的首次退避，避免较大的 `retry_backoff_ms` 被静默截断
fn retry_policy_for(settings: &FeedSettings) -> RetryPolicy {
    let fast = RetryPolicy::fast();
    let initial_backoff = Duration::from_millis(settings.retry_backoff_ms);
    if initial_backoff > fast.max_backoff {
        warn!(
            retry_backoff_ms = settings.retry_backoff_ms,
            "Retry backoff exceeds the default cap, raising the cap to match"
        );
    }

    RetryPolicy {
        max_retries: settings.max_retries,
        initial_backoff,
        max_backoff: fast.max_backoff.max(initial_backoff),
        ..fast
    }
}

#[async_trait]
impl CatalogFeed for GraphQlCatalogFeed {
    async fn fetch(
        &self,
        region: &Region,
        date: NaiveDate,
        limit: u32,
    ) -> Result<serde_json::Value, FeedError> {
        let request = self.builder.build(region, date, limit);
        let mut attempt = 0;

        loop {
            match self.send_once(&request).await {
                Ok(body) => return Ok(body),
                Err(e) if e.is_retryable() && self.retry_policy.should_retry(attempt) => {
                    attempt += 1;
                    let backoff = self.retry_policy.calculate_backoff(attempt);
                    warn!(
                        region = %region,
                        date = %date,
                        attempt,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %e,
                        "Feed request failed, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
