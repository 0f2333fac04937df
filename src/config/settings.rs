// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use validator::Validate;

/// 应用程序配置设置
///
/// 包含目录源、摄取任务和数据库等所有配置项
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    /// 目录源配置
    #[validate(nested)]
    pub feed: FeedSettings,
    /// 摄取任务配置
    pub ingest: IngestSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
}

/// 目录源配置设置
///
/// 超时与回溯天数必须为正数
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FeedSettings {
    /// GraphQL 端点地址
    pub endpoint: String,
    /// app-version 请求头
    pub api_version: String,
    /// 流媒体套餐过滤
    pub package: String,
    /// 单次请求超时时间（秒）
    #[validate(range(min = 1))]
    pub timeout_secs: u64,
    /// 瞬时错误的最大重试次数
    pub max_retries: u32,
    /// 首次重试前的退避时间（毫秒）
    pub retry_backoff_ms: u64,
    /// 回溯天数
    #[validate(range(min = 1))]
    pub lookback_days: u32,
}

/// 摄取任务配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct IngestSettings {
    /// 地区代码
    pub region: String,
    /// 单次摄取的最大记录数
    pub limit: u32,
    /// 是否假定目录源按从新到旧返回
    pub assume_newest_first: bool,
}

/// 数据库配置设置
///
/// 未配置 `url` 时使用内存存储
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: Option<String>,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}` 与
    /// `CATALOGRS__*` 环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败或取值不合法
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let config = Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("CATALOGRS").separator("__"))
            .build()?;
        Self::from_config(config)
    }

    /// 反序列化并校验已构建的配置
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings
            .validate()
            .map_err(|e| ConfigError::Message(format!("Invalid settings: {}", e)))?;
        Ok(settings)
    }

    /// 仅包含默认值的配置构建器
    pub fn builder() -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            // Feed defaults
            .set_default("feed.endpoint", "https://apis.justwatch.com/graphql")?
            .set_default("feed.api_version", crate::feed::request_builder::DEFAULT_API_VERSION)?
            .set_default("feed.package", crate::feed::request_builder::DEFAULT_PACKAGE)?
            .set_default("feed.timeout_secs", 30)?
            .set_default("feed.max_retries", 3)?
            .set_default("feed.retry_backoff_ms", 500)?
            .set_default("feed.lookback_days", 7)?
            // Ingest defaults
            .set_default("ingest.region", "US")?
            .set_default("ingest.limit", 50)?
            .set_default("ingest.assume_newest_first", true)?
            // Default DB pool settings
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
