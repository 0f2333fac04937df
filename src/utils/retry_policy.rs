// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

/// 重试策略配置
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// 最大重试次数
    pub max_retries: u32,
    /// 初始退避时间
    pub initial_backoff: Duration,
    /// 最大退避时间
    pub max_backoff: Duration,
    /// 退避乘数
    pub backoff_multiplier: f64,
    /// 抖动因子 (0.0-1.0)
    pub jitter_factor: f64,
    /// 是否启用指数退避
    pub exponential_backoff: bool,
    /// 是否启用抖动
    pub enable_jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(60),
            backoff_multiplier: 2.0,
            jitter_factor: 0.1,
            exponential_backoff: true,
            enable_jitter: true,
        }
    }
}

impl RetryPolicy {
    /// 创建快速重试策略（更短的退避时间，适合单次目录请求）
    pub fn fast() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(10),
            backoff_multiplier: 1.5,
            jitter_factor: 0.1,
            exponential_backoff: true,
            enable_jitter: true,
        }
    }

    /// 计算第 `attempt` 次重试前的退避时间（从1开始）
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        if !self.exponential_backoff {
            return self.initial_backoff;
        }

        let exponent = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let backoff_secs = self.initial_backoff.as_secs_f64() * self.backoff_multiplier.powi(exponent);

        let capped_backoff = backoff_secs.min(self.max_backoff.as_secs_f64());

        let jitter_range = capped_backoff * self.jitter_factor;
        let final_backoff = if self.enable_jitter && jitter_range > 0.0 {
            let jitter = rand::random_range(-jitter_range..jitter_range);
            (capped_backoff + jitter).max(0.0)
        } else {
            capped_backoff
        };

        Duration::from_secs_f64(final_backoff)
    }

    /// 是否应该重试
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_retries
    }
}
