// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

/// 数据库健康检查特质
///
/// 领域层只关心存储是否可用，具体探测方式由基础设施层决定
#[async_trait]
pub trait DatabaseHealthCheck: Send + Sync {
    /// 存储可访问并能响应查询时返回 `true`
    async fn is_healthy(&self) -> bool;
}
