// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 爬取驱动（crawl_driver）：按天窗口回溯目录源并收集候选记录
/// - 响应映射（response_mapper）：将目录源的原始响应映射为合法记录
pub mod crawl_driver;
pub mod response_mapper;
