// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供错误类型、失败隔离折叠、重试策略与日志初始化
pub mod errors;
pub mod isolation;
pub mod retry_policy;
pub mod telemetry;
