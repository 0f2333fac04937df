// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 分层加载目录源、摄取任务与数据库配置
pub mod settings;
