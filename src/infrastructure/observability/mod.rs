// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 可观测性模块
///
/// 指标 recorder 安装与指标描述
pub mod metrics;
