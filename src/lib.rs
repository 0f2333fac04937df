// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 目录摄取、直接录入与查询用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 值对象、目录记录、仓库接口与领域服务
pub mod domain;

/// 目录源模块
///
/// GraphQL 请求构建与HTTP客户端
pub mod feed;

/// 基础设施模块
///
/// 数据库、仓库实现与指标描述
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
