// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含目录摄取的核心业务逻辑，包括：
/// - 领域模型（models）：值对象与目录记录实体
/// - 仓库接口（repositories）：记录存储抽象接口
/// - 服务（services）：响应映射与按天窗口爬取
///
/// 领域层不依赖任何具体的HTTP或数据库实现。
pub mod models;
pub mod repositories;
pub mod services;
