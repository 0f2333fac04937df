// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 数据库（database）：连接池与SeaORM实体
/// - 可观测性（observability）：指标名称与描述
/// - 仓库实现（repositories）：目录记录仓库的数据库与内存实现
///
/// 基础设施层依赖领域层的抽象接口，领域层不依赖这里的任何实现。
pub mod database;
pub mod observability;
pub mod repositories;
