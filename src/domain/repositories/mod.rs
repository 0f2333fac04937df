// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 目录记录仓库（catalog_repository）：按外部标识查重并保存目录记录
/// - 健康检查（health_check）：探测存储是否可用
pub mod catalog_repository;
pub mod health_check;
