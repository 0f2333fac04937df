// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供目录记录仓库的数据库实现与内存实现
pub mod catalog_repo_impl;
pub mod memory_catalog_repo;
