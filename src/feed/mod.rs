// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 目录源模块
///
/// 定义外部目录源接口，并提供基于 GraphQL 的实现
pub mod graphql_client;
pub mod request_builder;
pub mod traits;
