// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 每个用例代表一个完整的业务流程：
/// - 目录摄取（ingest_catalog）
/// - 直接录入（create_record）
/// - 记录查询（record_queries）
/// - 健康状态查询（health_status）
pub mod create_record;
pub mod errors;
pub mod health_status;
pub mod ingest_catalog;
pub mod record_queries;
