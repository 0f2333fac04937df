// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义应用层的命令、查询结果、摄取统计与健康状态
pub mod catalog_record_dto;
pub mod create_record_request;
pub mod health_status;
pub mod ingest_request;
pub mod ingestion_summary;
