// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod catalog_repository_test;
pub mod feed_client_test;
pub mod health_check_test;
pub mod helpers;
pub mod ingest_pipeline_test;
