// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    domain::{models::RecordId, repositories::catalog_repository::RepositoryError},
    utils::errors::ValidationError,
};
use thiserror::Error;

/// 用例错误类型
///
/// 摄取运行只会因 `Validation` 失败；`Repository` 与 `NotFound`
/// 仅由录入和查询用例返回
#[derive(Error, Debug)]
pub enum UseCaseError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Record not found: {0}")]
    NotFound(RecordId),
}
