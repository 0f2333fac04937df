// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 外部评分
///
/// 取值范围 [0.0, 10.0]，比较时使用 epsilon 容差
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ExternalRating(f64);

impl ExternalRating {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 10.0;

    /// 高评分阈值
    pub const HIGH_RATING_THRESHOLD: f64 = 7.0;

    /// 创建评分
    ///
    /// # 返回值
    ///
    /// * `Ok(ExternalRating)` - 合法评分
    /// * `Err(ValidationError::RatingOutOfRange)` - 超出范围或为 NaN
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        // NaN fails both comparisons
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::RatingOutOfRange(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_high_rated(&self) -> bool {
        self.0 >= Self::HIGH_RATING_THRESHOLD
    }
}

impl PartialEq for ExternalRating {
    fn eq(&self, other: &Self) -> bool {
        (self.0 - other.0).abs() < f64::EPSILON
    }
}

impl fmt::Display for ExternalRating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl TryFrom<f64> for ExternalRating {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExternalRating> for f64 {
    fn from(rating: ExternalRating) -> Self {
        rating.0
    }
}
