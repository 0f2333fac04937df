// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 地区代码
///
/// ISO 3166-1 alpha-2 两字母代码，构造时统一转为大写。
/// 同时作为目录源的国家参数及其小写语言参数。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Region(String);

impl Region {
    /// 解析地区代码
    ///
    /// # 参数
    ///
    /// * `code` - 原始地区代码，大小写不敏感
    ///
    /// # 返回值
    ///
    /// * `Ok(Region)` - 规范化为大写的地区代码
    /// * `Err(ValidationError::InvalidRegion)` - 长度不为2或包含非字母字符
    pub fn parse(code: &str) -> Result<Self, ValidationError> {
        let mut chars = code.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(Self(code.to_ascii_uppercase()))
            }
            _ => Err(ValidationError::InvalidRegion(code.to_string())),
        }
    }

    /// 大写地区代码
    pub fn code(&self) -> &str {
        &self.0
    }

    /// 小写语言代码
    pub fn language_code(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Region {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.0
    }
}
