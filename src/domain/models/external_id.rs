// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static EXTERNAL_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^tt[0-9]{7,8}$").expect("static pattern is valid"));

/// 外部目录标识符
///
/// 形如 `tt1234567` 或 `tt12345678`，作为去重的自然键
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExternalId(String);

impl ExternalId {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if EXTERNAL_ID_PATTERN.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ValidationError::InvalidExternalId(value.to_string()))
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// 规范的外部详情页地址
    pub fn to_url(&self) -> String {
        format!("https://www.imdb.com/title/{}/", self.0)
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ExternalId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ExternalId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ExternalId> for String {
    fn from(id: ExternalId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_and_eight_digit_ids() {
        assert_eq!(ExternalId::parse("tt1234567").unwrap().value(), "tt1234567");
        assert_eq!(ExternalId::parse("tt12345678").unwrap().value(), "tt12345678");
    }

    #[test]
    fn test_invalid_ids_fail() {
        for value in [
            "invalid",
            "1234567",
            "tt123456",
            "tt123456789",
            "TT1234567",
            "tt123456a",
            " tt1234567",
            "tt1234567\n",
            "tt١٢٣٤٥٦٧",
            "tt１２３４５６７",
            "",
        ] {
            assert_eq!(
                ExternalId::parse(value),
                Err(ValidationError::InvalidExternalId(value.to_string())),
                "{value:?} should fail"
            );
        }
    }

    #[test]
    fn test_to_url() {
        let id = ExternalId::parse("tt0111161").unwrap();
        assert_eq!(id.to_url(), "https://www.imdb.com/title/tt0111161/");
    }
}
