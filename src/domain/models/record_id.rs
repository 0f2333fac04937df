// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 目录记录标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// 生成新的随机标识符
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| ValidationError::InvalidRecordId(value.to_string()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(RecordId::generate(), RecordId::generate());
    }

    #[test]
    fn test_parse_round_trip() {
        let id = RecordId::generate();
        assert_eq!(RecordId::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            RecordId::parse("not-a-uuid"),
            Err(ValidationError::InvalidRecordId("not-a-uuid".to_string()))
        );
    }
}
