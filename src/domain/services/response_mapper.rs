// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{CatalogRecord, ExternalId, ExternalRating, RecordId};
use crate::utils::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

/// 标题缺失时的占位值
pub const UNKNOWN_TITLE: &str = "Unknown";

static YEAR_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-([0-9]{4})$").expect("static pattern is valid"));

type Object = Map<String, Value>;

/// 单个节点映射错误
#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Invalid field value: {0}")]
    Invalid(#[from] ValidationError),
}

/// 响应映射器
///
/// 将目录源返回的部分类型化文档映射为合法的目录记录。
/// 信封缺失、节点残缺都不会让整批失败，只会减少产出。
#[derive(Debug, Clone, Copy)]
pub struct ResponseMapper {
    /// 无法从路径解析年份时使用的年份
    fallback_year: i32,
}

impl ResponseMapper {
    pub fn new(fallback_year: i32) -> Self {
        Self { fallback_year }
    }

    /// 映射整个响应体
    ///
    /// 读取 `data.newTitles.edges`；任意一层缺失或类型不对时返回空列表
    pub fn map_response(&self, body: &Value) -> Vec<CatalogRecord> {
        let Some(edges) = object(body, "data")
            .and_then(|data| data.get("newTitles"))
            .and_then(Value::as_object)
            .and_then(|titles| titles.get("edges"))
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };

        edges
            .iter()
            .filter_map(|edge| edge.get("node").filter(|node| node.is_object()))
            .filter_map(|node| match self.map_node(node) {
                Ok(record) => record,
                Err(e) => {
                    warn!(node = %node, error = %e, "Failed to map feed node to record");
                    None
                }
            })
            .collect()
    }

    /// 映射单个节点
    ///
    /// 没有 `content` 对象的节点静默跳过（`Ok(None)`）
    pub fn map_node(&self, node: &Value) -> Result<Option<CatalogRecord>, MappingError> {
        let Some(content) = object(node, "content") else {
            return Ok(None);
        };

        Ok(Some(CatalogRecord::new(
            RecordId::generate(),
            extract_title(content),
            extract_description(content),
            self.extract_release_year(content),
            extract_rating(content)?,
            extract_external_id(content),
        )))
    }

    fn extract_release_year(&self, content: &Object) -> i32 {
        // e.g. "/pl/film/title-2024"
        str_field(content, "fullPath")
            .and_then(|path| YEAR_SUFFIX.captures(path))
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(self.fallback_year)
    }
}

fn extract_title(content: &Object) -> String {
    str_field(content, "title")
        .filter(|title| !title.is_empty())
        .unwrap_or(UNKNOWN_TITLE)
        .to_string()
}

fn extract_description(content: &Object) -> String {
    str_field(content, "shortDescription")
        .unwrap_or_default()
        .to_string()
}

fn extract_rating(content: &Object) -> Result<Option<ExternalRating>, ValidationError> {
    content
        .get("scoring")
        .and_then(Value::as_object)
        .and_then(|scoring| number_field(scoring, "imdbScore"))
        .map(ExternalRating::new)
        .transpose()
}

fn extract_external_id(content: &Object) -> Option<ExternalId> {
    let raw = content
        .get("externalIds")
        .and_then(Value::as_object)
        .and_then(|ids| str_field(ids, "imdbId"))
        .filter(|id| !id.is_empty())?;

    match ExternalId::parse(raw) {
        Ok(id) => Some(id),
        Err(e) => {
            warn!(external_id = raw, error = %e, "Invalid external id format");
            None
        }
    }
}

fn object<'a>(value: &'a Value, key: &str) -> Option<&'a Object> {
    value.get(key).and_then(Value::as_object)
}

fn str_field<'a>(map: &'a Object, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

/// 读取数值字段，接受 JSON 数字或数字字符串
fn number_field(map: &Object, key: &str) -> Option<f64> {
    match map.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
