// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::Region;
use chrono::NaiveDate;
use serde::Serialize;

/// 默认客户端版本号
pub const DEFAULT_API_VERSION: &str = "3.13.0-web-web";
/// 默认流媒体套餐过滤
pub const DEFAULT_PACKAGE: &str = "nfx";

const OPERATION_NAME: &str = "GetNewTitles";
const PAGE_TYPE_NEW: &str = "NEW";
const PLATFORM_WEB: &str = "WEB";

/// 新上架条目查询文档
pub const NEW_TITLES_QUERY: &str = r#"query GetNewTitles($country: Country!, $date: Date!, $language: Language!, $filter: TitleFilter, $after: String, $first: Int! = 10, $priceDrops: Boolean!, $pageType: NewPageType! = NEW) {
  newTitles(
    country: $country
    date: $date
    filter: $filter
    after: $after
    first: $first
    priceDrops: $priceDrops
    pageType: $pageType
  ) {
    totalCount
    edges {
      cursor
      node {
        ... on MovieOrSeason {
          id
          objectId
          objectType
          content(country: $country, language: $language) {
            title
            shortDescription
            fullPath
            scoring {
              imdbVotes
              imdbScore
              tmdbPopularity
              tmdbScore
            }
            externalIds {
              imdbId
            }
            runtime
          }
        }
      }
    }
    pageInfo {
      endCursor
      hasPreviousPage
      hasNextPage
    }
  }
}"#;

/// GraphQL 请求体
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub operation_name: &'static str,
    pub variables: NewTitlesVariables,
    pub query: &'static str,
}

/// 查询变量
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTitlesVariables {
    /// 分页大小
    pub first: u32,
    pub page_type: &'static str,
    pub date: NaiveDate,
    pub filter: TitleFilter,
    pub language: String,
    pub country: String,
    pub price_drops: bool,
    pub platform: &'static str,
    pub show_date_badge: bool,
    pub available_to_packages: Vec<String>,
}

/// 条目过滤器
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleFilter {
    pub packages: Vec<String>,
    pub exclude_irrelevant_titles: bool,
}

/// 完整的出站请求（请求头与请求体）
#[derive(Debug, Clone, PartialEq)]
pub struct FeedRequest {
    pub headers: Vec<(&'static str, String)>,
    pub body: GraphQlRequest,
}

/// 目录请求构建器
///
/// 纯转换，不发起任何网络调用
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    package: String,
    api_version: String,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE, DEFAULT_API_VERSION)
    }
}

impl RequestBuilder {
    pub fn new(package: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            api_version: api_version.into(),
        }
    }

    /// 构建单日分页查询
    ///
    /// # 参数
    ///
    /// * `region` - 已校验的地区代码
    /// * `date` - 上架日期
    /// * `limit` - 分页大小
    pub fn build(&self, region: &Region, date: NaiveDate, limit: u32) -> FeedRequest {
        let variables = NewTitlesVariables {
            first: limit,
            page_type: PAGE_TYPE_NEW,
            date,
            filter: TitleFilter {
                packages: vec![self.package.clone()],
                exclude_irrelevant_titles: false,
            },
            language: region.language_code(),
            country: region.code().to_string(),
            price_drops: false,
            platform: PLATFORM_WEB,
            show_date_badge: false,
            available_to_packages: vec![self.package.clone()],
        };

        FeedRequest {
            headers: vec![
                ("Accept", "*/*".to_string()),
                ("Content-Type", "application/json".to_string()),
                ("app-version", self.api_version.clone()),
            ],
            body: GraphQlRequest {
                operation_name: OPERATION_NAME,
                variables,
                query: NEW_TITLES_QUERY,
            },
        }
    }
}
