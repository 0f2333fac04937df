// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{CatalogRecord, Region};
use crate::domain::services::response_mapper::ResponseMapper;
use crate::feed::traits::{CatalogFeed, FeedError};
use crate::utils::isolation::{fold_isolated, Flow, IsolatedStep};
use async_trait::async_trait;
use chrono::{Datelike, Days, NaiveDate, Utc};
use metrics::counter;
use std::sync::Arc;
use tracing::{debug, error, info};

/// 默认回溯天数
pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;

/// 按天窗口爬取驱动
///
/// 从今天开始逐日向前回溯，每天只请求满足剩余配额所需的条目数，
/// 配额满足或窗口耗尽时结束。单日请求失败按当天无结果处理。
pub struct CrawlDriver<F: ?Sized> {
    /// 目录源
    feed: Arc<F>,
    /// 回溯天数
    lookback_days: u32,
}

impl<F: CatalogFeed + ?Sized> CrawlDriver<F> {
    /// 创建新的爬取驱动实例
    ///
    /// # 参数
    ///
    /// * `feed` - 目录源
    ///
    /// # 返回值
    ///
    /// 返回使用默认回溯天数的爬取驱动
    pub fn new(feed: Arc<F>) -> Self {
        Self {
            feed,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }

    /// 设置回溯天数
    pub fn with_lookback_days(mut self, lookback_days: u32) -> Self {
        self.lookback_days = lookback_days;
        self
    }

    pub fn lookback_days(&self) -> u32 {
        self.lookback_days
    }

    /// 以当前日期为起点爬取
    pub async fn crawl(&self, region: &Region, limit: u32) -> Vec<CatalogRecord> {
        self.crawl_from(region, limit, Utc::now().date_naive()).await
    }

    /// 以指定日期为起点爬取
    ///
    /// # 参数
    ///
    /// * `region` - 地区
    /// * `limit` - 最多收集的记录数
    /// * `today` - 窗口的第一天
    ///
    /// # 返回值
    ///
    /// 按日期从新到旧、同日按发现顺序排列的记录，数量不超过 `limit`
    pub async fn crawl_from(
        &self,
        region: &Region,
        limit: u32,
        today: NaiveDate,
    ) -> Vec<CatalogRecord> {
        info!(region = %region, limit, %today, "Crawling catalog releases");

        if limit == 0 {
            return Vec::new();
        }

        let days = (0..self.lookback_days)
            .map_while(|offset| today.checked_sub_days(Days::new(u64::from(offset))));

        let mut step = DayStep {
            feed: self.feed.as_ref(),
            mapper: ResponseMapper::new(today.year()),
            region,
            remaining: limit,
            collected: Vec::new(),
        };
        let report = fold_isolated(days, &mut step).await;

        info!(
            region = %region,
            total = step.collected.len(),
            days_scraped = report.attempted,
            failed_days = report.absorbed,
            quota_met = report.halted,
            "Catalog crawl completed"
        );

        step.collected
    }
}

/// 单日请求失败
struct DayFetchFailure {
    date: NaiveDate,
    limit: u32,
    source: FeedError,
}

/// 逐日抓取步骤
struct DayStep<'a, F: ?Sized> {
    feed: &'a F,
    mapper: ResponseMapper,
    region: &'a Region,
    remaining: u32,
    collected: Vec<CatalogRecord>,
}

#[async_trait]
impl<'a, F: CatalogFeed + ?Sized> IsolatedStep<NaiveDate> for DayStep<'a, F> {
    type Error = DayFetchFailure;

    async fn run(&mut self, date: NaiveDate) -> Result<Flow, DayFetchFailure> {
        debug!(%date, remaining = self.remaining, "Scraping day");

        let body = self
            .feed
            .fetch(self.region, date, self.remaining)
            .await
            .map_err(|source| DayFetchFailure {
                date,
                limit: self.remaining,
                source,
            })?;

        let records = self.mapper.map_response(&body);
        if records.is_empty() {
            info!(%date, "No records found for date, continuing");
        }

        for record in records {
            self.collected.push(record);
            self.remaining -= 1;
            if self.remaining == 0 {
                return Ok(Flow::Halt);
            }
        }

        Ok(Flow::Continue)
    }

    fn absorb(&mut self, failure: DayFetchFailure) {
        counter!("catalog_feed_day_failures_total", "region" => self.region.to_string())
            .increment(1);
        error!(
            region = %self.region,
            date = %failure.date,
            limit = failure.limit,
            error = %failure.source,
            "Failed to fetch catalog releases for date"
        );
    }
}

#[cfg(test)]
#[path = "crawl_driver_test.rs"]
mod tests;
