// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    application::{
        dto::{
            ingest_request::{FeedOrdering, IngestCatalogCommand},
            ingestion_summary::IngestionSummary,
        },
        use_cases::errors::UseCaseError,
    },
    domain::{
        models::{CatalogRecord, Region},
        repositories::catalog_repository::{CatalogRepository, RepositoryError},
        services::crawl_driver::CrawlDriver,
    },
    feed::traits::CatalogFeed,
    utils::{
        errors::ValidationError,
        isolation::{fold_isolated, Flow, IsolatedStep},
    },
};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use metrics::counter;
use std::sync::Arc;
use tracing::{debug, error, info};
use validator::Validate;

/// 目录摄取用例
///
/// 爬取候选记录后按顺序去重并持久化。单条记录的失败只计入 `skipped`，
/// 不会中断整次运行。
pub struct IngestCatalogUseCase<F: ?Sized, R> {
    driver: CrawlDriver<F>,
    repo: Arc<R>,
}

impl<F, R> IngestCatalogUseCase<F, R>
where
    F: CatalogFeed + ?Sized,
    R: CatalogRepository,
{
    pub fn new(driver: CrawlDriver<F>, repo: Arc<R>) -> Self {
        Self { driver, repo }
    }

    /// 以当前日期执行摄取
    pub async fn execute(
        &self,
        command: IngestCatalogCommand,
    ) -> Result<IngestionSummary, UseCaseError> {
        self.execute_at(command, Utc::now().date_naive()).await
    }

    /// 以指定日期为窗口起点执行摄取
    ///
    /// # 参数
    ///
    /// * `command` - 摄取命令
    /// * `today` - 回溯窗口的第一天
    ///
    /// # 返回值
    ///
    /// * `Ok(IngestionSummary)` - 摄取统计
    /// * `Err(UseCaseError::Validation)` - 地区或数量不合法，未发起任何请求
    pub async fn execute_at(
        &self,
        command: IngestCatalogCommand,
        today: NaiveDate,
    ) -> Result<IngestionSummary, UseCaseError> {
        let region = Region::parse(&command.region_code)?;
        command
            .validate()
            .map_err(|_| ValidationError::InvalidLimit(command.limit))?;

        counter!("catalog_ingest_runs_total", "region" => region.to_string()).increment(1);
        info!(
            region = %region,
            limit = command.limit,
            ordering = ?command.ordering,
            "Starting catalog ingestion"
        );

        let candidates = self.driver.crawl_from(&region, command.limit, today).await;
        if candidates.is_empty() {
            info!(region = %region, "No new records found");
            return Ok(IngestionSummary::default());
        }

        let total = candidates.len();
        let mut step = PersistStep {
            repo: self.repo.as_ref(),
            region: &region,
            ordering: command.ordering,
            saved: 0,
            duplicates: 0,
        };
        let report = fold_isolated(candidates, &mut step).await;

        let summary = IngestionSummary {
            total,
            saved: step.saved,
            skipped: report.absorbed,
            duplicates: step.duplicates,
            stopped_early: report.halted,
        };

        counter!("catalog_records_saved_total", "region" => region.to_string())
            .increment(summary.saved as u64);
        if summary.stopped_early {
            counter!("catalog_early_stops_total", "region" => region.to_string()).increment(1);
        }

        info!(
            region = %region,
            total = summary.total,
            saved = summary.saved,
            skipped = summary.skipped,
            duplicates = summary.duplicates,
            stopped_early = summary.stopped_early,
            "Catalog ingestion completed"
        );

        Ok(summary)
    }
}

/// 单条记录持久化失败
struct PersistFailure {
    title: String,
    stage: &'static str,
    source: RepositoryError,
}

/// 逐条去重并保存的步骤
struct PersistStep<'a, R> {
    repo: &'a R,
    region: &'a Region,
    ordering: FeedOrdering,
    saved: usize,
    duplicates: usize,
}

fn persist_failure(
    record: &CatalogRecord,
    stage: &'static str,
) -> impl FnOnce(RepositoryError) -> PersistFailure {
    let title = record.title().to_string();
    move |source| PersistFailure {
        title,
        stage,
        source,
    }
}

#[async_trait]
impl<'a, R: CatalogRepository> IsolatedStep<CatalogRecord> for PersistStep<'a, R> {
    type Error = PersistFailure;

    async fn run(&mut self, record: CatalogRecord) -> Result<Flow, PersistFailure> {
        if let Some(external_id) = record.external_id() {
            let existing = self
                .repo
                .find_by_external_id(external_id)
                .await
                .map_err(persist_failure(&record, "lookup"))?;

            if existing.is_some() {
                self.duplicates += 1;
                match self.ordering {
                    FeedOrdering::NewestFirst => {
                        info!(
                            region = %self.region,
                            external_id = external_id.value(),
                            title = record.title(),
                            "Record already exists, stopping ingestion"
                        );
                        return Ok(Flow::Halt);
                    }
                    FeedOrdering::Unordered => {
                        debug!(
                            external_id = external_id.value(),
                            title = record.title(),
                            "Record already exists, skipping"
                        );
                        return Ok(Flow::Continue);
                    }
                }
            }
        }

        self.repo
            .save(&record)
            .await
            .map_err(persist_failure(&record, "save"))?;
        self.saved += 1;
        debug!(id = %record.id(), title = record.title(), "Saved record");

        Ok(Flow::Continue)
    }

    fn absorb(&mut self, failure: PersistFailure) {
        counter!("catalog_records_skipped_total", "region" => self.region.to_string())
            .increment(1);
        error!(
            region = %self.region,
            title = %failure.title,
            stage = failure.stage,
            error = %failure.source,
            "Failed to persist record, skipping"
        );
    }
}

#[cfg(test)]
#[path = "ingest_catalog_test.rs"]
mod tests;
