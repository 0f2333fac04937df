// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use catalogrs::application::dto::ingest_request::{FeedOrdering, IngestCatalogCommand};
use catalogrs::application::dto::ingestion_summary::IngestionSummary;
use catalogrs::application::use_cases::health_status::HealthStatusQueryUseCase;
use catalogrs::application::use_cases::ingest_catalog::IngestCatalogUseCase;
use catalogrs::config::settings::Settings;
use catalogrs::domain::repositories::catalog_repository::CatalogRepository;
use catalogrs::domain::repositories::health_check::DatabaseHealthCheck;
use catalogrs::domain::services::crawl_driver::CrawlDriver;
use catalogrs::feed::graphql_client::GraphQlCatalogFeed;
use catalogrs::infrastructure::database::connection;
use catalogrs::infrastructure::database::health_check::SeaOrmHealthCheck;
use catalogrs::infrastructure::observability::metrics;
use catalogrs::infrastructure::repositories::catalog_repo_impl::CatalogRepositoryImpl;
use catalogrs::infrastructure::repositories::memory_catalog_repo::InMemoryCatalogRepository;
use catalogrs::utils::telemetry;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 主函数
///
/// 按配置执行一次目录摄取
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    let metrics_handle = metrics::init_metrics()?;
    info!("Starting catalogrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Build feed client
    let feed = Arc::new(GraphQlCatalogFeed::from_settings(&settings.feed)?);
    let driver = CrawlDriver::new(feed).with_lookback_days(settings.feed.lookback_days);

    let ordering = if settings.ingest.assume_newest_first {
        FeedOrdering::NewestFirst
    } else {
        FeedOrdering::Unordered
    };
    let command = IngestCatalogCommand::new(settings.ingest.region.clone(), settings.ingest.limit)
        .with_ordering(ordering);

    // 4. Pick store and run
    let summary = match settings.database.url {
        Some(_) => {
            let db = Arc::new(connection::create_pool(&settings.database).await?);
            info!("Database connection established");
            let health = Arc::new(SeaOrmHealthCheck::new(db.clone()));
            run(driver, Arc::new(CatalogRepositoryImpl::new(db)), health, command).await?
        }
        None => {
            warn!("No database configured, records will not outlive this process");
            let repo = Arc::new(InMemoryCatalogRepository::new());
            run(driver, repo.clone(), repo, command).await?
        }
    };

    info!(
        total = summary.total,
        saved = summary.saved,
        skipped = summary.skipped,
        duplicates = summary.duplicates,
        stopped_early = summary.stopped_early,
        "Ingestion finished"
    );
    debug!(metrics = %metrics_handle.render(), "Metrics snapshot");

    Ok(())
}

async fn run<R, H>(
    driver: CrawlDriver<GraphQlCatalogFeed>,
    repo: Arc<R>,
    health: Arc<H>,
    command: IngestCatalogCommand,
) -> anyhow::Result<IngestionSummary>
where
    R: CatalogRepository,
    H: DatabaseHealthCheck,
{
    let health = HealthStatusQueryUseCase::new(health).execute().await;
    if !health.status.is_healthy() {
        anyhow::bail!("Database is unhealthy at {}", health.timestamp);
    }
    info!(status = ?health.status, "Database health check passed");

    let use_case = IngestCatalogUseCase::new(driver, repo);
    Ok(use_case.execute(command).await?)
}
