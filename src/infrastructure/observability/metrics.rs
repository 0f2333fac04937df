// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::describe_counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// 初始化指标系统
///
/// 安装全局 Prometheus recorder 并注册摄取相关指标。
/// 每个进程只能调用一次，重复安装返回 `BuildError`。
///
/// # 返回值
///
/// * `Ok(PrometheusHandle)` - 可用于渲染当前指标快照的句柄
/// * `Err(BuildError)` - recorder 安装失败
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    // Register metrics
    describe_metrics();

    Ok(handle)
}

/// 注册摄取相关指标的描述
fn describe_metrics() {
    describe_counter!(
        "catalog_ingest_runs_total",
        "Total number of catalog ingestion runs"
    );
    describe_counter!(
        "catalog_records_saved_total",
        "Total number of catalog records saved"
    );
    describe_counter!(
        "catalog_records_skipped_total",
        "Total number of catalog records skipped after a lookup or save failure"
    );
    describe_counter!(
        "catalog_early_stops_total",
        "Total number of ingestion runs stopped at a known record"
    );
    describe_counter!(
        "catalog_feed_day_failures_total",
        "Total number of feed days that failed to fetch"
    );
}

/// 测试用：从调试 recorder 快照中累加指定计数器的值（跨所有标签）
#[cfg(test)]
pub(crate) fn counter_total(
    snapshot: &[(
        metrics_util::CompositeKey,
        Option<metrics::Unit>,
        Option<metrics::SharedString>,
        metrics_util::debugging::DebugValue,
    )],
    name: &str,
) -> u64 {
    snapshot
        .iter()
        .filter_map(|(key, _, _, value)| match value {
            metrics_util::debugging::DebugValue::Counter(count) if key.key().name() == name => {
                Some(*count)
            }
            _ => None,
        })
        .sum()
}
