use contracts::analytics::{AgingBucket, BenchSeriesPoint, StatusCount, TopPerformer};
use contracts::domain::assessment::TopicReportRow;

use crate::shared::http::{self, ApiError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesGranularity {
    Daily,
    Monthly,
}

impl SeriesGranularity {
    fn path_segment(&self) -> &'static str {
        match self {
            SeriesGranularity::Daily => "daily",
            SeriesGranularity::Monthly => "monthly",
        }
    }
}

pub async fn fetch_status_distribution() -> Result<Vec<StatusCount>, ApiError> {
    http::get_json("/bms/analytics/status-distribution").await
}

pub async fn fetch_aging_analysis() -> Result<Vec<AgingBucket>, ApiError> {
    http::get_json("/bms/analytics/aging-analysis").await
}

pub async fn fetch_bench_series(
    granularity: SeriesGranularity,
) -> Result<Vec<BenchSeriesPoint>, ApiError> {
    http::get_json(&format!(
        "/bms/analytics/bench-status/{}",
        granularity.path_segment()
    ))
    .await
}

pub async fn fetch_top_performers() -> Result<Vec<TopPerformer>, ApiError> {
    http::get_json("/bms/analytics/top-performer/overall").await
}

/// Per main-topic assessment aggregates
pub async fn fetch_main_topic_report(main_topic: &str) -> Result<Vec<TopicReportRow>, ApiError> {
    http::get_json(&format!(
        "/bms/analytics/report/main-topic/{}",
        urlencoding::encode(main_topic)
    ))
    .await
}

/// Per sub-topic assessment aggregates
pub async fn fetch_topic_report(topic: &str) -> Result<Vec<TopicReportRow>, ApiError> {
    http::get_json(&format!(
        "/bms/analytics/report/topic/{}",
        urlencoding::encode(topic)
    ))
    .await
}
