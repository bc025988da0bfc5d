use serde::{Deserialize, Serialize};

/// `GET /bms/analytics/status-distribution` — count per person status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

/// `GET /bms/analytics/aging-analysis` — count per aging bucket.
///
/// Bucket boundaries are owned by the backend and arrive only as display
/// labels ("<30", "30-60", "90+"). The frontend treats the label as opaque
/// except on the one page that re-derives numeric ranges from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgingBucket {
    pub label: String,
    pub count: u64,
}

/// One point of the daily/monthly bench headcount series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchSeriesPoint {
    /// "YYYY-MM-DD" for the daily series, "YYYY-MM" for monthly.
    pub period: String,
    pub count: u64,
}

/// `GET /bms/analytics/top-performer/...` — leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformer {
    pub emp_id: i64,
    pub name: String,
    pub primary_skill: String,
    pub total_score: f64,
}
