use serde::{Deserialize, Serialize};

/// One assessment result row from `GET /bms/scores/filter`.
///
/// Read-only from the frontend's perspective; rendered in score tables and
/// comparison charts. `subtopic_name` and `average_marks` keep their legacy
/// snake_case wire names, the rest of the row is camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentScore {
    pub assessment_id: i64,
    pub emp_id: i64,
    pub name: String,
    pub topic: String,
    #[serde(rename = "subtopic_name")]
    pub subtopic_name: Option<String>,
    pub marks: f64,
    #[serde(rename = "average_marks")]
    pub average_marks: f64,
    pub total_score: f64,
}

/// Aggregated per-topic row from the `/bms/analytics/report/*` family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicReportRow {
    pub topic: String,
    pub emp_count: u32,
    pub average_score: f64,
}

/// Body for `POST /bms/assessments/assign`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignAssessmentRequest {
    pub topic: String,
    pub emp_ids: Vec<i64>,
}
