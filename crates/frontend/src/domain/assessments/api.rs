use contracts::domain::assessment::{AssessmentScore, AssignAssessmentRequest};
use serde::Serialize;

use crate::shared::http::{self, ApiError};

#[derive(Serialize)]
struct ScoresQuery {
    #[serde(rename = "empId", skip_serializing_if = "Option::is_none")]
    emp_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    topic: Option<String>,
}

async fn fetch_scores(query: ScoresQuery) -> Result<Vec<AssessmentScore>, ApiError> {
    let qs = serde_qs::to_string(&query).map_err(|e| ApiError::Network(e.to_string()))?;
    http::get_json(&format!("/bms/scores/filter?{}", qs)).await
}

pub async fn fetch_scores_by_emp(emp_id: i64) -> Result<Vec<AssessmentScore>, ApiError> {
    fetch_scores(ScoresQuery {
        emp_id: Some(emp_id),
        topic: None,
    })
    .await
}

pub async fn fetch_scores_by_topic(topic: String) -> Result<Vec<AssessmentScore>, ApiError> {
    fetch_scores(ScoresQuery {
        emp_id: None,
        topic: Some(topic),
    })
    .await
}

/// Assign an assessment topic to a set of employees. Legacy endpoint:
/// answers with a plain text confirmation.
pub async fn assign_assessment(request: &AssignAssessmentRequest) -> Result<String, ApiError> {
    http::post_text("/bms/assessments/assign", request).await
}
