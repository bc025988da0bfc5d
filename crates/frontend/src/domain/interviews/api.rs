use contracts::domain::interview::{CycleCreate, InterviewCycle, InterviewRound, RoundCreate};

use crate::shared::http::{self, ApiError};

/// Fetch all interview cycles of an employee
pub async fn fetch_cycles(emp_id: i64) -> Result<Vec<InterviewCycle>, ApiError> {
    http::get_json(&format!("/bms/interviews/{}/cycles-details", emp_id)).await
}

/// Create a new cycle for an employee
pub async fn create_cycle(emp_id: i64, cycle: &CycleCreate) -> Result<InterviewCycle, ApiError> {
    http::post_json(&format!("/bms/interviews/{}/cycles-details", emp_id), cycle).await
}

/// Fetch the rounds of one cycle
pub async fn fetch_cycle_rounds(cycle_id: i64) -> Result<Vec<InterviewRound>, ApiError> {
    http::get_json(&format!("/bms/interviews/cycles/{}/details", cycle_id)).await
}

/// Submit a round result. The UI guarantees a cycle is selected first.
pub async fn create_round(cycle_id: i64, round: &RoundCreate) -> Result<InterviewRound, ApiError> {
    http::post_json(&format!("/bms/interviews/cycles/{}/details", cycle_id), round).await
}
