use chrono::NaiveDate;
use contracts::domain::employee::{CandidateCreate, CandidateUpdate, Employee, EmployeeDetail};
use contracts::domain::remark::{CreateRemark, Remark};
use serde::Serialize;

use crate::shared::http::{self, ApiError};

/// Fetch the full bench roster
pub async fn fetch_bench_details() -> Result<Vec<Employee>, ApiError> {
    http::get_json("/bms/details").await
}

/// Fetch one employee with their remarks
pub async fn fetch_employee(emp_id: i64) -> Result<EmployeeDetail, ApiError> {
    http::get_json(&format!("/bms/details/{}", emp_id)).await
}

#[derive(Serialize)]
struct BenchEndRangeQuery {
    start: NaiveDate,
    end: NaiveDate,
}

/// Fetch employees whose bench end date falls inside the range (report page)
pub async fn fetch_by_bench_end_range(
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Employee>, ApiError> {
    let query = serde_qs::to_string(&BenchEndRangeQuery { start, end })
        .map_err(|e| ApiError::Network(e.to_string()))?;
    http::get_json(&format!("/bms/details/bench-end-date-range?{}", query)).await
}

/// Create a candidate from the manual-add form
pub async fn create_candidate(candidate: &CandidateCreate) -> Result<Employee, ApiError> {
    http::post_json("/bms/candidate", candidate).await
}

/// Apply a partial update to a candidate
pub async fn update_candidate(emp_id: i64, update: &CandidateUpdate) -> Result<Employee, ApiError> {
    http::patch_json(&format!("/bms/candidate/update/{}", emp_id), update).await
}

/// Attach a remark to an employee
pub async fn post_remark(emp_id: i64, text: String) -> Result<Remark, ApiError> {
    http::post_json(&format!("/bms/remarks/{}", emp_id), &CreateRemark { text }).await
}

pub async fn delete_remark(remark_id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/bms/remarks/{}", remark_id)).await
}
