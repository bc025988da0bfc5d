use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the bench roster as served by `GET /bms/details`.
///
/// The backend is the source of truth; the frontend treats every fetched
/// list as an immutable snapshot and refetches after mutations.
/// `aging_days` is computed upstream from `bench_start_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub emp_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub primary_skill: String,
    pub secondary_skill: Option<String>,
    pub level: String,
    pub base_location: String,
    pub department_name: String,
    pub bench_start_date: NaiveDate,
    pub bench_end_date: Option<NaiveDate>,
    pub aging_days: i64,
    pub is_deployable: bool,
    /// Enum-like status string, e.g. "ONBOARDED". Kept as a plain string:
    /// the backend has added states without notice before.
    pub person_status: String,
}

/// `GET /bms/details/{empId}` — the roster row plus its attached remarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDetail {
    #[serde(flatten)]
    pub employee: Employee,
    #[serde(default)]
    pub remarks: Vec<crate::domain::remark::Remark>,
}

/// Body for `POST /bms/candidate` (manual add form).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateCreate {
    pub name: String,
    pub email: Option<String>,
    pub primary_skill: String,
    pub secondary_skill: Option<String>,
    pub level: String,
    pub base_location: String,
    pub department_name: String,
    pub bench_start_date: NaiveDate,
    pub is_deployable: bool,
}

/// Partial body for `PATCH /bms/candidate/update/{id}`. Only fields that
/// are `Some` are serialized and applied by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_skill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_skill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deployable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bench_end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_wire_names() {
        let json = r#"{
            "empId": 101,
            "name": "Asha Rao",
            "email": "asha@example.com",
            "primarySkill": "Java",
            "secondarySkill": "AWS",
            "level": "L3",
            "baseLocation": "Pune",
            "departmentName": "Engineering",
            "benchStartDate": "2024-05-01",
            "benchEndDate": null,
            "agingDays": 42,
            "isDeployable": true,
            "personStatus": "ONBOARDED"
        }"#;
        let emp: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(emp.emp_id, 101);
        assert_eq!(emp.aging_days, 42);
        assert!(emp.bench_end_date.is_none());
    }

    #[test]
    fn test_partial_update_skips_unset_fields() {
        let update = CandidateUpdate {
            is_deployable: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"isDeployable":false}"#);
    }
}
