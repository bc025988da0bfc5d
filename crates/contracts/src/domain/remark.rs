use serde::{Deserialize, Serialize};

/// Short note attached to a roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Remark {
    pub remark_id: i64,
    pub emp_id: i64,
    pub text: String,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRemark {
    pub text: String,
}
