use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Free-text commentary left by a trainer about a candidate.
///
/// This resource predates the camelCase convention used elsewhere and keeps
/// its snake_case wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorFeedback {
    pub mentor_feedback_id: i64,
    pub emp_id: i64,
    pub mentor_feedback: String,
    pub date: NaiveDate,
    pub trainer_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorFeedbackCreate {
    pub emp_id: i64,
    pub mentor_feedback: String,
    pub date: NaiveDate,
    pub trainer_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorFeedbackUpdate {
    pub mentor_feedback: String,
}
