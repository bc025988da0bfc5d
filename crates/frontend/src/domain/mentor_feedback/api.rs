use contracts::domain::mentor_feedback::{
    MentorFeedback, MentorFeedbackCreate, MentorFeedbackUpdate,
};

use crate::shared::http::{self, ApiError};

pub async fn fetch_for_employee(emp_id: i64) -> Result<Vec<MentorFeedback>, ApiError> {
    http::get_json(&format!("/bms/mentor-feedback/{}", emp_id)).await
}

pub async fn create(feedback: &MentorFeedbackCreate) -> Result<MentorFeedback, ApiError> {
    http::post_json("/bms/mentor-feedback", feedback).await
}

/// Update in place. The backend exposes this but the profile flows only
/// create and delete; kept for parity with the API surface.
pub async fn update(
    feedback_id: i64,
    update: &MentorFeedbackUpdate,
) -> Result<MentorFeedback, ApiError> {
    http::put_json(&format!("/bms/mentor-feedback/{}", feedback_id), update).await
}

pub async fn delete(feedback_id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/bms/mentor-feedback/{}", feedback_id)).await
}
