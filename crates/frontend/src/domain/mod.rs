pub mod analytics;
pub mod assessments;
pub mod interviews;
pub mod mentor_feedback;
pub mod roster;
