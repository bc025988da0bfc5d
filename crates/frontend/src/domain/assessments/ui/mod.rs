mod assign;
mod compare;

pub use assign::AssignAssessmentPage;
pub use compare::AssessmentComparePage;
