mod assessments;
mod feedback;
mod general;
mod interviews;
mod training;

pub use assessments::AssessmentsTab;
pub use feedback::FeedbackTab;
pub use general::GeneralTab;
pub use interviews::InterviewsTab;
pub use training::TrainingTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTab {
    General,
    Interviews,
    Training,
    Assessments,
    Feedback,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 5] = [
        ProfileTab::General,
        ProfileTab::Interviews,
        ProfileTab::Training,
        ProfileTab::Assessments,
        ProfileTab::Feedback,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::General => "General",
            ProfileTab::Interviews => "Interviews",
            ProfileTab::Training => "Training",
            ProfileTab::Assessments => "Assessments",
            ProfileTab::Feedback => "Feedback",
        }
    }
}
