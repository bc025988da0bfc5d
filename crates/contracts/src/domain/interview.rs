use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of a single interview round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundStatus {
    Pending,
    Passed,
    Failed,
    Success,
}

impl RoundStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::Pending => "PENDING",
            RoundStatus::Passed => "PASSED",
            RoundStatus::Failed => "FAILED",
            RoundStatus::Success => "SUCCESS",
        }
    }
}

/// Panel verdict for a round, separate from its pipeline status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundVerdict {
    Positive,
    Negative,
}

/// A named interview sequence for one candidate against one client/role.
/// Rounds always belong to a cycle; the UI requires a cycle to be selected
/// or created before a round can be submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewCycle {
    pub cycle_id: i64,
    pub emp_id: i64,
    pub client: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRound {
    pub round: u32,
    pub date: NaiveDate,
    pub panel: String,
    pub status: RoundStatus,
    pub feedback: RoundVerdict,
    pub detailed_feedback: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleCreate {
    pub client: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundCreate {
    pub round: u32,
    pub date: NaiveDate,
    pub panel: String,
    pub status: RoundStatus,
    pub feedback: RoundVerdict,
    pub detailed_feedback: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_status_wire_format() {
        let round = InterviewRound {
            round: 2,
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            panel: "Panel A".to_string(),
            status: RoundStatus::Passed,
            feedback: RoundVerdict::Positive,
            detailed_feedback: None,
        };
        let json = serde_json::to_string(&round).unwrap();
        assert!(json.contains(r#""status":"PASSED""#));
        assert!(json.contains(r#""feedback":"POSITIVE""#));
    }
}
