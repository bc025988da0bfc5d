//! Best-effort recovery of (date, text) pairs from free-text feedback.
//!
//! Two legacy formats are recognized:
//!   trainer form:    "Training on 2024-06-01 by Jane: Great progress"
//!   interview form:  "(2024-07-01): Good technical skills."
//!
//! Anything else is displayed as-is with no date. Absence of a match is a
//! fallback, never an error; this is a display adapter, not a contract.

/// Parsed display form of one feedback entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFeedback {
    pub date: Option<String>,
    pub text: String,
}

/// "YYYY-MM-DD", digits and dashes in the right places
fn is_iso_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

fn parse_trainer_form(raw: &str) -> Option<ParsedFeedback> {
    let rest = raw.strip_prefix("Training on ")?;
    if rest.len() < 10 || !rest.is_char_boundary(10) {
        return None;
    }
    let (date, rest) = rest.split_at(10);
    if !is_iso_date(date) {
        return None;
    }
    let rest = rest.strip_prefix(" by ")?;
    let (_name, text) = rest.split_once(':')?;
    Some(ParsedFeedback {
        date: Some(date.to_string()),
        text: text.trim_start().to_string(),
    })
}

fn parse_interview_form(raw: &str) -> Option<ParsedFeedback> {
    let rest = raw.strip_prefix('(')?;
    let (date, rest) = rest.split_once(')')?;
    if !is_iso_date(date) {
        return None;
    }
    let text = rest.strip_prefix(':')?;
    Some(ParsedFeedback {
        date: Some(date.to_string()),
        text: text.trim_start().to_string(),
    })
}

/// Parse a feedback string of unknown origin. Tries the trainer form
/// first, then the interview form, then falls back to the raw text.
pub fn parse_feedback(raw: &str) -> ParsedFeedback {
    parse_trainer_form(raw)
        .or_else(|| parse_interview_form(raw))
        .unwrap_or_else(|| ParsedFeedback {
            date: None,
            text: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trainer_form() {
        let parsed = parse_feedback("Training on 2024-06-01 by Jane: Great progress");
        assert_eq!(parsed.date.as_deref(), Some("2024-06-01"));
        assert_eq!(parsed.text, "Great progress");
    }

    #[test]
    fn test_interview_form() {
        let parsed = parse_feedback("(2024-07-01): Good technical skills.");
        assert_eq!(parsed.date.as_deref(), Some("2024-07-01"));
        assert_eq!(parsed.text, "Good technical skills.");
    }

    #[test]
    fn test_unrecognized_falls_back_to_text() {
        let parsed = parse_feedback("Improving steadily");
        assert_eq!(parsed.date, None);
        assert_eq!(parsed.text, "Improving steadily");
    }

    #[test]
    fn test_malformed_date_is_not_a_date() {
        let parsed = parse_feedback("Training on 2024-6-1 by Jane: note");
        assert_eq!(parsed.date, None);
        assert_eq!(parsed.text, "Training on 2024-6-1 by Jane: note");
    }

    #[test]
    fn test_trainer_name_with_colon_in_text() {
        let parsed = parse_feedback("Training on 2024-06-01 by Jane: note: with colon");
        assert_eq!(parsed.date.as_deref(), Some("2024-06-01"));
        assert_eq!(parsed.text, "note: with colon");
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_feedback("");
        assert_eq!(parsed.date, None);
        assert_eq!(parsed.text, "");
    }
}
