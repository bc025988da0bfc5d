/// Utilities for date formatting
///
/// Provides consistent date display across the application

use chrono::NaiveDate;

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format a NaiveDate for table display
pub fn format_naive_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format an optional date, rendering absence as an em-dash placeholder
pub fn format_opt_date(date: &Option<NaiveDate>) -> String {
    match date {
        Some(d) => format_naive_date(d),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_opt_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(format_opt_date(&Some(date)), "01.05.2024");
        assert_eq!(format_opt_date(&None), "—");
    }
}
