use chrono::NaiveDate;
use contracts::domain::employee::Employee;

use crate::shared::export::CsvExportable;

/// Column order is fixed by the report contract; consumers of the exported
/// file depend on it.
impl CsvExportable for Employee {
    fn headers() -> Vec<&'static str> {
        vec![
            "Emp ID",
            "Name",
            "Department",
            "Email",
            "Bench Start Date",
            "Bench End Date",
            "Location",
            "Primary Skill",
            "Level",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.emp_id.to_string(),
            self.name.clone(),
            self.department_name.clone(),
            self.email.clone().unwrap_or_default(),
            self.bench_start_date.to_string(),
            self.bench_end_date.map(|d| d.to_string()).unwrap_or_default(),
            self.base_location.clone(),
            self.primary_skill.clone(),
            self.level.clone(),
        ]
    }
}

pub fn report_filename(start: NaiveDate, end: NaiveDate) -> String {
    format!("Bench_Report_{}_to_{}.csv", start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;

    fn employee_with_comma_name() -> Employee {
        Employee {
            emp_id: 1,
            name: "A,B".to_string(),
            email: Some("ab@example.com".to_string()),
            primary_skill: "Java".to_string(),
            secondary_skill: None,
            level: "L3".to_string(),
            base_location: "Pune".to_string(),
            department_name: "Eng".to_string(),
            bench_start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            bench_end_date: None,
            aging_days: 12,
            is_deployable: true,
            person_status: "ONBOARDED".to_string(),
        }
    }

    #[test]
    fn test_header_order_is_fixed() {
        let csv = build_csv(&[employee_with_comma_name()]);
        let header = csv.lines().next().unwrap();
        assert_eq!(
            header,
            "Emp ID,Name,Department,Email,Bench Start Date,Bench End Date,Location,Primary Skill,Level"
        );
    }

    #[test]
    fn test_comma_in_name_is_quoted() {
        let csv = build_csv(&[employee_with_comma_name()]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "1,\"A,B\",Eng,ab@example.com,2024-01-15,,Pune,Java,L3"
        );
    }

    #[test]
    fn test_report_filename() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(
            report_filename(start, end),
            "Bench_Report_2024-01-01_to_2024-03-31.csv"
        );
    }
}
