//! Pure roster filtering and sorting.
//!
//! `apply` is side-effect free and deterministic so pages can wrap it in a
//! `Memo` keyed by (raw list, filter state).

use std::collections::BTreeSet;

use contracts::domain::employee::Employee;

/// User-selected roster filter state.
///
/// Category sets use OR semantics inside a category and AND semantics
/// across categories; an empty set imposes no constraint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RosterFilter {
    pub search_text: String,
    pub only_deployable: bool,
    pub levels: BTreeSet<String>,
    pub locations: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    pub sort_ascending_by_aging: bool,
}

impl RosterFilter {
    /// Number of active constraints, for the filter-panel badge
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.search_text.trim().is_empty() {
            count += 1;
        }
        if self.only_deployable {
            count += 1;
        }
        count += [&self.levels, &self.locations, &self.skills]
            .iter()
            .filter(|set| !set.is_empty())
            .count();
        count
    }
}

fn matches(employee: &Employee, filter: &RosterFilter, needle: &str) -> bool {
    if !needle.is_empty() {
        let name_hit = employee.name.to_lowercase().contains(needle);
        let id_hit = employee.emp_id.to_string().contains(needle);
        if !name_hit && !id_hit {
            return false;
        }
    }

    if filter.only_deployable && !employee.is_deployable {
        return false;
    }

    if !filter.levels.is_empty() && !filter.levels.contains(&employee.level) {
        return false;
    }
    if !filter.locations.is_empty() && !filter.locations.contains(&employee.base_location) {
        return false;
    }
    if !filter.skills.is_empty() && !filter.skills.contains(&employee.primary_skill) {
        return false;
    }

    true
}

/// Filter and sort the roster. Returns a subset of the input, sorted by
/// aging days in the requested direction; ties keep their original
/// relative order (stable sort).
pub fn apply(employees: &[Employee], filter: &RosterFilter) -> Vec<Employee> {
    let needle = filter.search_text.trim().to_lowercase();

    let mut result: Vec<Employee> = employees
        .iter()
        .filter(|e| matches(e, filter, &needle))
        .cloned()
        .collect();

    if filter.sort_ascending_by_aging {
        result.sort_by(|a, b| a.aging_days.cmp(&b.aging_days));
    } else {
        result.sort_by(|a, b| b.aging_days.cmp(&a.aging_days));
    }

    result
}

/// Distinct values of one categorical field, sorted, for filter choices
pub fn distinct_values<F>(employees: &[Employee], field: F) -> Vec<String>
where
    F: Fn(&Employee) -> &str,
{
    let set: BTreeSet<&str> = employees.iter().map(|e| field(e)).collect();
    set.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn employee(emp_id: i64, name: &str, aging_days: i64) -> Employee {
        Employee {
            emp_id,
            name: name.to_string(),
            email: None,
            primary_skill: "Java".to_string(),
            secondary_skill: None,
            level: "L2".to_string(),
            base_location: "Pune".to_string(),
            department_name: "Engineering".to_string(),
            bench_start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            bench_end_date: None,
            aging_days,
            is_deployable: true,
            person_status: "ONBOARDED".to_string(),
        }
    }

    #[test]
    fn test_empty_filter_returns_all() {
        let roster = vec![employee(1, "A", 3), employee(2, "B", 1)];
        let filter = RosterFilter::default();
        let result = apply(&roster, &filter);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_result_is_subset_of_input() {
        let roster = vec![employee(1, "Asha", 3), employee(2, "Ben", 1)];
        let filter = RosterFilter {
            search_text: "asha".to_string(),
            ..Default::default()
        };
        let result = apply(&roster, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].emp_id, 1);
    }

    #[test]
    fn test_search_matches_emp_id_substring() {
        let roster = vec![employee(1042, "Asha", 3), employee(2, "Ben", 1)];
        let filter = RosterFilter {
            search_text: "104".to_string(),
            ..Default::default()
        };
        let result = apply(&roster, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].emp_id, 1042);
    }

    #[test]
    fn test_category_and_across_or_within() {
        let mut by_skill = employee(1, "A", 1);
        by_skill.primary_skill = "Rust".to_string();
        let mut other = employee(2, "B", 2);
        other.primary_skill = "Go".to_string();
        other.level = "L5".to_string();

        let filter = RosterFilter {
            skills: ["Rust".to_string(), "Go".to_string()].into_iter().collect(),
            levels: ["L5".to_string()].into_iter().collect(),
            ..Default::default()
        };
        let result = apply(&[by_skill, other], &filter);
        // skill set matches both, level set only the second
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].emp_id, 2);
    }

    #[test]
    fn test_only_deployable_toggle() {
        let mut benched = employee(1, "A", 1);
        benched.is_deployable = false;
        let roster = vec![benched, employee(2, "B", 2)];
        let filter = RosterFilter {
            only_deployable: true,
            ..Default::default()
        };
        let result = apply(&roster, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].emp_id, 2);
    }

    #[test]
    fn test_sort_by_aging_both_directions() {
        let roster = vec![
            employee(1, "A", 10),
            employee(2, "B", 5),
            employee(3, "C", 20),
        ];
        let ascending = RosterFilter {
            sort_ascending_by_aging: true,
            ..Default::default()
        };
        let aging: Vec<i64> = apply(&roster, &ascending)
            .iter()
            .map(|e| e.aging_days)
            .collect();
        assert_eq!(aging, vec![5, 10, 20]);

        let descending = RosterFilter::default();
        let aging: Vec<i64> = apply(&roster, &descending)
            .iter()
            .map(|e| e.aging_days)
            .collect();
        assert_eq!(aging, vec![20, 10, 5]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let roster = vec![
            employee(1, "A", 7),
            employee(2, "B", 7),
            employee(3, "C", 7),
        ];
        let filter = RosterFilter {
            sort_ascending_by_aging: true,
            ..Default::default()
        };
        let ids: Vec<i64> = apply(&roster, &filter).iter().map(|e| e.emp_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_active_count() {
        let filter = RosterFilter {
            search_text: "x".to_string(),
            only_deployable: true,
            levels: ["L1".to_string()].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(filter.active_count(), 3);
        assert_eq!(RosterFilter::default().active_count(), 0);
    }
}
