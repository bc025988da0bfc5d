//! Client-side chart bucketing.
//!
//! Status and skill buckets are a direct group-by-count. Aging buckets come
//! from the backend as display labels; `AgingRange::parse` re-derives the
//! numeric bounds for the one page that drills into a bucket. Labels the
//! parser does not recognize are skipped by callers, not guessed at.

use contracts::domain::employee::Employee;

/// Count per key, preserving first-seen order of the input
pub fn group_by_count<T, F>(items: &[T], key_fn: F) -> Vec<(String, u64)>
where
    F: Fn(&T) -> &str,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: std::collections::HashMap<String, u64> = std::collections::HashMap::new();

    for item in items {
        let key = key_fn(item).to_string();
        if !counts.contains_key(&key) {
            order.push(key.clone());
        }
        *counts.entry(key).or_insert(0) += 1;
    }

    order
        .into_iter()
        .map(|key| {
            let count = counts[&key];
            (key, count)
        })
        .collect()
}

/// Inclusive aging range recovered from a backend bucket label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgingRange {
    pub min: i64,
    /// `None` means open-ended ("90+")
    pub max: Option<i64>,
}

impl AgingRange {
    /// Recover bounds from a display label: `"<30"` is `[0, 29]`, `"90+"`
    /// is `[90, ∞)`, `"30-60"` is `[30, 60]`. Anything else is `None`.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();

        if let Some(rest) = label.strip_prefix('<') {
            let n: i64 = rest.trim().parse().ok()?;
            return Some(AgingRange {
                min: 0,
                max: Some(n - 1),
            });
        }

        if let Some(rest) = label.strip_suffix('+') {
            let n: i64 = rest.trim().parse().ok()?;
            return Some(AgingRange { min: n, max: None });
        }

        if let Some((low, high)) = label.split_once('-') {
            let min: i64 = low.trim().parse().ok()?;
            let max: i64 = high.trim().parse().ok()?;
            return Some(AgingRange {
                min,
                max: Some(max),
            });
        }

        None
    }

    pub fn contains(&self, aging_days: i64) -> bool {
        aging_days >= self.min && self.max.map_or(true, |max| aging_days <= max)
    }
}

/// Employees whose aging falls inside the range parsed from `label`.
/// Returns an empty list for unparseable labels.
pub fn employees_in_bucket<'a>(employees: &'a [Employee], label: &str) -> Vec<&'a Employee> {
    match AgingRange::parse(label) {
        Some(range) => employees
            .iter()
            .filter(|e| range.contains(e.aging_days))
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_count_preserves_first_seen_order() {
        let statuses = ["ONBOARDED", "ON_BENCH", "ONBOARDED", "LEFT_BENCH"];
        let grouped = group_by_count(&statuses, |s| *s);
        assert_eq!(
            grouped,
            vec![
                ("ONBOARDED".to_string(), 2),
                ("ON_BENCH".to_string(), 1),
                ("LEFT_BENCH".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_parse_upper_bounded_label() {
        assert_eq!(
            AgingRange::parse("<30"),
            Some(AgingRange {
                min: 0,
                max: Some(29)
            })
        );
    }

    #[test]
    fn test_parse_open_ended_label() {
        assert_eq!(AgingRange::parse("90+"), Some(AgingRange { min: 90, max: None }));
    }

    #[test]
    fn test_parse_closed_range_label() {
        assert_eq!(
            AgingRange::parse("30-60"),
            Some(AgingRange {
                min: 30,
                max: Some(60)
            })
        );
    }

    #[test]
    fn test_unknown_label_is_not_guessed() {
        assert_eq!(AgingRange::parse("old"), None);
        assert_eq!(AgingRange::parse(""), None);
        assert_eq!(AgingRange::parse("a-b"), None);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let range = AgingRange::parse("30-60").unwrap();
        assert!(range.contains(30));
        assert!(range.contains(60));
        assert!(!range.contains(29));
        assert!(!range.contains(61));

        let open = AgingRange::parse("90+").unwrap();
        assert!(open.contains(90));
        assert!(open.contains(10_000));
        assert!(!open.contains(89));
    }
}
