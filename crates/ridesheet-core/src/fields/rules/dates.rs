//! ISO date and time-of-day extraction.

use super::patterns::{DATE_ISO, TIME_HHMM};
use super::{FieldRule, RuleMatch};

/// ISO `yyyy-mm-dd` date rule.
pub struct DateRule;

impl FieldRule for DateRule {
    type Value = String;

    fn find(&self, row: &str) -> Option<RuleMatch<String>> {
        self.find_all(row).into_iter().next()
    }

    fn find_all(&self, row: &str) -> Vec<RuleMatch<String>> {
        DATE_ISO
            .find_iter(row)
            .map(|m| RuleMatch::new(m.as_str().to_string(), m.start(), m.end()))
            .collect()
    }
}

/// All ISO dates in the row, left to right. The first is the accept
/// date, the second the ride date.
pub fn extract_dates(row: &str) -> Vec<String> {
    DateRule.find_all(row).into_iter().map(|m| m.value).collect()
}

/// First `HH:MM` substring in the row, if any.
pub fn extract_time(row: &str) -> Option<String> {
    TIME_HHMM.find(row).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_in_left_to_right_order() {
        let dates = extract_dates("1 123456789 2024-01-01 2024-01-02 09:15");
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02"]);
    }

    #[test]
    fn time_is_first_hhmm() {
        assert_eq!(
            extract_time("ride at 09:15 ended 10:40"),
            Some("09:15".to_string())
        );
        assert_eq!(extract_time("no time here"), None);
    }

    #[test]
    fn non_iso_dates_ignored() {
        assert!(extract_dates("15.01.2024 01/02/2024").is_empty());
    }
}
