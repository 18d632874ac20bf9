//! License-plate extraction.
//!
//! Candidates are uppercase alphanumeric runs of two to eight
//! characters, optionally carrying one internal hyphen (stripped on
//! output). Pure-digit tokens, time-shaped tokens, and one-to-two digit
//! indices are excluded. When both a driver match and an address token
//! exist, the candidate sitting strictly between them wins (driver →
//! plate → address ordering); otherwise the first candidate does.

use super::patterns::{ADDRESS_KEYWORD, PLATE_TOKEN, PLATE_TOKEN_HYPHEN, PURE_DIGITS, TIME_SHAPE};
use super::{FieldRule, RuleMatch};

/// License-plate rule.
pub struct PlateRule {
    allow_hyphens: bool,
}

impl PlateRule {
    pub fn new(allow_hyphens: bool) -> Self {
        Self { allow_hyphens }
    }

    /// Pick the best candidate given an optional driver span.
    pub fn select(
        &self,
        row: &str,
        driver: Option<&RuleMatch<String>>,
    ) -> Option<RuleMatch<String>> {
        let candidates = self.find_all(row);
        if candidates.is_empty() {
            return None;
        }

        if let Some(driver) = driver {
            let address_start = ADDRESS_KEYWORD.find(row).map(|m| m.start());
            let between = candidates.iter().find(|c| {
                c.start > driver.start && address_start.map_or(true, |a| c.start < a)
            });
            if let Some(found) = between {
                return Some(found.clone());
            }
        }

        candidates.into_iter().next()
    }

    fn accept(&self, token: &str) -> Option<String> {
        let stripped: String = if self.allow_hyphens {
            token.chars().filter(|c| *c != '-').collect()
        } else {
            token.to_string()
        };
        if !(2..=8).contains(&stripped.len()) {
            return None;
        }
        if PURE_DIGITS.is_match(&stripped) {
            return None;
        }
        if TIME_SHAPE.is_match(token) {
            return None;
        }
        Some(stripped)
    }
}

impl FieldRule for PlateRule {
    type Value = String;

    fn find(&self, row: &str) -> Option<RuleMatch<String>> {
        self.find_all(row).into_iter().next()
    }

    fn find_all(&self, row: &str) -> Vec<RuleMatch<String>> {
        let pattern = if self.allow_hyphens {
            &*PLATE_TOKEN_HYPHEN
        } else {
            &*PLATE_TOKEN
        };
        pattern
            .find_iter(row)
            .filter_map(|m| {
                self.accept(m.as_str())
                    .map(|value| RuleMatch::new(value, m.start(), m.end()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::rules::DriverRule;

    fn plate(row: &str) -> Option<String> {
        let driver = DriverRule.find(row);
        PlateRule::new(true).select(row, driver.as_ref()).map(|m| m.value)
    }

    #[test]
    fn first_candidate_without_anchors() {
        assert_eq!(plate("ABC123 50.00 NZ$"), Some("ABC123".to_string()));
    }

    #[test]
    fn digits_times_and_indices_excluded() {
        let rule = PlateRule::new(true);
        assert!(rule.find_all("123456789 12 09:15 1,234.56").is_empty());
    }

    #[test]
    fn personalized_all_letter_plates() {
        assert_eq!(
            plate("1 123456789 John Smith TEAMJM Auckland Airport"),
            Some("TEAMJM".to_string())
        );
    }

    #[test]
    fn candidate_between_driver_and_address_preferred() {
        // "NZ" appears later; the token between the driver and the
        // first address keyword wins.
        let row = "1 123456789 John Smith KAB612 Auckland Airport 50.00 NZ$";
        assert_eq!(plate(row), Some("KAB612".to_string()));
    }

    #[test]
    fn hyphen_is_stripped() {
        assert_eq!(
            plate("1 123456789 John Smith AB-C123 Auckland Airport"),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn strict_mode_splits_hyphenated_tokens() {
        let rule = PlateRule::new(false);
        let all = rule.find_all("AB-C123");
        let values: Vec<_> = all.into_iter().map(|m| m.value).collect();
        assert_eq!(values, vec!["AB".to_string(), "C123".to_string()]);
    }

    #[test]
    fn length_bounds() {
        let rule = PlateRule::new(true);
        assert!(rule.find_all("A").is_empty());
        assert!(rule.find_all("ABCDEFGHI").is_empty());
        assert_eq!(rule.find_all("AB").len(), 1);
    }
}
