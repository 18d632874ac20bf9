//! Booking-number and credit-row detection.

use super::patterns::{BOOKING_NO, CREDIT_ROW};
use super::{FieldRule, RuleMatch};

/// Booking-number rule: first 9-digit numeral run in the row.
pub struct BookingRule;

impl FieldRule for BookingRule {
    type Value = String;

    fn find(&self, row: &str) -> Option<RuleMatch<String>> {
        BOOKING_NO
            .find(row)
            .map(|m| RuleMatch::new(m.as_str().to_string(), m.start(), m.end()))
    }

    fn find_all(&self, row: &str) -> Vec<RuleMatch<String>> {
        BOOKING_NO
            .find_iter(row)
            .map(|m| RuleMatch::new(m.as_str().to_string(), m.start(), m.end()))
            .collect()
    }
}

/// First 9-digit booking number in the row, if any.
pub fn extract_booking_no(row: &str) -> Option<String> {
    BookingRule.find(row).map(|m| m.value)
}

/// Whether the row carries refund/fee-reversal phrasing.
pub fn is_credit_row(row: &str) -> bool {
    CREDIT_ROW.is_match(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_nine_digit_run() {
        assert_eq!(
            extract_booking_no("3 123456789 2024-01-01 987654321"),
            Some("123456789".to_string())
        );
    }

    #[test]
    fn ignores_shorter_and_longer_runs() {
        assert_eq!(extract_booking_no("12345678 no booking here"), None);
        assert_eq!(extract_booking_no("1234567890 too long"), None);
    }

    #[test]
    fn credit_phrasings() {
        assert!(is_credit_row("Fee for ride given back 10.00 NZ$"));
        assert!(is_credit_row("CREDIT applied"));
        assert!(is_credit_row("refund issued"));
        assert!(!is_credit_row("1 123456789 ordinary ride"));
    }
}
