//! Monetary amount extraction and coercion.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::AMOUNT_NZD;
use super::{FieldRule, RuleMatch};

/// `NZ$`-suffixed amount rule.
///
/// Matches `12.34 NZ$`, `-12.34 NZ$`, `(12.34) NZ$` and thousands
/// forms like `1,234.56 NZ$`. The parenthesis form is normalized to a
/// leading minus; commas and parentheses are stripped.
pub struct AmountRule;

impl FieldRule for AmountRule {
    type Value = String;

    fn find(&self, row: &str) -> Option<RuleMatch<String>> {
        self.find_all(row).into_iter().next()
    }

    fn find_all(&self, row: &str) -> Vec<RuleMatch<String>> {
        AMOUNT_NZD
            .captures_iter(row)
            .map(|caps| {
                let raw = &caps[1];
                let mut value: String =
                    raw.chars().filter(|c| !matches!(c, '(' | ')' | ',')).collect();
                if raw.starts_with('(') && raw.ends_with(')') {
                    value.insert(0, '-');
                }
                let full = caps.get(0).unwrap();
                RuleMatch::new(value, full.start(), full.end())
            })
            .collect()
    }
}

/// All normalized amounts in the row, in position order.
pub fn extract_amounts(row: &str) -> Vec<String> {
    AmountRule.find_all(row).into_iter().map(|m| m.value).collect()
}

/// Coerce a monetary string to a number for the workbook.
///
/// Parenthesis-wrapped values become negative, commas are stripped. A
/// value that does not parse yields `None` (the cell stays empty
/// rather than failing the conversion).
pub fn coerce_amount(s: &str) -> Option<Decimal> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    let negated = trimmed.starts_with('(') && trimmed.ends_with(')');
    let cleaned: String = trimmed
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | ','))
        .collect();
    let value = Decimal::from_str(&cleaned).ok()?;
    Some(if negated { -value } else { value })
}
