//! Driver-name extraction.
//!
//! The driver is the first run of one to three capitalized words that
//! is not immediately followed by an address-type token. The regex
//! crate has no lookahead, so the follower check trims trailing words
//! off a greedy run until the text after the run stops looking like an
//! address continuation (the same result a backtracking engine
//! produces).

use super::patterns::{NAME_RUN, NAME_STOP};
use super::{FieldRule, RuleMatch};

/// Driver-name rule.
pub struct DriverRule;

impl FieldRule for DriverRule {
    type Value = String;

    fn find(&self, row: &str) -> Option<RuleMatch<String>> {
        for m in NAME_RUN.find_iter(row) {
            if let Some(found) = shrink_to_fit(row, m.start(), m.end()) {
                return Some(found);
            }
        }
        None
    }
}

/// Drop trailing words of the run while an address token follows it.
fn shrink_to_fit(row: &str, start: usize, mut end: usize) -> Option<RuleMatch<String>> {
    loop {
        if !NAME_STOP.is_match(&row[end..]) {
            return Some(RuleMatch::new(row[start..end].to_string(), start, end));
        }
        match row[start..end].trim_end().rfind(char::is_whitespace) {
            Some(pos) => end = start + row[start..start + pos].trim_end().len(),
            None => return None,
        }
    }
}
