//! Pickup/destination extraction.
//!
//! The route text is the slice following the plate, truncated at the
//! first `%` after it (the bonus/fee percentage). The first
//! address-type keyword anchors the pickup; a second keyword after it
//! means the destination starts right past the first keyword. With
//! only one keyword the remainder splits at its character midpoint,
//! and with none the whole remainder serves as both pickup and
//! destination.

use super::patterns::ADDRESS_KEYWORD;
use super::RuleMatch;

/// Split the row into pickup and destination given the plate span.
pub fn split_route(row: &str, plate: &RuleMatch<String>) -> (String, String) {
    let right = route_text(row, plate);

    let first = match ADDRESS_KEYWORD.find(right) {
        Some(m) => m,
        None => {
            let whole = right.trim();
            return (whole.to_string(), whole.to_string());
        }
    };

    let split = if ADDRESS_KEYWORD.is_match(&right[first.end()..]) {
        first.end()
    } else {
        char_midpoint(right)
    };

    (
        right[..split].trim().to_string(),
        right[split..].trim().to_string(),
    )
}

fn route_text<'a>(row: &'a str, plate: &RuleMatch<String>) -> &'a str {
    let tail = &row[plate.end..];
    match tail.find('%') {
        Some(idx) => &tail[..idx],
        None => tail,
    }
}

/// Byte offset nearest to half the string length that is a char
/// boundary.
fn char_midpoint(s: &str) -> usize {
    let mut mid = s.len() / 2;
    while mid > 0 && !s.is_char_boundary(mid) {
        mid -= 1;
    }
    mid
}
