//! Rule-based field extractors for ride-invoice rows.
//!
//! Each rule is an independent pattern search over the whole row
//! string; rules never share parser state, so every one of them is a
//! pure function testable in isolation.

pub mod amounts;
pub mod booking;
pub mod dates;
pub mod driver;
pub mod patterns;
pub mod plate;
pub mod route;

pub use amounts::{coerce_amount, extract_amounts};
pub use booking::{extract_booking_no, is_credit_row, BookingRule};
pub use dates::{extract_dates, extract_time, DateRule};
pub use driver::DriverRule;
pub use plate::PlateRule;
pub use route::split_route;

/// Trait for row field rules.
pub trait FieldRule {
    /// The type of value this rule produces.
    type Value;

    /// Find the first occurrence of the field in a row.
    fn find(&self, row: &str) -> Option<RuleMatch<Self::Value>>;

    /// Find all occurrences of the field, left to right.
    fn find_all(&self, row: &str) -> Vec<RuleMatch<Self::Value>> {
        self.find(row).into_iter().collect()
    }
}

/// A matched field value with its byte span in the source row.
///
/// Spans matter: the plate rule prefers a candidate positioned between
/// the driver match and the first address token, and the route rule
/// slices the row after the plate span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset just past the match.
    pub end: usize,
}

impl<T> RuleMatch<T> {
    pub fn new(value: T, start: usize, end: usize) -> Self {
        Self { value, start, end }
    }
}
