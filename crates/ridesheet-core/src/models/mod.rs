//! Data models for extracted ride records.

pub mod record;

pub use record::{RideRecord, COLUMNS};
