//! Heuristic row parsing.

pub mod rules;

use tracing::debug;

use crate::models::record::{CREDIT_BOOKING, CREDIT_PICKUP, CREDIT_PLACEHOLDER};
use crate::models::RideRecord;

use rules::{
    extract_amounts, extract_dates, extract_time, is_credit_row, split_route, BookingRule,
    DriverRule, FieldRule, PlateRule,
};

/// Parses one reassembled row string into a [`RideRecord`].
///
/// Each field comes from an independent pattern search over the whole
/// row; the searches are ordered but never exclusive. A row that
/// carries neither a booking number nor credit phrasing is rejected.
pub struct RowParser {
    /// Allow one internal hyphen in plate candidates.
    hyphen_plates: bool,
}

impl RowParser {
    /// Create a parser with the default (hyphen-tolerant) rule set.
    pub fn new() -> Self {
        Self { hyphen_plates: true }
    }

    /// Toggle hyphen tolerance in plate matching.
    pub fn with_hyphen_plates(mut self, enabled: bool) -> Self {
        self.hyphen_plates = enabled;
        self
    }

    /// Parse one row string; `None` means the row is not a data row.
    pub fn parse_row(&self, row: &str) -> Option<RideRecord> {
        let booking = BookingRule.find(row);
        let credit_phrasing = is_credit_row(row);

        if booking.is_none() && !credit_phrasing {
            debug!("rejected row: no booking number and no credit phrasing");
            return None;
        }

        // A credit row is one that lacks a booking number entirely.
        let is_credit = booking.is_none();

        let dates = extract_dates(row);
        let time = extract_time(row);

        let driver = DriverRule.find(row);
        let plate = PlateRule::new(self.hyphen_plates).select(row, driver.as_ref());

        let (pickup, destination) = match &plate {
            Some(plate) => split_route(row, plate),
            None => (String::new(), String::new()),
        };

        let amounts = extract_amounts(row);
        let amount = |idx: usize| -> String {
            amounts
                .get(idx)
                .cloned()
                .unwrap_or_else(|| "0.00".to_string())
        };

        let accept_date = dates.first().cloned().unwrap_or_default();
        let ride_date = if is_credit {
            dates.get(1).cloned().unwrap_or_default()
        } else {
            let mut parts: Vec<String> = Vec::new();
            if let Some(date) = dates.get(1) {
                parts.push(date.clone());
            }
            if let Some(time) = time {
                parts.push(time);
            }
            parts.join(" ")
        };

        Some(RideRecord {
            booking_no: booking
                .map(|m| m.value)
                .unwrap_or_else(|| CREDIT_BOOKING.to_string()),
            accept_date,
            ride_date,
            driver: if is_credit {
                CREDIT_PLACEHOLDER.to_string()
            } else {
                driver.map(|m| m.value).unwrap_or_default()
            },
            license_plate: if is_credit {
                CREDIT_PLACEHOLDER.to_string()
            } else {
                plate.map(|m| m.value).unwrap_or_default()
            },
            pickup: if is_credit {
                CREDIT_PICKUP.to_string()
            } else {
                pickup
            },
            destination: if is_credit { String::new() } else { destination },
            // Position order: net, waiting, added km, (net total,
            // discarded), GST, gross total.
            net_amount: amount(0),
            waiting_charge: amount(1),
            added_km: amount(2),
            gst: amount(4),
            total: amount(5),
        })
    }
}

impl Default for RowParser {
    fn default() -> Self {
        Self::new()
    }
}
