//! The extracted ride record and its fixed column layout.

use serde::{Deserialize, Serialize};

/// Column headers in workbook order.
pub const COLUMNS: [&str; 12] = [
    "Booking No",
    "Accept date",
    "Ride date",
    "Driver",
    "License plate",
    "Pickup",
    "Destination",
    "Net amount",
    "Waiting charge",
    "Added km",
    "GST",
    "Total",
];

/// Placeholder used for fields a credit row does not carry.
pub const CREDIT_PLACEHOLDER: &str = "—";

/// Booking-number value assigned to credit/refund rows.
pub const CREDIT_BOOKING: &str = "CREDIT";

/// Pickup label synthesized for credit/refund rows.
pub const CREDIT_PICKUP: &str = "Fee for ride given back";

/// One logical invoice row, fully extracted.
///
/// Every field is kept as the string found in the document; the five
/// monetary fields are coerced to numbers only when the workbook is
/// built. `booking_no` is either a 9-digit number or `CREDIT` for
/// refund/fee-reversal rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideRecord {
    /// 9-digit booking number, or `CREDIT` for credit rows.
    pub booking_no: String,

    /// Date the booking was accepted (`yyyy-mm-dd`).
    pub accept_date: String,

    /// Date of the ride, with `HH:MM` appended when present.
    pub ride_date: String,

    /// Driver name.
    pub driver: String,

    /// Vehicle license plate (hyphen stripped).
    pub license_plate: String,

    /// Pickup location.
    pub pickup: String,

    /// Destination location.
    pub destination: String,

    /// Net fare amount.
    pub net_amount: String,

    /// Waiting-time charge.
    pub waiting_charge: String,

    /// Additional-kilometre charge.
    pub added_km: String,

    /// Goods and services tax.
    pub gst: String,

    /// Gross total.
    pub total: String,
}

impl RideRecord {
    /// Whether this record represents a credit/refund row.
    pub fn is_credit(&self) -> bool {
        self.booking_no == CREDIT_BOOKING
    }

    /// The record's fields in workbook column order.
    pub fn fields(&self) -> [&str; 12] {
        [
            &self.booking_no,
            &self.accept_date,
            &self.ride_date,
            &self.driver,
            &self.license_plate,
            &self.pickup,
            &self.destination,
            &self.net_amount,
            &self.waiting_charge,
            &self.added_km,
            &self.gst,
            &self.total,
        ]
    }
}
