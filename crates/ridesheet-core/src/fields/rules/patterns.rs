//! Common regex patterns for ride-invoice row extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Row markers
    pub static ref ROW_START: Regex = Regex::new(
        r"^\d+\s+\d{9}\b"
    ).unwrap();

    pub static ref FOOTER: Regex = Regex::new(
        r"(?i)Subtotal|Total gross|Page \d+ of|\bSumme\b|Gesamtpreis"
    ).unwrap();

    // Booking number: 9-digit id
    pub static ref BOOKING_NO: Regex = Regex::new(
        r"\b\d{9}\b"
    ).unwrap();

    // Credit / fee-reversal phrasing
    pub static ref CREDIT_ROW: Regex = Regex::new(
        r"(?i)fee\s+for\s+ride\s+given\s+back|credit|refund"
    ).unwrap();

    // Dates and times
    pub static ref DATE_ISO: Regex = Regex::new(
        r"\b\d{4}-\d{2}-\d{2}\b"
    ).unwrap();

    pub static ref TIME_HHMM: Regex = Regex::new(
        r"\b\d{2}:\d{2}\b"
    ).unwrap();

    // Driver: runs of 1-3 capitalized words; the address-token check is
    // applied in code since the regex crate has no lookahead
    pub static ref NAME_RUN: Regex = Regex::new(
        r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+){0,2}\b"
    ).unwrap();

    pub static ref NAME_STOP: Regex = Regex::new(
        r"^\s*(?:Road|Street|Drive|Avenue|Airport|Hotel|International)\b"
    ).unwrap();

    // License plate candidates (common NZ plate lengths)
    pub static ref PLATE_TOKEN: Regex = Regex::new(
        r"\b[A-Z0-9]{2,8}\b"
    ).unwrap();

    pub static ref PLATE_TOKEN_HYPHEN: Regex = Regex::new(
        r"\b[A-Z0-9]+(?:-[A-Z0-9]+)?\b"
    ).unwrap();

    pub static ref PURE_DIGITS: Regex = Regex::new(
        r"^\d+$"
    ).unwrap();

    pub static ref TIME_SHAPE: Regex = Regex::new(
        r"^\d{2}:\d{2}$"
    ).unwrap();

    // Address-type tokens anchoring pickup/destination
    pub static ref ADDRESS_KEYWORD: Regex = Regex::new(
        r"(?i)\b(?:Airport|International|Hotel|Street|Road|Drive|Avenue|Place|Crescent|Terrace|Lane|Harbour|Quay|Terminal)\b"
    ).unwrap();

    // Monetary amounts: 12.34 NZ$, -12.34 NZ$, (12.34) NZ$, 1,234.56 NZ$
    pub static ref AMOUNT_NZD: Regex = Regex::new(
        r"(-?\(?\d{1,3}(?:,\d{3})*\.\d{2}\)?)\s*NZ\$"
    ).unwrap();
}
