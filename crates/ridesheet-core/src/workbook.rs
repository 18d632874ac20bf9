//! Workbook construction with umya-spreadsheet.
//!
//! One "All Data" sheet in extraction order plus one sheet per distinct
//! license plate, each closed by a `GROSS TOTAL` row whose Total cell
//! is a live `SUM` formula over the sheet's data range, so the subtotal
//! stays correct under manual edits.

use std::io::Cursor;

use rust_decimal::prelude::ToPrimitive;
use tracing::debug;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::error::WorkbookError;
use crate::fields::rules::coerce_amount;
use crate::models::record::CREDIT_PLACEHOLDER;
use crate::models::{RideRecord, COLUMNS};

/// Maximum sheet-name length in the XLSX format.
pub const SHEET_NAME_MAX: usize = 31;

/// Fallback sheet name for missing or placeholder plates.
const UNKNOWN_SHEET: &str = "Unknown";

/// 1-based column of the Total field ("L").
const TOTAL_COLUMN: u32 = 12;

/// First monetary column, 1-based ("Net amount").
const FIRST_AMOUNT_COLUMN: u32 = 8;

const COLUMN_LETTERS: [&str; 12] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L",
];

const COLUMN_WIDTHS: [f64; 12] = [
    12.0, 12.0, 18.0, 22.0, 14.0, 50.0, 50.0, 12.0, 14.0, 10.0, 10.0, 12.0,
];

/// Serialize the extracted records into an XLSX buffer.
///
/// The caller guarantees a non-empty slice; an empty document is
/// rejected earlier in the pipeline.
pub fn build_workbook(records: &[RideRecord]) -> Result<Vec<u8>, WorkbookError> {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();

    write_sheet(&mut book, "All Data", &records.iter().collect::<Vec<_>>())?;

    for (plate, group) in group_by_plate(records) {
        let name = sanitize_sheet_name(&plate);
        write_sheet(&mut book, &name, &group)?;
    }

    let mut cursor = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(&book, &mut cursor)
        .map_err(|e| WorkbookError::Serialize(e.to_string()))?;

    let buffer = cursor.into_inner();
    debug!(
        "serialized workbook: {} records, {} bytes",
        records.len(),
        buffer.len()
    );
    Ok(buffer)
}

/// Group records by plate, preserving first-seen order. Empty or
/// placeholder plates fall into the "Unknown" group.
fn group_by_plate(records: &[RideRecord]) -> Vec<(String, Vec<&RideRecord>)> {
    let mut groups: Vec<(String, Vec<&RideRecord>)> = Vec::new();

    for record in records {
        let key = if record.license_plate.is_empty()
            || record.license_plate == CREDIT_PLACEHOLDER
        {
            UNKNOWN_SHEET
        } else {
            record.license_plate.as_str()
        };
        match groups.iter_mut().find(|(name, _)| name == key) {
            Some((_, members)) => members.push(record),
            None => groups.push((key.to_string(), vec![record])),
        }
    }

    groups
}

/// Strip characters XLSX forbids in sheet names and clamp the length.
fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, ':' | '\\' | '/' | '?' | '*' | '[' | ']'))
        .take(SHEET_NAME_MAX)
        .collect();
    if cleaned.is_empty() {
        UNKNOWN_SHEET.to_string()
    } else {
        cleaned
    }
}

fn write_sheet(
    book: &mut Spreadsheet,
    name: &str,
    records: &[&RideRecord],
) -> Result<(), WorkbookError> {
    let sheet = book.new_sheet(name).map_err(|e| WorkbookError::Sheet {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    for (i, title) in COLUMNS.iter().enumerate() {
        sheet.get_cell_mut((i as u32 + 1, 1)).set_value(*title);
    }

    for (r, record) in records.iter().enumerate() {
        let row = r as u32 + 2;
        write_record(sheet, row, record);
    }

    // Synthesized total row with a live sum over the data range.
    let total_row = records.len() as u32 + 2;
    sheet.get_cell_mut((1u32, total_row)).set_value("GROSS TOTAL");
    sheet.get_cell_mut((TOTAL_COLUMN, total_row)).set_formula(format!(
        "SUM({col}2:{col}{last})",
        col = COLUMN_LETTERS[TOTAL_COLUMN as usize - 1],
        last = records.len() + 1,
    ));

    for (letter, width) in COLUMN_LETTERS.iter().zip(COLUMN_WIDTHS) {
        sheet.get_column_dimension_mut(letter).set_width(width);
    }

    Ok(())
}

fn write_record(sheet: &mut Worksheet, row: u32, record: &RideRecord) {
    for (c, value) in record.fields().iter().enumerate() {
        let col = c as u32 + 1;
        if col >= FIRST_AMOUNT_COLUMN {
            // Monetary columns: unparsable values leave the cell empty.
            if let Some(amount) = coerce_amount(value).and_then(|d| d.to_f64()) {
                sheet.get_cell_mut((col, row)).set_value_number(amount);
            }
        } else {
            sheet.get_cell_mut((col, row)).set_value(*value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(booking: &str, plate: &str, total: &str) -> RideRecord {
        RideRecord {
            booking_no: booking.to_string(),
            accept_date: "2024-01-01".to_string(),
            ride_date: "2024-01-02 09:15".to_string(),
            driver: "John Smith".to_string(),
            license_plate: plate.to_string(),
            pickup: "Auckland Airport".to_string(),
            destination: "City Hotel".to_string(),
            net_amount: "50.00".to_string(),
            waiting_charge: "0.00".to_string(),
            added_km: "0.00".to_string(),
            gst: "8.25".to_string(),
            total: total.to_string(),
        }
    }

    fn read_back(buffer: &[u8]) -> Spreadsheet {
        umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(buffer.to_vec()), true)
            .expect("workbook should read back")
    }

    #[test]
    fn sheet_per_plate_plus_all_data() {
        let records = vec![
            record("111111111", "ABC123", "63.25"),
            record("222222222", "XYZ789", "10.00"),
            record("333333333", "ABC123", "20.00"),
        ];
        let buffer = build_workbook(&records).unwrap();
        let book = read_back(&buffer);

        let all = book.get_sheet_by_name("All Data").expect("All Data sheet");
        // Header + 3 records + total row.
        assert_eq!(all.get_value((1, 1)), "Booking No");
        assert_eq!(all.get_value((1, 5)), "GROSS TOTAL");

        let abc = book.get_sheet_by_name("ABC123").expect("ABC123 sheet");
        assert_eq!(abc.get_value((1, 2)), "111111111");
        assert_eq!(abc.get_value((1, 3)), "333333333");
        assert_eq!(abc.get_value((1, 4)), "GROSS TOTAL");

        let xyz = book.get_sheet_by_name("XYZ789").expect("XYZ789 sheet");
        assert_eq!(xyz.get_value((1, 2)), "222222222");
    }

    #[test]
    fn formula_covers_rows_two_through_n_plus_one() {
        let records = vec![
            record("111111111", "ABC123", "63.25"),
            record("222222222", "ABC123", "10.00"),
        ];
        let buffer = build_workbook(&records).unwrap();
        let book = read_back(&buffer);

        let all = book.get_sheet_by_name("All Data").unwrap();
        let cell = all.get_cell((12u32, 4u32)).expect("total formula cell");
        assert_eq!(cell.get_formula(), "SUM(L2:L3)");

        let abc = book.get_sheet_by_name("ABC123").unwrap();
        let cell = abc.get_cell((12u32, 4u32)).expect("total formula cell");
        assert_eq!(cell.get_formula(), "SUM(L2:L3)");
    }

    #[test]
    fn placeholder_and_empty_plates_group_as_unknown() {
        let records = vec![
            record("CREDIT", "—", "-12.34"),
            record("111111111", "", "5.00"),
        ];
        let buffer = build_workbook(&records).unwrap();
        let book = read_back(&buffer);

        let unknown = book.get_sheet_by_name("Unknown").expect("Unknown sheet");
        assert_eq!(unknown.get_value((1, 2)), "CREDIT");
        assert_eq!(unknown.get_value((1, 3)), "111111111");
        assert_eq!(unknown.get_value((1, 4)), "GROSS TOTAL");
    }

    #[test]
    fn monetary_strings_become_numbers() {
        let mut credit = record("CREDIT", "—", "(12.34)");
        credit.net_amount = "1,234.56".to_string();
        credit.gst = "not a number".to_string();

        let buffer = build_workbook(&[credit]).unwrap();
        let book = read_back(&buffer);
        let all = book.get_sheet_by_name("All Data").unwrap();

        assert_eq!(all.get_value((8, 2)), "1234.56");
        assert_eq!(all.get_value((12, 2)), "-12.34");
        // Unparsable GST leaves the cell empty.
        assert_eq!(all.get_value((11, 2)), "");
    }

    #[test]
    fn sheet_names_are_sanitized() {
        assert_eq!(sanitize_sheet_name("AB[C]1*2?3/"), "ABC123");
        assert_eq!(sanitize_sheet_name(":\\/?*[]"), "Unknown");
        let long = "A".repeat(40);
        assert_eq!(sanitize_sheet_name(&long).len(), SHEET_NAME_MAX);
    }

    #[test]
    fn every_record_lands_in_exactly_one_plate_group() {
        let records = vec![
            record("1", "AAA", "1.00"),
            record("2", "BBB", "2.00"),
            record("3", "AAA", "3.00"),
            record("4", "", "4.00"),
        ];
        let groups = group_by_plate(&records);
        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, records.len());
        let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["AAA", "BBB", "Unknown"]);
        assert_eq!(groups[0].1.len(), 2);
    }
}
