//! Core library for ride-invoice PDF to XLSX conversion.
//!
//! This crate provides:
//! - PDF positioned-text extraction (fragment geometry per page)
//! - Line clustering and logical row assembly across wrapped lines
//! - Heuristic field extraction (booking, dates, driver, plate, route, amounts)
//! - Multi-sheet workbook construction grouped by license plate

pub mod error;
pub mod fields;
pub mod layout;
pub mod models;
pub mod pdf;
pub mod pipeline;
pub mod rows;
pub mod workbook;

pub use error::{ExtractionError, PdfError, Result, RidesheetError, WorkbookError};
pub use fields::RowParser;
pub use models::{RideRecord, COLUMNS};
pub use pdf::{load_geometry, GeometryItem, PageGeometry};
pub use pipeline::Converter;
pub use rows::RowAssembler;
pub use workbook::build_workbook;
