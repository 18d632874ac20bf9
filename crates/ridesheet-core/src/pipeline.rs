//! End-to-end conversion pipeline.
//!
//! Geometry extraction, line clustering, row assembly, field parsing
//! and workbook serialization chained behind one entry point. The first
//! page of every document is the cover page and never contributes rows.

use tracing::{debug, info};

use crate::error::{ExtractionError, PdfError, Result};
use crate::fields::RowParser;
use crate::layout::page_lines;
use crate::models::RideRecord;
use crate::pdf::{load_geometry, PageGeometry};
use crate::rows::RowAssembler;
use crate::workbook::build_workbook;

/// Converts ride-invoice PDF bytes into an XLSX workbook.
pub struct Converter {
    parser: RowParser,
}

impl Converter {
    pub fn new() -> Self {
        Self {
            parser: RowParser::new(),
        }
    }

    /// Toggle hyphen tolerance in plate matching.
    pub fn with_hyphen_plates(mut self, enabled: bool) -> Self {
        self.parser = RowParser::new().with_hyphen_plates(enabled);
        self
    }

    /// Convert one document; the output buffer is a complete XLSX file.
    pub fn convert(&self, data: &[u8]) -> Result<Vec<u8>> {
        let pages = load_geometry(data)?;
        let records = self.extract_records(&pages)?;
        info!("extracted {} records from {} pages", records.len(), pages.len());
        Ok(build_workbook(&records)?)
    }

    /// Extract ride records from already-loaded page geometry.
    ///
    /// Pages are processed independently, each with a fresh assembler,
    /// so a row can wrap lines but never pages.
    pub fn extract_records(&self, pages: &[PageGeometry]) -> Result<Vec<RideRecord>> {
        if pages.len() <= 1 {
            return Err(PdfError::DocumentTooShort { pages: pages.len() }.into());
        }

        let mut records = Vec::new();
        for page in &pages[1..] {
            let mut assembler = RowAssembler::new();
            let mut rows = Vec::new();
            for line in page_lines(page) {
                rows.extend(assembler.push_line(&line));
            }
            rows.extend(assembler.finish());

            let before = records.len();
            for row in &rows {
                match self.parser.parse_row(row) {
                    Some(record) => records.push(record),
                    None => debug!("page {}: dropped non-data row: {row:?}", page.number),
                }
            }
            debug!(
                "page {}: {} rows assembled, {} parsed",
                page.number,
                rows.len(),
                records.len() - before
            );
        }

        if records.is_empty() {
            return Err(ExtractionError::NoRows.into());
        }
        Ok(records)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
