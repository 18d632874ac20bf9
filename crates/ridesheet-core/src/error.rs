//! Error types for the ridesheet-core library.

use thiserror::Error;

/// Main error type for the ridesheet library.
#[derive(Error, Debug)]
pub enum RidesheetError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Row extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Workbook serialization error.
    #[error("workbook error: {0}")]
    Workbook(#[from] WorkbookError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to walk the positioned-text content of a page.
    #[error("failed to extract page geometry: {0}")]
    Geometry(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The document holds nothing past its cover page, so there is no
    /// table region to extract.
    #[error("document has only {pages} page(s); expected a cover page followed by table pages")]
    DocumentTooShort { pages: usize },
}

/// Errors related to invoice-row extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No rows survived extraction across all table pages.
    #[error("no table rows found after skipping the cover page")]
    NoRows,
}

/// Errors related to workbook serialization.
#[derive(Error, Debug)]
pub enum WorkbookError {
    /// The XLSX writer failed to serialize the workbook.
    #[error("failed to serialize workbook: {0}")]
    Serialize(String),

    /// A worksheet could not be added to the workbook.
    #[error("failed to add sheet {name:?}: {reason}")]
    Sheet { name: String, reason: String },
}

/// Result type for the ridesheet library.
pub type Result<T> = std::result::Result<T, RidesheetError>;
