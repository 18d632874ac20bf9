//! Positioned-text geometry extraction.
//!
//! The real input boundary of the pipeline is not the PDF container but
//! the per-page list of positioned text fragments. `GeometryOutput`
//! implements pdf-extract's `OutputDev` and collects each character run
//! (already decoded through the document's font tables) into a
//! [`GeometryItem`] carrying top-down page coordinates.

use lopdf::Document;
use pdf_extract::{MediaBox, OutputDev, OutputError, Transform};
use tracing::debug;

use crate::error::PdfError;

/// One positioned text fragment from page layout extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryItem {
    /// Left edge of the fragment, in page points.
    pub x: f64,
    /// Baseline position from the top of the page, in page points.
    pub y: f64,
    /// Decoded fragment text.
    pub text: String,
}

/// All positioned fragments of a single page.
#[derive(Debug, Clone, Default)]
pub struct PageGeometry {
    /// Page number (1-indexed).
    pub number: u32,
    /// Fragments in content-stream order.
    pub items: Vec<GeometryItem>,
}

/// Output device collecting positioned fragments per page.
///
/// Fragment boundaries follow the same word-gap and line-jump
/// thresholds pdf-extract's plain-text device uses, so a fragment is a
/// visually contiguous run of characters on one baseline.
pub struct GeometryOutput {
    pages: Vec<PageGeometry>,
    page_height: f64,
    buf: String,
    buf_x: f64,
    buf_y: f64,
    last_end: f64,
    last_y: f64,
    at_word_start: bool,
}

impl GeometryOutput {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            page_height: 0.0,
            buf: String::new(),
            buf_x: 0.0,
            buf_y: 0.0,
            last_end: 100000.0,
            last_y: 0.0,
            at_word_start: false,
        }
    }

    /// Consume the device and return the collected pages.
    pub fn into_pages(self) -> Vec<PageGeometry> {
        self.pages
    }

    fn flush_fragment(&mut self) {
        if self.buf.trim().is_empty() {
            self.buf.clear();
            return;
        }
        let text = std::mem::take(&mut self.buf).trim().to_string();
        if let Some(page) = self.pages.last_mut() {
            page.items.push(GeometryItem {
                x: self.buf_x,
                y: self.buf_y,
                text,
            });
        }
    }
}

impl Default for GeometryOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputDev for GeometryOutput {
    fn begin_page(
        &mut self,
        page_num: u32,
        media_box: &MediaBox,
        _art_box: Option<(f64, f64, f64, f64)>,
    ) -> Result<(), OutputError> {
        self.pages.push(PageGeometry {
            number: page_num,
            items: Vec::new(),
        });
        self.page_height = media_box.ury - media_box.lly;
        self.last_end = 100000.0;
        self.last_y = 0.0;
        self.buf.clear();
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), OutputError> {
        self.flush_fragment();
        Ok(())
    }

    fn output_character(
        &mut self,
        trm: &Transform,
        width: f64,
        _spacing: f64,
        font_size: f64,
        char: &str,
    ) -> Result<(), OutputError> {
        // Text-space position, flipped so y grows downward.
        let x = trm.m31;
        let y = self.page_height - trm.m32;

        // Effective glyph size after the text matrix is applied.
        let tx = font_size * (trm.m11 + trm.m21);
        let ty = font_size * (trm.m12 + trm.m22);
        let scaled_font_size = (tx * ty).abs().sqrt();

        if self.at_word_start {
            let line_jump = (y - self.last_y).abs() > scaled_font_size * 1.5
                || (x < self.last_end && (y - self.last_y).abs() > scaled_font_size * 0.5);
            let word_gap = x > self.last_end + scaled_font_size * 0.1;
            if line_jump || word_gap {
                self.flush_fragment();
            }
        }

        if self.buf.is_empty() {
            self.buf_x = x;
            self.buf_y = y;
        }
        self.buf.push_str(char);

        self.at_word_start = false;
        self.last_y = y;
        self.last_end = x + width * scaled_font_size;
        Ok(())
    }

    fn begin_word(&mut self) -> Result<(), OutputError> {
        self.at_word_start = true;
        Ok(())
    }

    fn end_word(&mut self) -> Result<(), OutputError> {
        Ok(())
    }

    fn end_line(&mut self) -> Result<(), OutputError> {
        Ok(())
    }
}

/// Load a PDF from a byte buffer and extract per-page geometry.
pub fn load_geometry(data: &[u8]) -> Result<Vec<PageGeometry>, PdfError> {
    let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

    // Handle PDFs with empty-password encryption.
    if doc.is_encrypted() {
        if doc.decrypt("").is_err() {
            return Err(PdfError::Encrypted);
        }
        debug!("decrypted PDF with empty password");
    }

    let page_count = doc.get_pages().len();
    if page_count == 0 {
        return Err(PdfError::NoPages);
    }
    debug!("loaded PDF with {} pages", page_count);

    let mut device = GeometryOutput::new();
    pdf_extract::output_doc(&doc, &mut device)
        .map_err(|e| PdfError::Geometry(e.to_string()))?;

    let pages = device.into_pages();
    debug!(
        "collected {} fragments across {} pages",
        pages.iter().map(|p| p.items.len()).sum::<usize>(),
        pages.len()
    );
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> Transform {
        let mut t = Transform::identity();
        t.m31 = x;
        t.m32 = y;
        t
    }

    fn media_box() -> MediaBox {
        MediaBox {
            llx: 0.0,
            lly: 0.0,
            urx: 612.0,
            ury: 792.0,
        }
    }

    fn emit_word(out: &mut GeometryOutput, x: f64, y: f64, word: &str) {
        out.begin_word().unwrap();
        for (i, ch) in word.chars().enumerate() {
            out.output_character(&at(x + i as f64 * 6.0, y), 0.5, 0.0, 12.0, &ch.to_string())
                .unwrap();
        }
        out.end_word().unwrap();
    }

    #[test]
    fn close_words_join_into_one_fragment() {
        let mut out = GeometryOutput::new();
        out.begin_page(1, &media_box(), None).unwrap();
        emit_word(&mut out, 100.0, 700.0, "Hello");
        // Next word starts exactly where the previous ended plus a
        // sub-threshold gap, so it stays in the same fragment.
        emit_word(&mut out, 130.5, 700.0, "World");
        out.end_page().unwrap();

        let pages = out.into_pages();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].items.len(), 1);
        assert_eq!(pages[0].items[0].text, "HelloWorld");
        assert_eq!(pages[0].items[0].x, 100.0);
        assert_eq!(pages[0].items[0].y, 92.0);
    }

    #[test]
    fn wide_gap_splits_fragments() {
        let mut out = GeometryOutput::new();
        out.begin_page(1, &media_box(), None).unwrap();
        emit_word(&mut out, 100.0, 700.0, "Pickup");
        emit_word(&mut out, 300.0, 700.0, "Destination");
        out.end_page().unwrap();

        let pages = out.into_pages();
        assert_eq!(pages[0].items.len(), 2);
        assert_eq!(pages[0].items[0].text, "Pickup");
        assert_eq!(pages[0].items[1].text, "Destination");
        assert_eq!(pages[0].items[1].x, 300.0);
    }

    #[test]
    fn line_jump_splits_fragments() {
        let mut out = GeometryOutput::new();
        out.begin_page(1, &media_box(), None).unwrap();
        emit_word(&mut out, 100.0, 700.0, "First");
        emit_word(&mut out, 100.0, 660.0, "Second");
        out.end_page().unwrap();

        let pages = out.into_pages();
        assert_eq!(pages[0].items.len(), 2);
        assert!(pages[0].items[1].y > pages[0].items[0].y);
    }

    #[test]
    fn pages_collect_independently() {
        let mut out = GeometryOutput::new();
        out.begin_page(1, &media_box(), None).unwrap();
        emit_word(&mut out, 100.0, 700.0, "Cover");
        out.end_page().unwrap();
        out.begin_page(2, &media_box(), None).unwrap();
        emit_word(&mut out, 100.0, 700.0, "Table");
        out.end_page().unwrap();

        let pages = out.into_pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[1].number, 2);
        assert_eq!(pages[1].items[0].text, "Table");
    }

    #[test]
    fn load_geometry_rejects_garbage() {
        let err = load_geometry(b"not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }
}
