//! Logical row assembly from page lines.
//!
//! Invoice rows wrap across several physical lines. The assembler is a
//! two-state machine fed one line at a time: a row-start line (index
//! plus 9-digit booking number) opens a buffer, footer lines close the
//! table region, and anything else while inside a row is a wrapped
//! continuation. The buffer must always be flushed at end of page so
//! the last row of a page is never lost.

use std::mem;

use crate::fields::rules::patterns::{FOOTER, ROW_START};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    InRow,
}

/// Reassembles logical row strings from a page's ordered lines.
#[derive(Debug)]
pub struct RowAssembler {
    buf: String,
    state: State,
}

impl RowAssembler {
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            state: State::Idle,
        }
    }

    /// Feed one line; returns a completed row string when the line
    /// closes the pending buffer.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        if ROW_START.is_match(line) {
            let done = self.take_buf();
            self.buf.push_str(line);
            self.state = State::InRow;
            return done;
        }

        if self.state == State::InRow {
            if FOOTER.is_match(line) {
                self.state = State::Idle;
                return self.take_buf();
            }
            // Wrapped continuation of the current row.
            self.buf.push(' ');
            self.buf.push_str(line);
        }
        // Idle + no marker: cover-page or header noise.
        None
    }

    /// Flush the pending buffer at end of page.
    pub fn finish(&mut self) -> Option<String> {
        self.state = State::Idle;
        self.take_buf()
    }

    fn take_buf(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            None
        } else {
            Some(mem::take(&mut self.buf))
        }
    }
}

impl Default for RowAssembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assemble(lines: &[&str]) -> Vec<String> {
        let mut assembler = RowAssembler::new();
        let mut rows = Vec::new();
        for line in lines {
            rows.extend(assembler.push_line(line));
        }
        rows.extend(assembler.finish());
        rows
    }

    #[test]
    fn consecutive_row_starts_never_merge() {
        let rows = assemble(&[
            "1 123456789 2024-01-01 first",
            "2 987654321 2024-01-02 second",
        ]);
        assert_eq!(
            rows,
            vec![
                "1 123456789 2024-01-01 first".to_string(),
                "2 987654321 2024-01-02 second".to_string(),
            ]
        );
    }

    #[test]
    fn wrapped_lines_append_with_space() {
        let rows = assemble(&[
            "1 123456789 2024-01-01",
            "Auckland Airport",
            "City Hotel",
        ]);
        assert_eq!(
            rows,
            vec!["1 123456789 2024-01-01 Auckland Airport City Hotel".to_string()]
        );
    }

    #[test]
    fn footer_closes_the_row() {
        let rows = assemble(&[
            "1 123456789 ride one",
            "Subtotal 50.00 NZ$",
            "stray line after footer",
        ]);
        assert_eq!(rows, vec!["1 123456789 ride one".to_string()]);
    }

    #[test]
    fn footer_variants_are_recognized() {
        for footer in ["Total gross 1,234.56 NZ$", "Page 2 of 7", "Summe", "Gesamtpreis"] {
            let rows = assemble(&["1 123456789 ride", footer, "noise"]);
            assert_eq!(rows.len(), 1, "footer {:?} did not close the row", footer);
            assert_eq!(rows[0], "1 123456789 ride");
        }
    }

    #[test]
    fn idle_noise_is_discarded() {
        let rows = assemble(&[
            "Invoice for October",
            "Customer: Example Ltd",
            "1 123456789 ride",
        ]);
        assert_eq!(rows, vec!["1 123456789 ride".to_string()]);
    }

    #[test]
    fn terminal_flush_matches_synthetic_footer() {
        let lines = ["1 123456789 ride", "wrapped tail"];
        let without_footer = assemble(&lines);
        let with_footer = assemble(&["1 123456789 ride", "wrapped tail", "Subtotal"]);
        assert_eq!(without_footer, with_footer);
        assert_eq!(without_footer, vec!["1 123456789 ride wrapped tail".to_string()]);
    }
}
