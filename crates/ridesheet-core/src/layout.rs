//! Line reconstruction from positioned fragments.
//!
//! Fragments are clustered into visual rows by their vertical position
//! rounded to one decimal place (sub-pixel jitter in y lands in the
//! same cluster), ordered top to bottom, and joined left to right.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::pdf::PageGeometry;

/// Ordered line strings for one page.
///
/// A finite, consuming iterator: once a line is yielded it cannot be
/// replayed.
pub struct Lines<'a> {
    groups: std::collections::btree_map::IntoIter<i64, Vec<(f64, &'a str)>>,
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let (_, mut items) = self.groups.next()?;
        items.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        Some(
            items
                .iter()
                .map(|(_, text)| *text)
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

/// Cluster a page's fragments into ordered lines.
pub fn page_lines(page: &PageGeometry) -> Lines<'_> {
    let mut groups: BTreeMap<i64, Vec<(f64, &str)>> = BTreeMap::new();

    for item in &page.items {
        let text = item.text.trim();
        if text.is_empty() {
            continue;
        }
        // One-decimal cluster key, kept integral so it orders exactly.
        let key = (item.y * 10.0).round() as i64;
        groups.entry(key).or_default().push((item.x, text));
    }

    Lines {
        groups: groups.into_iter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::GeometryItem;
    use pretty_assertions::assert_eq;

    fn item(x: f64, y: f64, text: &str) -> GeometryItem {
        GeometryItem {
            x,
            y,
            text: text.to_string(),
        }
    }

    fn page(items: Vec<GeometryItem>) -> PageGeometry {
        PageGeometry { number: 2, items }
    }

    #[test]
    fn fragments_join_left_to_right() {
        let page = page(vec![
            item(200.0, 100.0, "123456789"),
            item(50.0, 100.0, "1"),
            item(350.0, 100.0, "2024-01-01"),
        ]);
        let lines: Vec<String> = page_lines(&page).collect();
        assert_eq!(lines, vec!["1 123456789 2024-01-01".to_string()]);
    }

    #[test]
    fn jitter_within_a_tenth_stays_on_one_line() {
        let page = page(vec![
            item(50.0, 100.02, "left"),
            item(150.0, 99.98, "right"),
        ]);
        let lines: Vec<String> = page_lines(&page).collect();
        assert_eq!(lines, vec!["left right".to_string()]);
    }

    #[test]
    fn lines_order_top_to_bottom() {
        let page = page(vec![
            item(50.0, 300.0, "third"),
            item(50.0, 100.0, "first"),
            item(50.0, 200.0, "second"),
        ]);
        let lines: Vec<String> = page_lines(&page).collect();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_fragments_are_dropped() {
        let page = page(vec![
            item(50.0, 100.0, "  "),
            item(60.0, 100.0, "kept"),
        ]);
        let lines: Vec<String> = page_lines(&page).collect();
        assert_eq!(lines, vec!["kept"]);
    }
}
