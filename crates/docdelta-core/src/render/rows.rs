//! One-line-per-row listing of aligned rows.

use crate::diff::model::{AlignedRow, RowCategory};

/// Render aligned rows one per line: index, marker, quoted text.
///
/// `=` marks a match (text shown once), `-` a deletion, `+` an insertion.
/// Text is shown as a Rust string literal so whitespace and line breaks
/// stay visible.
///
/// ```text
///    0 = "A "
///    1 - "B"
///    2 + "C"
/// ```
pub fn render_rows(rows: &[AlignedRow]) -> String {
    let width = rows.len().saturating_sub(1).to_string().len().max(4);
    let mut out = String::new();
    for (index, row) in rows.iter().enumerate() {
        let (marker, text) = match row.category() {
            RowCategory::Match => ('=', row.left_text()),
            RowCategory::Deletion => ('-', row.left_text()),
            RowCategory::Insertion => ('+', row.right_text()),
        };
        out.push_str(&format!(
            "{:>width$} {} {:?}\n",
            index,
            marker,
            text.unwrap_or_default(),
            width = width
        ));
    }
    out
}
