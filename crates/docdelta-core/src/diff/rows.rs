//! Row alignment for the two-column view.

use crate::diff::model::{AlignedRow, ChangeKind, ClassifiedToken};

/// Build one row per classified token, then merge adjacent same-category rows.
///
/// A deletion followed by an insertion stays two rows even though each has
/// only one populated side: "removed here" and "added here" remain
/// separate units for rendering and annotation.
pub fn align_rows(tokens: &[ClassifiedToken]) -> Vec<AlignedRow> {
    let rows = tokens
        .iter()
        .map(|token| match token.kind {
            ChangeKind::Kept => AlignedRow::matched(token.text.as_str()),
            ChangeKind::Inserted => AlignedRow::insertion(token.text.as_str()),
            ChangeKind::Deleted => AlignedRow::deletion(token.text.as_str()),
        })
        .collect();
    merge_rows(rows)
}

/// Merge adjacent rows of the same category.
///
/// Matches concatenate both sides independently; insertions only the right
/// side; deletions only the left side. Idempotent.
pub fn merge_rows(rows: Vec<AlignedRow>) -> Vec<AlignedRow> {
    let mut merged: Vec<AlignedRow> = Vec::with_capacity(rows.len());
    for row in rows {
        match merged.last_mut() {
            Some(last) if last.category() == row.category() => last.absorb(row),
            _ => merged.push(row),
        }
    }
    merged
}
