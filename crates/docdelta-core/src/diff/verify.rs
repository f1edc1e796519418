//! Invariant checks for diff outputs.
//!
//! The engine never calls these. Tests use them, and callers that store
//! or forward results can use them to reject tampered or hand-built data.

use crate::diff::model::{AlignedRow, ChangeRecord, Comparison};
use crate::errors::{DocDeltaError, Result};

fn violation(invariant: &str, detail: impl Into<String>) -> DocDeltaError {
    DocDeltaError::InvariantViolation {
        invariant: invariant.to_string(),
        row: None,
        detail: detail.into(),
    }
}

fn row_violation(invariant: &str, row: usize, detail: impl Into<String>) -> DocDeltaError {
    DocDeltaError::InvariantViolation {
        invariant: invariant.to_string(),
        row: Some(row),
        detail: detail.into(),
    }
}

/// Check a flat change list against the documents it claims to describe.
///
/// # Errors
///
/// `InvariantViolation` naming the first failing check:
/// `empty_record`, `maximal_runs`, `reconstruct_a` or `reconstruct_b`.
pub fn verify_records(text_a: &str, text_b: &str, records: &[ChangeRecord]) -> Result<()> {
    if let Some(pos) = records.iter().position(|r| r.text.is_empty()) {
        return Err(violation("empty_record", format!("record {} has no text", pos)));
    }

    if let Some(pos) = records.windows(2).position(|w| w[0].kind == w[1].kind) {
        return Err(violation(
            "maximal_runs",
            format!("records {} and {} share kind {:?}", pos, pos + 1, records[pos].kind),
        ));
    }

    let rebuilt_a: String = records
        .iter()
        .filter(|r| r.kind.in_a())
        .map(|r| r.text.as_str())
        .collect();
    if rebuilt_a != text_a {
        return Err(violation("reconstruct_a", "kept + deleted text differs from A"));
    }

    let rebuilt_b: String = records
        .iter()
        .filter(|r| r.kind.in_b())
        .map(|r| r.text.as_str())
        .collect();
    if rebuilt_b != text_b {
        return Err(violation("reconstruct_b", "kept + inserted text differs from B"));
    }

    Ok(())
}

/// Check an aligned-row list against the documents it claims to describe.
///
/// # Errors
///
/// `InvariantViolation` naming the first failing check: `row_shape`,
/// `empty_record`, `maximal_rows`, `reconstruct_a` or `reconstruct_b`.
pub fn verify_rows(text_a: &str, text_b: &str, rows: &[AlignedRow]) -> Result<()> {
    if let Some(pos) = rows.iter().position(|r| !r.is_well_formed()) {
        return Err(row_violation("row_shape", pos, "not a legal row"));
    }

    let has_empty_side = |row: &AlignedRow| {
        row.left_text().is_some_and(str::is_empty) || row.right_text().is_some_and(str::is_empty)
    };
    if let Some(pos) = rows.iter().position(has_empty_side) {
        return Err(row_violation("empty_record", pos, "row has an empty side"));
    }

    if let Some(pos) = rows
        .windows(2)
        .position(|w| w[0].category() == w[1].category())
    {
        return Err(row_violation(
            "maximal_rows",
            pos + 1,
            format!("shares category {:?} with the previous row", rows[pos].category()),
        ));
    }

    let rebuilt_a: String = rows.iter().filter_map(AlignedRow::left_text).collect();
    if rebuilt_a != text_a {
        return Err(violation("reconstruct_a", "left column differs from A"));
    }

    let rebuilt_b: String = rows.iter().filter_map(AlignedRow::right_text).collect();
    if rebuilt_b != text_b {
        return Err(violation("reconstruct_b", "right column differs from B"));
    }

    Ok(())
}

/// Check both views of a [`Comparison`], flat records first.
///
/// # Errors
///
/// The first `InvariantViolation` from [`verify_records`] or [`verify_rows`].
pub fn verify_comparison(text_a: &str, text_b: &str, comparison: &Comparison) -> Result<()> {
    verify_records(text_a, text_b, &comparison.records)?;
    verify_rows(text_a, text_b, &comparison.rows)
}
