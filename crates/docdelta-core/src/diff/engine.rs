//! Diff entry points.
//!
//! Every operation tokenizes both inputs, runs one LCS alignment and
//! projects the classified tokens into the requested view. Nothing is
//! cached between calls.

use crate::diff::compact::compact_runs;
use crate::diff::model::{AlignedRow, ChangeRecord, ClassifiedToken, Comparison};
use crate::diff::rows::align_rows;
use crate::lcs::{backtrack, LcsTable};
use crate::tokenizer::tokenize;
use crate::{log_op_end, log_op_start};
use std::time::Instant;

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

/// Tokenize and align both texts, logging sizes under `op`.
fn align(op: &'static str, text_a: &str, text_b: &str) -> Vec<ClassifiedToken> {
    let a = tokenize(text_a);
    let b = tokenize(text_b);
    log_op_start!(op, tokens_a = a.len(), tokens_b = b.len());

    let table = LcsTable::build(&a, &b);
    tracing::debug!(op = op, lcs_len = table.lcs_len(), "alignment table built");

    backtrack(&a, &b, &table)
}

/// Flat view: maximal runs of kept, inserted and deleted text.
///
/// `compute_diff("", "")` is empty; identical non-empty inputs produce a
/// single `Kept` record.
pub fn compute_diff(text_a: &str, text_b: &str) -> Vec<ChangeRecord> {
    let started = Instant::now();
    let tokens = align("compute_diff", text_a, text_b);
    let records = compact_runs(&tokens);
    log_op_end!(
        "compute_diff",
        duration_ms = elapsed_ms(started),
        records = records.len()
    );
    records
}

/// Row view: match, insertion and deletion rows for two-column rendering.
///
/// Row indices are stable for a given input pair and serve as keys for
/// annotations attached downstream.
pub fn compute_aligned_diff(text_a: &str, text_b: &str) -> Vec<AlignedRow> {
    let started = Instant::now();
    let tokens = align("compute_aligned_diff", text_a, text_b);
    let rows = align_rows(&tokens);
    log_op_end!(
        "compute_aligned_diff",
        duration_ms = elapsed_ms(started),
        rows = rows.len()
    );
    rows
}

/// Both views from a single alignment pass.
///
/// Equivalent to calling [`compute_diff`] and [`compute_aligned_diff`]
/// separately, at half the cost.
pub fn compare(text_a: &str, text_b: &str) -> Comparison {
    let started = Instant::now();
    let tokens = align("compare", text_a, text_b);
    let comparison = Comparison {
        records: compact_runs(&tokens),
        rows: align_rows(&tokens),
    };
    log_op_end!(
        "compare",
        duration_ms = elapsed_ms(started),
        records = comparison.records.len(),
        rows = comparison.rows.len()
    );
    comparison
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_matches_separate_calls() {
        let a = "The tenant shall pay rent monthly.";
        let b = "The tenant must pay rent quarterly.";
        let both = compare(a, b);
        assert_eq!(both.records, compute_diff(a, b));
        assert_eq!(both.rows, compute_aligned_diff(a, b));
    }

    #[test]
    fn test_empty_pair() {
        assert!(compute_diff("", "").is_empty());
        assert!(compute_aligned_diff("", "").is_empty());
        assert!(compare("", "").is_identical());
    }
}
