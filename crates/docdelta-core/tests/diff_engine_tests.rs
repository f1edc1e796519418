//! Pure diff engine scenarios.
//!
//! All tests operate on in-memory strings (no I/O).

use docdelta_core::diff::verify::{verify_records, verify_rows};
use docdelta_core::diff::{
    compare, compute_aligned_diff, compute_diff, AlignedRow, ChangeKind, ChangeRecord, RowCategory,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn kinds(records: &[ChangeRecord]) -> Vec<ChangeKind> {
    records.iter().map(|r| r.kind).collect()
}

fn categories(rows: &[AlignedRow]) -> Vec<RowCategory> {
    rows.iter().map(AlignedRow::category).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// S1: the reference scenario, including deletion-before-insertion ordering
#[test]
fn test_single_word_replacement_flat() {
    let records = compute_diff("A B", "A C");
    assert_eq!(
        records,
        vec![
            ChangeRecord::kept("A "),
            ChangeRecord::deleted("B"),
            ChangeRecord::inserted("C"),
        ]
    );
}

#[test]
fn test_single_word_replacement_rows() {
    let rows = compute_aligned_diff("A B", "A C");
    assert_eq!(
        rows,
        vec![
            AlignedRow::matched("A "),
            AlignedRow::deletion("B"),
            AlignedRow::insertion("C"),
        ]
    );
    assert_eq!(rows[1].right(), None);
    assert_eq!(rows[2].left(), None);
}

// S2: empty inputs
#[test]
fn test_empty_inputs() {
    assert!(compute_diff("", "").is_empty());
    assert_eq!(compute_diff("", "abc"), vec![ChangeRecord::inserted("abc")]);
    assert_eq!(compute_diff("abc", ""), vec![ChangeRecord::deleted("abc")]);

    assert!(compute_aligned_diff("", "").is_empty());
    assert_eq!(compute_aligned_diff("", "abc"), vec![AlignedRow::insertion("abc")]);
    assert_eq!(compute_aligned_diff("abc", ""), vec![AlignedRow::deletion("abc")]);
}

// S3: identity
#[test]
fn test_identical_documents() {
    let text = "Clause 1.\n\n  The parties agree.\n";
    assert_eq!(compute_diff(text, text), vec![ChangeRecord::kept(text)]);
    assert_eq!(compute_aligned_diff(text, text), vec![AlignedRow::matched(text)]);
}

// S4: whitespace-only documents on one side
#[test]
fn test_whitespace_only_document() {
    assert_eq!(compute_diff("   ", ""), vec![ChangeRecord::deleted("   ")]);
    assert_eq!(compute_diff("", "\n\n"), vec![ChangeRecord::inserted("\n\n")]);
}

// S5: whitespace changes are real changes
#[test]
fn test_whitespace_change_is_detected() {
    let records = compute_diff("a b", "a  b");
    assert_eq!(
        records,
        vec![
            ChangeRecord::kept("a"),
            ChangeRecord::deleted(" "),
            ChangeRecord::inserted("  "),
            ChangeRecord::kept("b"),
        ]
    );
}

// S6: trailing whitespace survives in both views
#[test]
fn test_trailing_newline_added() {
    let records = compute_diff("end", "end\n");
    assert_eq!(
        records,
        vec![ChangeRecord::kept("end"), ChangeRecord::inserted("\n")]
    );
    let rows = compute_aligned_diff("end", "end\n");
    assert_eq!(
        rows,
        vec![AlignedRow::matched("end"), AlignedRow::insertion("\n")]
    );
}

// S7: pure insertion in the middle
#[test]
fn test_inserted_word() {
    let records = compute_diff("the fox", "the quick fox");
    assert_eq!(
        records,
        vec![
            ChangeRecord::kept("the"),
            ChangeRecord::inserted(" quick"),
            ChangeRecord::kept(" fox"),
        ]
    );
}

// S8: pure deletion in the middle
#[test]
fn test_deleted_word() {
    let records = compute_diff("the quick fox", "the fox");
    assert_eq!(
        records,
        vec![
            ChangeRecord::kept("the"),
            ChangeRecord::deleted(" quick"),
            ChangeRecord::kept(" fox"),
        ]
    );
}

// S9: completely different single tokens
#[test]
fn test_disjoint_single_tokens() {
    assert_eq!(
        compute_diff("old", "new"),
        vec![ChangeRecord::deleted("old"), ChangeRecord::inserted("new")]
    );
    assert_eq!(
        categories(&compute_aligned_diff("old", "new")),
        vec![RowCategory::Deletion, RowCategory::Insertion]
    );
}

// S10: token equality is exact, no case folding or partial word matches
#[test]
fn test_matching_is_exact_token_equality() {
    let records = compute_diff("Payment due", "payment due");
    assert_eq!(
        kinds(&records),
        vec![ChangeKind::Deleted, ChangeKind::Inserted, ChangeKind::Kept]
    );
    assert_eq!(records[2].text, " due");
}

// S11: multi-line document
#[test]
fn test_multiline_document_reconstructs() {
    let a = "Section 1\nThe tenant shall pay rent monthly.\n\nSection 2\nNo pets.\n";
    let b = "Section 1\nThe tenant must pay rent quarterly.\n\nSection 2\nNo pets allowed.\n";

    let comparison = compare(a, b);
    verify_records(a, b, &comparison.records).unwrap();
    verify_rows(a, b, &comparison.rows).unwrap();

    let deleted: Vec<&str> = comparison
        .records
        .iter()
        .filter(|r| r.kind == ChangeKind::Deleted)
        .map(|r| r.text.as_str())
        .collect();
    assert_eq!(deleted, vec!["shall", "monthly.", "pets."]);
}

// S12: determinism including serialized form
#[test]
fn test_diff_is_deterministic() {
    let a = "alpha beta gamma delta";
    let b = "alpha gamma beta delta epsilon";
    let first = compare(a, b);
    let second = compare(a, b);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

// S13: JSON shape consumed by collaborators
#[test]
fn test_json_shape() {
    let rows = compute_aligned_diff("A B", "A C");
    let json = serde_json::to_value(&rows).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"left": {"kind": "kept", "text": "A "}, "right": {"kind": "kept", "text": "A "}},
            {"left": {"kind": "deleted", "text": "B"}, "right": null},
            {"left": null, "right": {"kind": "inserted", "text": "C"}}
        ])
    );
}

// S14: reordered words are not detected as moves
#[test]
fn test_reorder_is_delete_plus_insert() {
    let records = compute_diff("one two", "two one");
    assert_eq!(
        records,
        vec![
            ChangeRecord::deleted("one "),
            ChangeRecord::kept("two"),
            ChangeRecord::inserted(" one"),
        ]
    );
}

// S15: non-ASCII text
#[test]
fn test_unicode_text() {
    let records = compute_diff("naïve café", "naïve 咖啡");
    assert_eq!(
        records,
        vec![
            ChangeRecord::kept("naïve "),
            ChangeRecord::deleted("café"),
            ChangeRecord::inserted("咖啡"),
        ]
    );
}
