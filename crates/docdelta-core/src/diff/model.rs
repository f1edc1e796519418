//! Diff output types.
//!
//! All output types implement `Debug, Clone, PartialEq, Eq, Serialize,
//! Deserialize` so results can be compared structurally in tests and handed
//! to collaborators as JSON.

use serde::{Deserialize, Serialize};

/// Classification of a token or run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Present in both documents
    Kept,
    /// Present only in document B
    Inserted,
    /// Present only in document A
    Deleted,
}

impl ChangeKind {
    /// Whether text of this kind belongs to document A
    pub fn in_a(self) -> bool {
        matches!(self, ChangeKind::Kept | ChangeKind::Deleted)
    }

    /// Whether text of this kind belongs to document B
    pub fn in_b(self) -> bool {
        matches!(self, ChangeKind::Kept | ChangeKind::Inserted)
    }
}

/// One token with its classification, as produced by the backtracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub kind: ChangeKind,
    pub text: String,
}

impl ClassifiedToken {
    pub fn new(kind: ChangeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// A maximal run of same-kind tokens in the flat view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    pub text: String,
}

impl ChangeRecord {
    pub fn new(kind: ChangeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn kept(text: impl Into<String>) -> Self {
        Self::new(ChangeKind::Kept, text)
    }

    pub fn inserted(text: impl Into<String>) -> Self {
        Self::new(ChangeKind::Inserted, text)
    }

    pub fn deleted(text: impl Into<String>) -> Self {
        Self::new(ChangeKind::Deleted, text)
    }
}

/// Category of an aligned row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RowCategory {
    /// Both sides present and equal
    Match,
    /// Only the right (B) side present
    Insertion,
    /// Only the left (A) side present
    Deletion,
}

/// A two-column row: a fragment of A, a fragment of B, or both.
///
/// Only three shapes are legal: match (`Kept`/`Kept`), insertion
/// (`None`/`Inserted`) and deletion (`Deleted`/`None`). The constructors
/// are the only way to build one outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlignedRow {
    left: Option<ChangeRecord>,
    right: Option<ChangeRecord>,
}

impl AlignedRow {
    /// Row where both sides carry the same kept text.
    pub fn matched(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            left: Some(ChangeRecord::kept(text.clone())),
            right: Some(ChangeRecord::kept(text)),
        }
    }

    /// Row with a gap on the left.
    pub fn insertion(text: impl Into<String>) -> Self {
        Self {
            left: None,
            right: Some(ChangeRecord::inserted(text)),
        }
    }

    /// Row with a gap on the right.
    pub fn deletion(text: impl Into<String>) -> Self {
        Self {
            left: Some(ChangeRecord::deleted(text)),
            right: None,
        }
    }

    pub fn left(&self) -> Option<&ChangeRecord> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&ChangeRecord> {
        self.right.as_ref()
    }

    /// Left text, if the left side is present.
    pub fn left_text(&self) -> Option<&str> {
        self.left.as_ref().map(|r| r.text.as_str())
    }

    /// Right text, if the right side is present.
    pub fn right_text(&self) -> Option<&str> {
        self.right.as_ref().map(|r| r.text.as_str())
    }

    pub fn category(&self) -> RowCategory {
        match (&self.left, &self.right) {
            (Some(_), Some(_)) => RowCategory::Match,
            (None, _) => RowCategory::Insertion,
            (Some(_), None) => RowCategory::Deletion,
        }
    }

    /// Whether the row represents a change (insertion or deletion).
    pub fn is_change(&self) -> bool {
        self.category() != RowCategory::Match
    }

    /// Whether the row is one of the three legal shapes.
    ///
    /// Always true for rows built by the constructors; rows deserialized
    /// from untrusted JSON may not be.
    pub fn is_well_formed(&self) -> bool {
        match (&self.left, &self.right) {
            (Some(l), Some(r)) => {
                l.kind == ChangeKind::Kept && r.kind == ChangeKind::Kept && l.text == r.text
            }
            (None, Some(r)) => r.kind == ChangeKind::Inserted,
            (Some(l), None) => l.kind == ChangeKind::Deleted,
            (None, None) => false,
        }
    }

    /// Append `other`'s sides onto this row. Caller guarantees equal categories.
    pub(crate) fn absorb(&mut self, other: AlignedRow) {
        if let (Some(dst), Some(src)) = (self.left.as_mut(), other.left) {
            dst.text.push_str(&src.text);
        }
        if let (Some(dst), Some(src)) = (self.right.as_mut(), other.right) {
            dst.text.push_str(&src.text);
        }
    }
}

/// Both views of one comparison, derived from a single alignment pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comparison {
    pub records: Vec<ChangeRecord>,
    pub rows: Vec<AlignedRow>,
}

impl Comparison {
    /// True when the documents are identical (including both empty).
    pub fn is_identical(&self) -> bool {
        self.records.iter().all(|r| r.kind == ChangeKind::Kept)
    }
}
