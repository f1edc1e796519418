//! Summary statistics and the changed-row filter.

use crate::diff::model::{AlignedRow, ChangeKind, ChangeRecord};
use serde::{Deserialize, Serialize};

/// Counts over a flat change list.
///
/// Character counts are Unicode scalar values, not bytes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiffStats {
    pub kept_runs: usize,
    pub inserted_runs: usize,
    pub deleted_runs: usize,
    pub kept_chars: usize,
    pub inserted_chars: usize,
    pub deleted_chars: usize,
}

impl DiffStats {
    pub fn from_records(records: &[ChangeRecord]) -> Self {
        let mut stats = DiffStats::default();
        for record in records {
            let chars = record.text.chars().count();
            match record.kind {
                ChangeKind::Kept => {
                    stats.kept_runs += 1;
                    stats.kept_chars += chars;
                }
                ChangeKind::Inserted => {
                    stats.inserted_runs += 1;
                    stats.inserted_chars += chars;
                }
                ChangeKind::Deleted => {
                    stats.deleted_runs += 1;
                    stats.deleted_chars += chars;
                }
            }
        }
        stats
    }

    /// Characters in document A
    pub fn chars_a(&self) -> usize {
        self.kept_chars + self.deleted_chars
    }

    /// Characters in document B
    pub fn chars_b(&self) -> usize {
        self.kept_chars + self.inserted_chars
    }

    /// `2 * kept / (|A| + |B|)` in characters; 1.0 when both are empty.
    pub fn similarity(&self) -> f64 {
        let total = self.chars_a() + self.chars_b();
        if total == 0 {
            return 1.0;
        }
        (2 * self.kept_chars) as f64 / total as f64
    }

    pub fn has_changes(&self) -> bool {
        self.inserted_runs > 0 || self.deleted_runs > 0
    }
}

/// Insertion and deletion rows paired with their index in `rows`.
///
/// This is the subset handed to an explanation provider; the indices stay
/// valid as keys into the full row list.
pub fn changed_rows(rows: &[AlignedRow]) -> Vec<(usize, &AlignedRow)> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.is_change())
        .collect()
}
