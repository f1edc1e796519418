//! Run compaction for the flat view.

use crate::diff::model::{ChangeRecord, ClassifiedToken};

/// Merge consecutive same-kind tokens into one [`ChangeRecord`] each.
pub fn compact_runs(tokens: &[ClassifiedToken]) -> Vec<ChangeRecord> {
    let mut records: Vec<ChangeRecord> = Vec::new();
    for token in tokens {
        match records.last_mut() {
            Some(last) if last.kind == token.kind => last.text.push_str(&token.text),
            _ => records.push(ChangeRecord::new(token.kind, token.text.as_str())),
        }
    }
    records
}

/// Merge adjacent same-kind records.
///
/// Idempotent: output of [`compact_runs`] passes through unchanged.
pub fn merge_records(records: Vec<ChangeRecord>) -> Vec<ChangeRecord> {
    let mut merged: Vec<ChangeRecord> = Vec::with_capacity(records.len());
    for record in records {
        match merged.last_mut() {
            Some(last) if last.kind == record.kind => last.text.push_str(&record.text),
            _ => merged.push(record),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::ChangeKind;

    #[test]
    fn test_merges_runs() {
        let tokens = vec![
            ClassifiedToken::new(ChangeKind::Kept, "A"),
            ClassifiedToken::new(ChangeKind::Kept, " "),
            ClassifiedToken::new(ChangeKind::Deleted, "B"),
            ClassifiedToken::new(ChangeKind::Inserted, "C"),
            ClassifiedToken::new(ChangeKind::Inserted, " "),
        ];
        assert_eq!(
            compact_runs(&tokens),
            vec![
                ChangeRecord::kept("A "),
                ChangeRecord::deleted("B"),
                ChangeRecord::inserted("C "),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(compact_runs(&[]).is_empty());
        assert!(merge_records(Vec::new()).is_empty());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let once = merge_records(vec![
            ChangeRecord::kept("a"),
            ChangeRecord::kept("b"),
            ChangeRecord::inserted("c"),
            ChangeRecord::deleted("d"),
            ChangeRecord::deleted("e"),
        ]);
        assert_eq!(
            once,
            vec![
                ChangeRecord::kept("ab"),
                ChangeRecord::inserted("c"),
                ChangeRecord::deleted("de"),
            ]
        );
        assert_eq!(merge_records(once.clone()), once);
    }
}
