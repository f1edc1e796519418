//! Walk an [`LcsTable`] into a classified token list.

use super::table::LcsTable;
use crate::diff::model::{ChangeKind, ClassifiedToken};

/// Classify every token of `a` and `b` by walking `table` from `(n, m)`
/// back to `(0, 0)`, one token per step.
///
/// Equal tokens are `Kept`. Otherwise `b[j-1]` is `Inserted` when
/// `j > 0` and (`i == 0` or `dp[i][j-1] >= dp[i-1][j]`), else `a[i-1]` is
/// `Deleted`. Insertion wins ties. Because the walk runs backwards, an
/// insertion chosen at a tie ends up *after* the deletions next to it in
/// document order.
///
/// `table` must have been built from the same `a` and `b`.
pub fn backtrack(a: &[&str], b: &[&str], table: &LcsTable) -> Vec<ClassifiedToken> {
    let mut i = a.len();
    let mut j = b.len();
    let mut out = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            out.push(ClassifiedToken::new(ChangeKind::Kept, a[i - 1]));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            out.push(ClassifiedToken::new(ChangeKind::Inserted, b[j - 1]));
            j -= 1;
        } else {
            // i > 0 here: either j == 0, or dp[i-1][j] > dp[i][j-1]
            out.push(ClassifiedToken::new(ChangeKind::Deleted, a[i - 1]));
            i -= 1;
        }
    }

    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(a: &[&str], b: &[&str]) -> Vec<(ChangeKind, String)> {
        let table = LcsTable::build(a, b);
        backtrack(a, b, &table)
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_tie_breaks_toward_insertion() {
        let got = run(&["A", " ", "B"], &["A", " ", "C"]);
        assert_eq!(
            got,
            vec![
                (ChangeKind::Kept, "A".to_string()),
                (ChangeKind::Kept, " ".to_string()),
                (ChangeKind::Deleted, "B".to_string()),
                (ChangeKind::Inserted, "C".to_string()),
            ]
        );
    }

    #[test]
    fn test_only_insertions_when_a_is_empty() {
        let got = run(&[], &["x", " ", "y"]);
        assert!(got.iter().all(|(k, _)| *k == ChangeKind::Inserted));
        assert_eq!(got.len(), 3);
    }

    #[test]
    fn test_only_deletions_when_b_is_empty() {
        let got = run(&["x", " ", "y"], &[]);
        assert!(got.iter().all(|(k, _)| *k == ChangeKind::Deleted));
        assert_eq!(got.len(), 3);
    }

    #[test]
    fn test_strict_preference_produces_deletion_first_in_walk() {
        // dp[i-1][j] > dp[i][j-1] at (2,2): "q" must be deleted, not "p" inserted
        let got = run(&["x", "q"], &["p", "x"]);
        assert_eq!(
            got,
            vec![
                (ChangeKind::Inserted, "p".to_string()),
                (ChangeKind::Kept, "x".to_string()),
                (ChangeKind::Deleted, "q".to_string()),
            ]
        );
    }

    #[test]
    fn test_every_token_classified_exactly_once() {
        let a = ["the", " ", "quick", " ", "fox"];
        let b = ["a", " ", "quick", " ", "brown", " ", "fox"];
        let got = run(&a, &b);
        let from_a = got.iter().filter(|(k, _)| *k != ChangeKind::Inserted).count();
        let from_b = got.iter().filter(|(k, _)| *k != ChangeKind::Deleted).count();
        assert_eq!(from_a, a.len());
        assert_eq!(from_b, b.len());
    }
}
