//! Inline word-diff rendering.

use crate::diff::model::{ChangeKind, ChangeRecord};

/// Render a flat change list as a single text with word-diff markers.
///
/// Kept text is emitted as-is, deleted text as `[-text-]`, inserted text as
/// `{+text+}`. Markers are not escaped; the output is for reading, not
/// parsing.
///
/// # Example
///
/// ```
/// use docdelta_core::diff::compute_diff;
/// use docdelta_core::render::render_inline;
///
/// let text = render_inline(&compute_diff("A B", "A C"));
/// assert_eq!(text, "A [-B-]{+C+}");
/// ```
pub fn render_inline(records: &[ChangeRecord]) -> String {
    let mut out = String::new();
    for record in records {
        match record.kind {
            ChangeKind::Kept => out.push_str(&record.text),
            ChangeKind::Deleted => {
                out.push_str("[-");
                out.push_str(&record.text);
                out.push_str("-]");
            }
            ChangeKind::Inserted => {
                out.push_str("{+");
                out.push_str(&record.text);
                out.push_str("+}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_text_is_unmarked() {
        assert_eq!(render_inline(&[ChangeRecord::kept("same text")]), "same text");
    }

    #[test]
    fn test_markers_preserve_whitespace() {
        let records = vec![
            ChangeRecord::kept("a"),
            ChangeRecord::inserted("\n"),
            ChangeRecord::deleted(" "),
            ChangeRecord::kept("b"),
        ];
        assert_eq!(render_inline(&records), "a{+\n+}[- -]b");
    }
}
