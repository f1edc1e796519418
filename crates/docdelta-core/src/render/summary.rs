//! Markdown summary of a comparison.

use crate::diff::model::{Comparison, RowCategory};
use crate::diff::stats::{changed_rows, DiffStats};
use crate::explain::Annotated;

/// Longest fragment quoted in the changed-row list before truncation.
const MAX_FRAGMENT_CHARS: usize = 80;

/// Render a Markdown summary of a [`Comparison`].
///
/// Lists statistics and each changed row with its index. When `annotated`
/// is given, row insights are included; a degraded annotation is noted but
/// does not change the rest of the summary.
pub fn render_summary(comparison: &Comparison, annotated: Option<&Annotated>) -> String {
    let stats = DiffStats::from_records(&comparison.records);
    let mut out = String::new();

    out.push_str("## Document Diff\n\n");

    let result_label = if comparison.is_identical() {
        "Identical"
    } else {
        "Changed"
    };
    out.push_str(&format!(
        "**Result**: {result_label}  \n**Similarity**: {:.1}%\n\n",
        stats.similarity() * 100.0
    ));

    out.push_str("### Statistics\n\n");
    out.push_str("| | Runs | Characters |\n|---|---|---|\n");
    out.push_str(&format!(
        "| Kept | {} | {} |\n",
        stats.kept_runs, stats.kept_chars
    ));
    out.push_str(&format!(
        "| Deleted | {} | {} |\n",
        stats.deleted_runs, stats.deleted_chars
    ));
    out.push_str(&format!(
        "| Inserted | {} | {} |\n\n",
        stats.inserted_runs, stats.inserted_chars
    ));

    let changed = changed_rows(&comparison.rows);
    if changed.is_empty() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    out.push_str("### Changed Rows\n\n");
    if let Some(code) = annotated.and_then(|a| a.degraded.as_deref()) {
        out.push_str(&format!("_Explanations unavailable ({code})._\n\n"));
    }

    for (index, row) in changed {
        let (label, text) = match row.category() {
            RowCategory::Deletion => ("deleted", row.left_text()),
            RowCategory::Insertion => ("inserted", row.right_text()),
            RowCategory::Match => continue,
        };
        out.push_str(&format!(
            "- **Row {}** ({}): {:?}\n",
            index,
            label,
            truncate(text.unwrap_or_default())
        ));
        if let Some(insight) = annotated.and_then(|a| a.insight(index)) {
            out.push_str(&format!("  - _Insight_: {}\n", insight));
        }
    }

    out
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_FRAGMENT_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(MAX_FRAGMENT_CHARS).collect();
    short.push('…');
    short
}
