//! Explanation provider boundary.
//!
//! An explanation provider (typically a remote language-model service)
//! receives the changed rows of a comparison and returns a short insight
//! per row index. The engine never calls one. [`annotate`] is the glue a
//! caller uses, and it guarantees the diff stays usable when the provider
//! is missing or fails: rows come back without insights instead of an
//! error.

use crate::diff::model::AlignedRow;
use crate::diff::stats::changed_rows;
use crate::errors::{ExError, ExErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Produce one insight per changed row, keyed by row index.
pub trait Explainer: Send + Sync {
    /// Explain the given `(index, row)` pairs.
    ///
    /// # Errors
    ///
    /// `ExplanationUnavailable` when no provider is configured,
    /// `ExternalService` when the provider call fails.
    fn explain(&self, changed: &[(usize, &AlignedRow)]) -> Result<BTreeMap<usize, String>, ExError>;
}

/// Explainer used when none is configured: always unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExplainer;

impl Explainer for NoopExplainer {
    fn explain(&self, _: &[(usize, &AlignedRow)]) -> Result<BTreeMap<usize, String>, ExError> {
        Err(ExError::new(ExErrorKind::ExplanationUnavailable)
            .with_op("explain")
            .with_message("No explanation provider configured"))
    }
}

/// A row together with its index and optional insight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotatedRow {
    pub index: usize,
    pub row: AlignedRow,
    pub insight: Option<String>,
}

/// Result of [`annotate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Annotated {
    pub rows: Vec<AnnotatedRow>,
    /// Error code of the provider failure, if annotation degraded
    pub degraded: Option<String>,
}

impl Annotated {
    pub fn insight(&self, index: usize) -> Option<&str> {
        self.rows.get(index).and_then(|r| r.insight.as_deref())
    }

    pub fn insight_count(&self) -> usize {
        self.rows.iter().filter(|r| r.insight.is_some()).count()
    }
}

/// Attach insights from `explainer` to `rows`.
///
/// Only changed rows are sent. Insights returned for indices that are not
/// changed rows are dropped. On provider error every row is returned with
/// `insight: None` and `degraded` set to the error code. With no changed
/// rows the provider is not called.
pub fn annotate(rows: &[AlignedRow], explainer: &dyn Explainer) -> Annotated {
    let changed = changed_rows(rows);

    let (mut insights, degraded) = if changed.is_empty() {
        (BTreeMap::new(), None)
    } else {
        match explainer.explain(&changed) {
            Ok(insights) => (insights, None),
            Err(err) => {
                tracing::warn!(
                    op = "annotate",
                    err.code = err.code(),
                    changed_rows = changed.len(),
                    "explanation provider failed; returning rows without insights"
                );
                (BTreeMap::new(), Some(err.code().to_string()))
            }
        }
    };

    let annotated = rows
        .iter()
        .enumerate()
        .map(|(index, row)| AnnotatedRow {
            index,
            row: row.clone(),
            insight: if row.is_change() {
                insights.remove(&index)
            } else {
                None
            },
        })
        .collect();

    Annotated {
        rows: annotated,
        degraded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_explainer_is_unavailable() {
        let err = NoopExplainer.explain(&[]).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::ExplanationUnavailable);
    }

    #[test]
    fn test_annotate_with_noop_degrades() {
        let rows = vec![AlignedRow::matched("A "), AlignedRow::deletion("B")];
        let annotated = annotate(&rows, &NoopExplainer);
        assert_eq!(annotated.rows.len(), 2);
        assert_eq!(annotated.insight_count(), 0);
        assert_eq!(
            annotated.degraded.as_deref(),
            Some("ERR_EXPLANATION_UNAVAILABLE")
        );
    }

    #[test]
    fn test_annotate_without_changes_skips_provider() {
        let rows = vec![AlignedRow::matched("same")];
        let annotated = annotate(&rows, &NoopExplainer);
        assert!(annotated.degraded.is_none());
    }
}
