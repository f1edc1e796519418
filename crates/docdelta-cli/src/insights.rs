//! File-backed explanation provider
//!
//! Reads pre-computed insights from a JSON object keyed by row index,
//! e.g. `{"1": "Payment term shortened"}`. Useful for replaying the output
//! of an external service without calling it.

use docdelta_core::{AlignedRow, ExError, ExErrorKind, Explainer};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileExplainer {
    path: PathBuf,
}

impl FileExplainer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn failure(&self, message: String) -> ExError {
        ExError::new(ExErrorKind::ExternalService)
            .with_op("explain")
            .with_path(self.path.display().to_string())
            .with_message(message)
    }
}

impl Explainer for FileExplainer {
    fn explain(&self, changed: &[(usize, &AlignedRow)]) -> Result<BTreeMap<usize, String>, ExError> {
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| self.failure(format!("cannot read insights: {}", e)))?;
        let mut insights: BTreeMap<usize, String> = serde_json::from_str(&contents)
            .map_err(|e| self.failure(format!("malformed insights: {}", e)))?;

        insights.retain(|index, _| changed.iter().any(|(i, _)| i == index));
        Ok(insights)
    }
}
