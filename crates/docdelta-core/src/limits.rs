//! Input-size policy.
//!
//! The alignment table costs O(n·m) memory and time. The engine accepts
//! any input; callers that take documents from users check them here
//! first.

use crate::errors::{DocDeltaError, Result};
use crate::log_op_error;
use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};

/// Default cell budget: 25M cells, roughly 100 MB of table.
pub const DEFAULT_MAX_CELLS: u64 = 25_000_000;

/// Upper bound on alignment table size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLimits {
    /// Maximum `(n+1) * (m+1)` cells; `None` disables the check
    pub max_cells: Option<u64>,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_cells: Some(DEFAULT_MAX_CELLS),
        }
    }
}

impl InputLimits {
    pub fn unlimited() -> Self {
        Self { max_cells: None }
    }

    pub fn with_max_cells(max_cells: u64) -> Self {
        Self {
            max_cells: Some(max_cells),
        }
    }

    /// Cells in the table for token counts `n` and `m`.
    pub fn table_cells(tokens_a: usize, tokens_b: usize) -> u64 {
        (tokens_a as u64 + 1).saturating_mul(tokens_b as u64 + 1)
    }

    /// Check token counts against the budget, returning the cell count.
    ///
    /// # Errors
    ///
    /// `InputTooLarge` when the table would exceed `max_cells`.
    pub fn check(&self, tokens_a: usize, tokens_b: usize) -> Result<u64> {
        let cells = Self::table_cells(tokens_a, tokens_b);
        match self.max_cells {
            Some(limit) if cells > limit => {
                let err = DocDeltaError::InputTooLarge { cells, limit };
                log_op_error!("check_limits", err.clone(), duration_ms = 0u64, cells = cells);
                Err(err)
            }
            _ => Ok(cells),
        }
    }

    /// Tokenize both texts and [`check`](Self::check) the counts.
    ///
    /// # Errors
    ///
    /// `InputTooLarge` when the table would exceed `max_cells`.
    pub fn check_texts(&self, text_a: &str, text_b: &str) -> Result<u64> {
        self.check(tokenize(text_a).len(), tokenize(text_b).len())
    }
}
