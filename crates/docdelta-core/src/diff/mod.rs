//! Token-level text diff.
//!
//! Computes a whitespace-faithful LCS alignment between two documents and
//! exposes it as a flat change list or as two-column aligned rows.
//!
//! ## Entry points
//!
//! ```
//! use docdelta_core::diff::{compute_diff, compute_aligned_diff, ChangeRecord};
//!
//! let records = compute_diff("A B", "A C");
//! assert_eq!(records[0], ChangeRecord::kept("A "));
//!
//! let rows = compute_aligned_diff("A B", "A C");
//! assert_eq!(rows.len(), 3);
//! ```
//!
//! ## Guarantees
//!
//! - **Reconstruction**: kept + deleted text rebuilds A; kept + inserted rebuilds B.
//! - **Maximal compaction**: no two adjacent records/rows share a kind/category.
//! - **Determinism**: identical inputs produce identical outputs.
//! - **Totality**: every pair of strings has a result; there is no error path.

pub mod compact;
pub mod engine;
pub mod model;
pub mod rows;
pub mod stats;
pub mod verify;

pub use engine::{compare, compute_aligned_diff, compute_diff};
pub use model::{AlignedRow, ChangeKind, ChangeRecord, ClassifiedToken, Comparison, RowCategory};
pub use stats::{changed_rows, DiffStats};
