//! docdelta core - whitespace-faithful token diff engine
//!
//! This crate compares two text documents and reports their differences:
//! - Tokenization into whitespace and non-whitespace runs
//! - LCS alignment with a fixed, reproducible tie-break
//! - A flat change list and a two-column aligned-row view from one pass
//! - Statistics, invariant checks and plain-text renderings
//! - The boundary for an external explanation provider
//! - Input-size policy and cache keys for callers
//!
//! The diff operations are pure and infallible. Errors only arise at the
//! boundaries (limits, verification, explanation provider).

pub mod diff;
pub mod errors;
pub mod explain;
pub mod fingerprint;
pub mod lcs;
pub mod limits;
pub mod logging_facility;
pub mod render;
pub mod tokenizer;

pub use docdelta_core_types::schema;

// Re-export commonly used types
pub use diff::{
    compare, compute_aligned_diff, compute_diff, AlignedRow, ChangeKind, ChangeRecord, Comparison,
    DiffStats, RowCategory,
};
pub use errors::{DocDeltaError, ExError, ExErrorKind, Result};
pub use explain::{annotate, Annotated, AnnotatedRow, Explainer, NoopExplainer};
pub use limits::InputLimits;
