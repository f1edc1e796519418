//! Longest-common-subsequence alignment over token sequences.
//!
//! [`LcsTable`] holds the dynamic-programming length table and
//! [`backtrack`] walks it into a classified token list. [`classify`] runs
//! both; it is the single alignment pass both diff views are projected
//! from.

pub mod backtrack;
pub mod table;

pub use backtrack::backtrack;
pub use table::LcsTable;

use crate::diff::model::ClassifiedToken;

/// Align two token sequences and classify every token, in document order.
pub fn classify(a: &[&str], b: &[&str]) -> Vec<ClassifiedToken> {
    let table = LcsTable::build(a, b);
    backtrack(a, b, &table)
}
