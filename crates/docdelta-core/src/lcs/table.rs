//! Dynamic-programming LCS length table.

/// `(n+1) x (m+1)` table where `get(i, j)` is the LCS length of `a[..i]`
/// and `b[..j]`, with exact string equality as the match predicate.
///
/// Stored row-major in one allocation. Time and space are O(n·m); callers
/// bound input size (see [`crate::limits`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    cells: Vec<u32>,
    cols: usize,
}

impl LcsTable {
    /// Fill the table for `a` (rows) against `b` (columns).
    pub fn build(a: &[&str], b: &[&str]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0u32; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                let value = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
                cells[i * cols + j] = value;
            }
        }

        Self { cells, cols }
    }

    /// LCS length of `a[..i]` and `b[..j]`.
    ///
    /// # Panics
    ///
    /// Panics if `i > n` or `j > m`.
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!(j < self.cols, "column {} out of range", j);
        self.cells[i * self.cols + j]
    }

    /// Number of rows, `n + 1`.
    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    /// Number of columns, `m + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// LCS length of the full sequences.
    pub fn lcs_len(&self) -> u32 {
        self.cells[self.cells.len() - 1]
    }
}
