//! All-pairs cosine similarity over the vector index

use std::time::Instant;

use tracing::debug;

use crate::trace_time;
use crate::vectorize::{SparseVector, VectorIndex};

/// Cosine similarity of two count vectors; 0.0 when either has zero norm
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    cosine_with_norms(a, b, a.norm(), b.norm())
}

/// Cosine similarity from precomputed L2 norms of `a` and `b`
fn cosine_with_norms(a: &SparseVector, b: &SparseVector, norm_a: f64, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (a.dot(b) / (norm_a * norm_b)).min(1.0)
}

/// Square, symmetric similarity matrix.
///
/// Only the upper triangle (diagonal included) is stored, row-major, so
/// `get(i, j) == get(j, i)` holds exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    upper: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute cosine similarity between every pair of rows.
    ///
    /// The diagonal is exactly 1.0 for nonzero rows and 0.0 for zero rows.
    pub fn compute(index: &VectorIndex) -> Self {
        let start = Instant::now();
        let rows = index.rows();
        let n = rows.len();
        let norms: Vec<f64> = rows.iter().map(SparseVector::norm).collect();

        let mut upper = Vec::with_capacity(n * (n + 1) / 2);
        for i in 0..n {
            upper.push(if norms[i] > 0.0 { 1.0 } else { 0.0 });
            for j in (i + 1)..n {
                upper.push(cosine_with_norms(&rows[i], &rows[j], norms[i], norms[j]));
            }
        }

        debug!(rows = n, cells = upper.len(), "similarity_matrix");
        trace_time!(start, "similarity_matrix");
        SimilarityMatrix { n, upper }
    }

    /// Number of rows (and columns)
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// `S[i][j]`, or `None` when either index is out of range
    pub fn try_get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.n || j >= self.n {
            return None;
        }
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        self.upper.get(self.row_offset(lo) + (hi - lo)).copied()
    }

    /// `S[i][j]`. Panics when either index is out of range; see
    /// [`SimilarityMatrix::try_get`].
    pub fn get(&self, i: usize, j: usize) -> f64 {
        match self.try_get(i, j) {
            Some(score) => score,
            None => panic!(
                "similarity index ({i}, {j}) out of range for {} rows",
                self.n
            ),
        }
    }

    /// Row `i` in column order, or `None` when `i` is out of range
    pub fn try_row(&self, i: usize) -> Option<impl Iterator<Item = f64> + '_> {
        (i < self.n).then(|| self.row(i))
    }

    /// Row `i` in column order
    pub fn row(&self, i: usize) -> impl Iterator<Item = f64> + '_ {
        (0..self.n).map(move |j| self.get(i, j))
    }

    fn row_offset(&self, i: usize) -> usize {
        i * (2 * self.n - i + 1) / 2
    }
}

#[cfg(test)]
mod tests;
