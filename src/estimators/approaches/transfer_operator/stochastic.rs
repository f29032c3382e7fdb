use log::warn;

use crate::estimators::approaches::transfer_operator::sparse::{CsrMatrix, SparseMatrixBuilder};

/// A right-stochastic transition matrix over the visited bins.
///
/// Every row with at least one recorded transition sums to 1. Rows listed in
/// [`RowStochastic::degenerate_rows`] had no outgoing transitions at all and
/// are left all-zero, so the matrix is not fully stochastic in that case and
/// iteration through it does not conserve probability mass exactly.
#[derive(Debug, Clone)]
pub struct RowStochastic {
    matrix: CsrMatrix,
    degenerate_rows: Vec<usize>,
}

impl RowStochastic {
    /// The normalized transition matrix.
    pub fn matrix(&self) -> &CsrMatrix {
        &self.matrix
    }

    /// Rows that had no outgoing transitions, in ascending order.
    pub fn degenerate_rows(&self) -> &[usize] {
        &self.degenerate_rows
    }

    /// Whether every row sums to 1.
    pub fn is_fully_stochastic(&self) -> bool {
        self.degenerate_rows.is_empty()
    }
}

/// Normalize each row of a sparse count matrix to sum to 1.
///
/// Produces a fresh matrix, leaving the counts untouched. All-zero rows are
/// kept all-zero and reported once via the warning channel; this is
/// expected for a bin visited only as the terminal point under the `none`
/// boundary condition.
pub fn normalize_rows(counts: &CsrMatrix) -> RowStochastic {
    let mut builder = SparseMatrixBuilder::new(counts.n_rows(), counts.n_cols());
    let mut degenerate_rows = Vec::new();
    for i in 0..counts.n_rows() {
        let sum = counts.row_sum(i);
        if sum > 0.0 {
            for (j, v) in counts.row(i) {
                builder.add(i, j, v / sum);
            }
        } else {
            degenerate_rows.push(i);
        }
    }
    if !degenerate_rows.is_empty() {
        warn!(
            "{} of {} transition rows have no outgoing transitions and stay all-zero",
            degenerate_rows.len(),
            counts.n_rows()
        );
    }
    RowStochastic {
        matrix: builder.build(),
        degenerate_rows,
    }
}
