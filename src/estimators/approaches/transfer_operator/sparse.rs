// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

/// Accumulates `(row, col, weight)` triples for a sparse matrix.
///
/// Weights added to the same coordinate are summed, so repeated
/// `add(i, j, 1.0)` calls count occurrences. [`SparseMatrixBuilder::build`]
/// finalizes the accumulated triples into an immutable [`CsrMatrix`]; the
/// builder cannot be reused afterwards, which keeps construction and reads
/// on separate types.
#[derive(Debug, Clone)]
pub struct SparseMatrixBuilder {
    n_rows: usize,
    n_cols: usize,
    weights: HashMap<(usize, usize), f64>,
}

impl SparseMatrixBuilder {
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            weights: HashMap::new(),
        }
    }

    /// Add `weight` at `(row, col)`, summing with any existing weight there.
    pub fn add(&mut self, row: usize, col: usize, weight: f64) {
        debug_assert!(row < self.n_rows && col < self.n_cols);
        *self.weights.entry((row, col)).or_insert(0.0) += weight;
    }

    /// Finalize into compressed sparse row form.
    pub fn build(self) -> CsrMatrix {
        let mut triples: Vec<((usize, usize), f64)> = self.weights.into_iter().collect();
        triples.sort_unstable_by_key(|&(coord, _)| coord);

        let mut row_ptr = vec![0usize; self.n_rows + 1];
        let mut col_idx = Vec::with_capacity(triples.len());
        let mut values = Vec::with_capacity(triples.len());
        for ((row, col), weight) in triples {
            row_ptr[row + 1] += 1;
            col_idx.push(col);
            values.push(weight);
        }
        for i in 0..self.n_rows {
            row_ptr[i + 1] += row_ptr[i];
        }
        CsrMatrix {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }
}

/// An immutable sparse matrix in compressed sparse row form.
///
/// Entries within a row are sorted by column. All operations touch only the
/// stored entries.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    n_rows: usize,
    n_cols: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<f64>,
}

impl CsrMatrix {
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Iterate over the stored `(col, value)` pairs of row `i`.
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let lo = self.row_ptr[i];
        let hi = self.row_ptr[i + 1];
        self.col_idx[lo..hi]
            .iter()
            .copied()
            .zip(self.values[lo..hi].iter().copied())
    }

    /// Sum of the stored entries of row `i`.
    pub fn row_sum(&self, i: usize) -> f64 {
        let lo = self.row_ptr[i];
        let hi = self.row_ptr[i + 1];
        self.values[lo..hi].iter().sum()
    }

    /// Sum of all stored entries.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// The entry at `(row, col)`, zero if not stored.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let lo = self.row_ptr[row];
        let hi = self.row_ptr[row + 1];
        match self.col_idx[lo..hi].binary_search(&col) {
            Ok(offset) => self.values[lo + offset],
            Err(_) => 0.0,
        }
    }

    /// A copy with every stored entry multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> CsrMatrix {
        let mut scaled = self.clone();
        for v in scaled.values.iter_mut() {
            *v *= factor;
        }
        scaled
    }

    /// Left-multiply a row vector: `out = rho · self`.
    ///
    /// `out` is a caller-owned scratch buffer; its prior contents are
    /// overwritten and its length must equal the number of columns, while
    /// `rho` must match the number of rows.
    pub fn left_mul(&self, rho: &[f64], out: &mut [f64]) {
        assert_eq!(rho.len(), self.n_rows, "rho length must match rows");
        assert_eq!(out.len(), self.n_cols, "out length must match columns");
        out.fill(0.0);
        for (i, &mass) in rho.iter().enumerate() {
            if mass == 0.0 {
                continue;
            }
            for (j, v) in self.row(i) {
                out[j] += mass * v;
            }
        }
    }
}
