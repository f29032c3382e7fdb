// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Transfer-operator module: sparse transition counting over a bin catalog,
// row-stochastic normalization, and the power-iteration solver for the
// invariant measure.

pub mod counting;
pub mod estimator;
pub mod solver;
pub mod sparse;
pub mod stochastic;

pub use counting::{Boundary, count_transitions};
pub use estimator::{InvariantMeasure, TransferOperator, TransferOperatorApproximation};
pub use solver::{PowerIterationConfig, StationaryOutcome, stationary_distribution};
pub use sparse::{CsrMatrix, SparseMatrixBuilder};
pub use stochastic::{RowStochastic, normalize_rows};
