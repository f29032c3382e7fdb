// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # transferop
//!
//! Transfer-operator (Perron-Frobenius) invariant-measure estimation for time
//! series and state-space data from dynamical systems, built on rectangular
//! state-space partitions.
//!
//! ## Quick Start
//!
//! ```rust
//! use transferop::estimators::approaches::binning::PartitionSpec;
//! use transferop::estimators::approaches::transfer_operator::TransferOperator;
//! use transferop::estimators::traits::ProbabilitiesEstimator;
//! use ndarray::array;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // A short orbit alternating between the low and high half of [0, 1).
//! let points = array![[0.1], [0.9], [0.2], [0.8], [0.1], [0.7]];
//!
//! let estimator = TransferOperator::new(PartitionSpec::BinCount(2));
//! let mut rng = StdRng::seed_from_u64(42);
//! let (probs, outcomes) = estimator
//!     .probabilities_and_outcomes(&points, &mut rng)
//!     .unwrap();
//!
//! assert_eq!(outcomes.len(), 2);
//! assert!((probs.as_array().sum() - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Pipeline
//!
//! Estimation runs in four sequential stages:
//!
//! 1. **Encode**: discretize the ordered point cloud over a rectangular
//!    partition ([`PartitionSpec`](estimators::approaches::binning::PartitionSpec)),
//!    keeping the distinct visited bins in first-appearance order.
//! 2. **Count**: accumulate bin-to-bin transition counts from consecutive
//!    pairs into a sparse matrix, with an optional boundary condition for the
//!    final point.
//! 3. **Normalize**: turn counts into a right-stochastic transition matrix
//!    (each non-degenerate row sums to 1).
//! 4. **Solve**: power-iterate a random initial distribution through the
//!    matrix until it stabilizes, yielding the invariant measure over the
//!    visited bins.
//!
//! ## Estimators
//!
//! Both estimators implement
//! [`ProbabilitiesEstimator`](estimators::traits::ProbabilitiesEstimator) and
//! report outcomes as bin reference corners in data coordinates:
//!
//! - [`TransferOperator`](estimators::approaches::transfer_operator::TransferOperator):
//!   long-run occupation probabilities under the estimated transition
//!   dynamics.
//! - [`ValueBinning`](estimators::approaches::binning::ValueBinning): plain
//!   visitation frequencies over the same partition.
//!
//! ## Reproducibility
//!
//! Nothing in this crate touches a global random source. The solver's initial
//! guess and the `random` boundary condition both draw from a generator the
//! caller passes in, so results are reproducible from the seed.

pub mod estimators;
