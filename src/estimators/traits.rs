// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::estimators::error::EstimatorError;
use crate::estimators::probabilities::Probabilities;

/// Capability interface for estimators that map an ordered point cloud to a
/// probability distribution over discrete outcomes.
///
/// Rows of `data` are time-ordered samples, columns are state-space
/// dimensions. Outcomes are the reference corners of the visited bins in
/// data coordinates, listed in first-visitation order and aligned with the
/// probability vector. The generator is used only by estimators with a
/// stochastic component (e.g. a randomly initialised solver); deterministic
/// estimators accept and ignore it.
pub trait ProbabilitiesEstimator {
    /// Compute the probability distribution together with the outcome each
    /// entry refers to.
    fn probabilities_and_outcomes<R: Rng>(
        &self,
        data: &Array2<f64>,
        rng: &mut R,
    ) -> Result<(Probabilities, Vec<Array1<f64>>), EstimatorError>;

    /// Compute the probability distribution alone.
    fn probabilities<R: Rng>(
        &self,
        data: &Array2<f64>,
        rng: &mut R,
    ) -> Result<Probabilities, EstimatorError> {
        self.probabilities_and_outcomes(data, rng).map(|(p, _)| p)
    }
}
