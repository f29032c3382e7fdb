use ndarray::Array1;

use crate::estimators::error::EstimatorError;

/// Sum tolerance accepted by [`Probabilities::new`].
const SUM_TOLERANCE: f64 = 1e-6;

/// A probability distribution over discrete outcomes.
///
/// The wrapped vector is guaranteed nonnegative, finite, and summing to 1
/// (within a small tolerance at construction). Use [`Probabilities::new`]
/// for vectors that should already be normalised and
/// [`Probabilities::from_weights`] to normalise raw counts or weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Probabilities {
    p: Array1<f64>,
}

impl Probabilities {
    /// Wrap an already-normalised probability vector.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::InvalidDistribution`] if any entry is
    /// negative or non-finite, or the sum deviates from 1 by more than the
    /// tolerance.
    pub fn new(p: Array1<f64>) -> Result<Self, EstimatorError> {
        for (i, &v) in p.iter().enumerate() {
            if !v.is_finite() {
                return Err(EstimatorError::InvalidDistribution {
                    reason: format!("entry {i} is not finite: {v}"),
                });
            }
            if v < 0.0 {
                return Err(EstimatorError::InvalidDistribution {
                    reason: format!("entry {i} is negative: {v}"),
                });
            }
        }
        let sum = p.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(EstimatorError::InvalidDistribution {
                reason: format!("sum is {sum}, expected ~1.0"),
            });
        }
        Ok(Self { p })
    }

    /// Normalise a nonnegative weight vector into a distribution.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::InvalidDistribution`] if any weight is
    /// negative or non-finite, or all weights are zero.
    pub fn from_weights(mut w: Array1<f64>) -> Result<Self, EstimatorError> {
        for (i, &v) in w.iter().enumerate() {
            if !v.is_finite() {
                return Err(EstimatorError::InvalidDistribution {
                    reason: format!("weight {i} is not finite: {v}"),
                });
            }
            if v < 0.0 {
                return Err(EstimatorError::InvalidDistribution {
                    reason: format!("weight {i} is negative: {v}"),
                });
            }
        }
        let sum = w.sum();
        if sum <= 0.0 {
            return Err(EstimatorError::InvalidDistribution {
                reason: "weights sum to zero".to_string(),
            });
        }
        w.mapv_inplace(|v| v / sum);
        Ok(Self { p: w })
    }

    /// Borrow the underlying probability vector.
    pub fn as_array(&self) -> &Array1<f64> {
        &self.p
    }

    /// Consume the wrapper, returning the probability vector.
    pub fn into_array(self) -> Array1<f64> {
        self.p
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.p.len()
    }

    /// Whether the distribution has no outcomes.
    pub fn is_empty(&self) -> bool {
        self.p.is_empty()
    }

    /// Iterate over the probabilities.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.p.iter().copied()
    }
}

impl std::ops::Index<usize> for Probabilities {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.p[i]
    }
}
