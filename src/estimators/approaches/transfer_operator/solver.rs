use log::warn;
use ndarray::Array1;
use rand::Rng;

use crate::estimators::approaches::transfer_operator::sparse::CsrMatrix;
use crate::estimators::error::EstimatorError;

/// Settings for the power-iteration solver.
///
/// `tolerance` is the relative Euclidean distance between successive
/// iterates below which the iteration stops. `drift_tolerance` bounds the
/// acceptable deviation of the iterate's sum from 1 and also sets the
/// checkpoint cadence at which that sum is inspected, every
/// `⌊1 / drift_tolerance⌋` iterations.
///
/// # Example
///
/// ```
/// use transferop::estimators::approaches::transfer_operator::PowerIterationConfig;
///
/// let config = PowerIterationConfig::new()
///     .with_tolerance(1e-10)
///     .with_max_iterations(500);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerIterationConfig {
    tolerance: f64,
    max_iterations: usize,
    drift_tolerance: f64,
}

impl Default for PowerIterationConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iterations: 200,
            drift_tolerance: 1e-2,
        }
    }
}

impl PowerIterationConfig {
    /// Creates the default configuration.
    ///
    /// Defaults: `tolerance = 1e-8`, `max_iterations = 200`,
    /// `drift_tolerance = 1e-2`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the convergence tolerance on the relative change per iteration.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the sum-drift tolerance (and thereby the checkpoint cadence).
    pub fn with_drift_tolerance(mut self, drift_tolerance: f64) -> Self {
        self.drift_tolerance = drift_tolerance;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn drift_tolerance(&self) -> f64 {
        self.drift_tolerance
    }

    /// Checks that all settings are usable.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(EstimatorError::InvalidSolverConfig {
                reason: format!("tolerance must be finite and positive, got {}", self.tolerance),
            });
        }
        if self.max_iterations == 0 {
            return Err(EstimatorError::InvalidSolverConfig {
                reason: "max_iterations must be at least 1".to_string(),
            });
        }
        if !self.drift_tolerance.is_finite()
            || self.drift_tolerance <= 0.0
            || self.drift_tolerance > 1.0
        {
            return Err(EstimatorError::InvalidSolverConfig {
                reason: format!(
                    "drift_tolerance must be in (0, 1], got {}",
                    self.drift_tolerance
                ),
            });
        }
        Ok(())
    }
}

/// Result of the power iteration.
#[derive(Debug, Clone)]
pub struct StationaryOutcome {
    /// The estimated stationary distribution, renormalized to sum to 1.
    pub distribution: Array1<f64>,
    /// Whether the tolerance was met within the iteration budget. When
    /// false, the distribution is the best-effort final iterate, usually
    /// still a usable approximation.
    pub converged: bool,
    /// Number of iterations performed.
    pub iterations: usize,
}

/// Estimate the stationary distribution of a row-stochastic matrix by
/// damped power iteration.
///
/// The initial distribution is drawn uniformly from `[0, 1)` per entry via
/// the injected generator and normalized to sum to 1. Each step propagates
/// the iterate through the matrix and averages with the previous iterate,
/// `ρ ← (ρ·P + ρ) / 2`; the averaged update has exactly the fixed points of
/// `ρ·P = ρ` and also settles for matrices with periodic structure, where
/// the plain update would oscillate between phases forever. Convergence is
/// reached when the relative Euclidean distance between successive iterates
/// falls below the tolerance; exhausting the budget is reported via the
/// warning channel and [`StationaryOutcome::converged`], not an error.
///
/// # Errors
///
/// [`EstimatorError::EmptyData`] for a 0×0 matrix and
/// [`EstimatorError::InvalidSolverConfig`] for unusable settings.
pub fn stationary_distribution<R: Rng>(
    transitions: &CsrMatrix,
    config: &PowerIterationConfig,
    rng: &mut R,
) -> Result<StationaryOutcome, EstimatorError> {
    config.validate()?;
    debug_assert_eq!(transitions.n_rows(), transitions.n_cols());
    let n = transitions.n_rows();
    if n == 0 {
        return Err(EstimatorError::EmptyData);
    }

    let mut rho: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..1.0)).collect();
    let sum: f64 = rho.iter().sum();
    if sum > 0.0 {
        for p in rho.iter_mut() {
            *p /= sum;
        }
    } else {
        rho.fill(1.0 / n as f64);
    }

    let checkpoint = (1.0 / config.drift_tolerance).floor() as usize;
    let mut next = vec![0.0_f64; n];
    let mut iterations = 0usize;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;
        transitions.left_mul(&rho, &mut next);
        for (n_i, &r_i) in next.iter_mut().zip(rho.iter()) {
            *n_i = 0.5 * (*n_i + r_i);
        }

        if checkpoint > 0 && iterations % checkpoint == 0 {
            let s: f64 = next.iter().sum();
            if s > 0.0 && (s - 1.0).abs() > config.drift_tolerance {
                for p in next.iter_mut() {
                    *p /= s;
                }
            }
        }

        let mut diff_sq = 0.0_f64;
        let mut base_sq = 0.0_f64;
        for (&a, &b) in next.iter().zip(rho.iter()) {
            let d = a - b;
            diff_sq += d * d;
            base_sq += b * b;
        }
        let distance = if base_sq > 0.0 {
            (diff_sq / base_sq).sqrt()
        } else {
            diff_sq.sqrt()
        };

        std::mem::swap(&mut rho, &mut next);
        if distance < config.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            "power iteration stopped after {} iterations without reaching tolerance {}",
            iterations, config.tolerance
        );
    }

    let sum: f64 = rho.iter().sum();
    if sum > 0.0 {
        for p in rho.iter_mut() {
            *p /= sum;
        }
    }

    Ok(StationaryOutcome {
        distribution: Array1::from(rho),
        converged,
        iterations,
    })
}
