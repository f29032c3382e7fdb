use log::warn;
use ndarray::{Array1, Array2};
use rand::Rng;

use crate::estimators::approaches::binning::encoder::ResolvedPartition;
use crate::estimators::approaches::binning::partition::PartitionSpec;
use crate::estimators::approaches::binning::sequence::{BinCatalog, encode_sequence};
use crate::estimators::approaches::transfer_operator::counting::{Boundary, count_transitions};
use crate::estimators::approaches::transfer_operator::solver::{
    PowerIterationConfig, stationary_distribution,
};
use crate::estimators::approaches::transfer_operator::sparse::CsrMatrix;
use crate::estimators::approaches::transfer_operator::stochastic::{
    RowStochastic, normalize_rows,
};
use crate::estimators::error::EstimatorError;
use crate::estimators::probabilities::Probabilities;
use crate::estimators::traits::ProbabilitiesEstimator;

/// Transfer-operator (Perron-Frobenius) estimator of the invariant measure
/// over a rectangular partition.
///
/// Given a time-ordered point cloud, the estimator discretizes state space,
/// builds a sparse Markov transition matrix from consecutive bin visits, and
/// power-iterates it to the stationary distribution: the long-run occupation
/// probability of each visited bin. Because the transition semantics depend
/// on the sequence order, the input must not be re-sorted by the caller.
///
/// The two-stage API separates the deterministic part from the solve:
/// [`TransferOperator::approximate`] produces the transition structure once,
/// and [`TransferOperatorApproximation::invariant_measure`] can then be run
/// (repeatedly, with different generators) on top of it.
pub struct TransferOperator {
    partition: PartitionSpec,
    boundary: Boundary,
    solver: PowerIterationConfig,
}

impl TransferOperator {
    /// Creates an estimator over `partition` with boundary `none` and
    /// default solver settings.
    pub fn new(partition: PartitionSpec) -> Self {
        Self {
            partition,
            boundary: Boundary::default(),
            solver: PowerIterationConfig::default(),
        }
    }

    /// Sets the boundary condition for the final point.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the power-iteration solver configuration.
    pub fn with_solver(mut self, solver: PowerIterationConfig) -> Self {
        self.solver = solver;
        self
    }

    pub fn partition(&self) -> &PartitionSpec {
        &self.partition
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn solver(&self) -> &PowerIterationConfig {
        &self.solver
    }

    /// Estimate the transfer operator: encode the sequence, count
    /// transitions and normalize rows.
    ///
    /// The generator is only drawn from under [`Boundary::Random`]; with the
    /// other boundary conditions this stage is fully deterministic.
    ///
    /// # Errors
    ///
    /// Besides the partition resolution errors, returns
    /// [`EstimatorError::InsufficientData`] for fewer than 2 retained points
    /// and [`EstimatorError::TooFewBins`] when the sequence visits fewer
    /// than 2 distinct bins, since no transition structure exists in either
    /// case.
    pub fn approximate<R: Rng>(
        &self,
        data: &Array2<f64>,
        rng: &mut R,
    ) -> Result<TransferOperatorApproximation, EstimatorError> {
        self.solver.validate()?;
        if data.nrows() == 0 {
            return Err(EstimatorError::EmptyData);
        }
        if data.nrows() < 2 {
            return Err(EstimatorError::InsufficientData {
                n: data.nrows(),
                min: 2,
            });
        }
        let partition = self.partition.resolve(data)?;
        let encoded = encode_sequence(data, &partition);
        if encoded.excluded > 0 {
            warn!(
                "excluded {} point(s) outside the fixed partition ranges",
                encoded.excluded
            );
        }
        if encoded.positions.len() < 2 {
            return Err(EstimatorError::InsufficientData {
                n: encoded.positions.len(),
                min: 2,
            });
        }
        if encoded.catalog.len() < 2 {
            return Err(EstimatorError::TooFewBins {
                n: encoded.catalog.len(),
            });
        }

        let counts = count_transitions(
            &encoded.positions,
            encoded.catalog.len(),
            self.boundary,
            rng,
        );
        let transitions = normalize_rows(&counts);

        Ok(TransferOperatorApproximation {
            partition,
            catalog: encoded.catalog,
            transitions,
            solver: self.solver,
        })
    }
}

impl ProbabilitiesEstimator for TransferOperator {
    fn probabilities_and_outcomes<R: Rng>(
        &self,
        data: &Array2<f64>,
        rng: &mut R,
    ) -> Result<(Probabilities, Vec<Array1<f64>>), EstimatorError> {
        let approximation = self.approximate(data, rng)?;
        let measure = approximation.invariant_measure(rng)?;
        Ok((measure.probabilities, measure.outcomes))
    }
}

/// The estimated transfer operator: resolved partition, visited-bin catalog
/// and row-stochastic transition matrix.
pub struct TransferOperatorApproximation {
    partition: ResolvedPartition,
    catalog: BinCatalog,
    transitions: RowStochastic,
    solver: PowerIterationConfig,
}

impl TransferOperatorApproximation {
    /// The visited bins, in first-visitation order.
    pub fn catalog(&self) -> &BinCatalog {
        &self.catalog
    }

    /// The resolved partition the bins refer to.
    pub fn partition(&self) -> &ResolvedPartition {
        &self.partition
    }

    /// The row-stochastic transition matrix over the catalog.
    pub fn transition_matrix(&self) -> &CsrMatrix {
        self.transitions.matrix()
    }

    /// Rows of the transition matrix with no outgoing transitions.
    pub fn degenerate_rows(&self) -> &[usize] {
        self.transitions.degenerate_rows()
    }

    /// Reference corners of the visited bins in data coordinates, aligned
    /// with the catalog (and therefore with the invariant distribution).
    pub fn outcomes(&self) -> Vec<Array1<f64>> {
        self.catalog
            .iter()
            .map(|bin| self.partition.decode(bin))
            .collect()
    }

    /// Solve for the invariant measure over the visited bins.
    ///
    /// The generator seeds the solver's initial distribution; the converged
    /// result does not depend on it beyond the solver tolerance.
    pub fn invariant_measure<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<InvariantMeasure, EstimatorError> {
        let outcome = stationary_distribution(self.transitions.matrix(), &self.solver, rng)?;
        let probabilities = Probabilities::new(outcome.distribution)?;
        Ok(InvariantMeasure {
            probabilities,
            outcomes: self.outcomes(),
            converged: outcome.converged,
            iterations: outcome.iterations,
        })
    }
}

/// An invariant measure over visited bins, with the bins decoded to data
/// coordinates.
#[derive(Debug, Clone)]
pub struct InvariantMeasure {
    /// Long-run occupation probability per visited bin.
    pub probabilities: Probabilities,
    /// Reference corner of each bin, aligned with `probabilities`.
    pub outcomes: Vec<Array1<f64>>,
    /// Whether the solver met its tolerance within the iteration budget.
    pub converged: bool,
    /// Iterations the solver performed.
    pub iterations: usize,
}
