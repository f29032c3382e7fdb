use std::str::FromStr;

use rand::Rng;

use crate::estimators::approaches::transfer_operator::sparse::{CsrMatrix, SparseMatrixBuilder};
use crate::estimators::error::EstimatorError;

/// How the final point of a sequence contributes an outgoing transition.
///
/// Under [`Boundary::None`] the last point has no outgoing transition, which
/// leaves its row of the count matrix empty unless the bin was also visited
/// earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// No synthetic transition; the last point contributes nothing outgoing.
    #[default]
    None,
    /// Synthetic transition from the last point back to the first bin,
    /// modeling periodic continuation.
    Circular,
    /// Synthetic transition from the last point to a uniformly random
    /// previously-visited bin, drawn from the injected generator.
    Random,
}

impl FromStr for Boundary {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Boundary::None),
            "circular" => Ok(Boundary::Circular),
            "random" => Ok(Boundary::Random),
            other => Err(EstimatorError::UnsupportedBoundary {
                name: other.to_string(),
            }),
        }
    }
}

/// Count bin-to-bin transitions from consecutive catalog positions.
///
/// Every pair `(positions[i], positions[i + 1])` increments one cell of an
/// `n_bins × n_bins` sparse count matrix; the boundary condition may append
/// one synthetic transition for the final point. The counts are then scaled
/// by the reciprocal of their total, a pure conditioning step ahead of
/// row-stochastic normalization.
///
/// The generator is only drawn from under [`Boundary::Random`].
pub fn count_transitions<R: Rng>(
    positions: &[usize],
    n_bins: usize,
    boundary: Boundary,
    rng: &mut R,
) -> CsrMatrix {
    let mut builder = SparseMatrixBuilder::new(n_bins, n_bins);
    for pair in positions.windows(2) {
        builder.add(pair[0], pair[1], 1.0);
    }
    if let (Some(&last), Some(&first)) = (positions.last(), positions.first()) {
        match boundary {
            Boundary::None => {}
            Boundary::Circular => builder.add(last, first, 1.0),
            Boundary::Random => builder.add(last, rng.gen_range(0..n_bins), 1.0),
        }
    }

    let counts = builder.build();
    let total = counts.total();
    if total > 0.0 {
        counts.scaled(1.0 / total)
    } else {
        counts
    }
}
