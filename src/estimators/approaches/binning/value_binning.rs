use log::warn;
use ndarray::{Array1, Array2};
use rand::Rng;

use crate::estimators::approaches::binning::partition::PartitionSpec;
use crate::estimators::approaches::binning::sequence::encode_sequence;
use crate::estimators::error::EstimatorError;
use crate::estimators::probabilities::Probabilities;
use crate::estimators::traits::ProbabilitiesEstimator;

/// Visitation-frequency probabilities over a rectangular partition.
///
/// Counts how often the sequence visits each bin and reports relative
/// frequencies. The time ordering of the input only affects the outcome
/// ordering (first-visitation), not the probabilities themselves; for the
/// long-run occupation under the transition dynamics, use the transfer
/// operator estimator instead.
pub struct ValueBinning {
    partition: PartitionSpec,
}

impl ValueBinning {
    pub fn new(partition: PartitionSpec) -> Self {
        Self { partition }
    }

    /// The partition specification this estimator bins over.
    pub fn partition(&self) -> &PartitionSpec {
        &self.partition
    }
}

impl ProbabilitiesEstimator for ValueBinning {
    fn probabilities_and_outcomes<R: Rng>(
        &self,
        data: &Array2<f64>,
        _rng: &mut R,
    ) -> Result<(Probabilities, Vec<Array1<f64>>), EstimatorError> {
        if data.nrows() == 0 {
            return Err(EstimatorError::EmptyData);
        }
        let partition = self.partition.resolve(data)?;
        let encoded = encode_sequence(data, &partition);
        if encoded.excluded > 0 {
            warn!(
                "excluded {} point(s) outside the fixed partition ranges",
                encoded.excluded
            );
        }
        if encoded.positions.is_empty() {
            return Err(EstimatorError::InsufficientData { n: 0, min: 1 });
        }

        let mut counts = vec![0.0_f64; encoded.catalog.len()];
        for &pos in &encoded.positions {
            counts[pos] += 1.0;
        }
        let probs = Probabilities::from_weights(Array1::from(counts))?;
        let outcomes = encoded.catalog.iter().map(|b| partition.decode(b)).collect();
        Ok((probs, outcomes))
    }
}
