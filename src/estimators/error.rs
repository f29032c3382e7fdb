//! Error types for estimation over rectangular partitions.

/// Error type for all fallible operations in this crate.
///
/// Every variant is a configuration error in the sense that it is surfaced
/// immediately and never retried: there is no transient failure mode in a
/// purely in-memory computation. Non-fatal conditions (excluded points,
/// degenerate transition rows, an exhausted iteration budget) are reported
/// through the `log` facade and result fields instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EstimatorError {
    /// Returned when input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when there are too few usable points.
    #[error("insufficient data: got {n} points, need at least {min}")]
    InsufficientData {
        /// Number of usable points provided.
        n: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when input contains NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when a partition specification is malformed.
    #[error("invalid partition: {reason}")]
    InvalidPartition {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a per-axis specification does not match the data
    /// dimensionality.
    #[error("dimension mismatch: specification covers {spec_dims} axes, data has {data_dims}")]
    DimensionMismatch {
        /// Number of axes the specification covers.
        spec_dims: usize,
        /// Number of columns in the data.
        data_dims: usize,
    },

    /// Returned when an axis has zero extent under a data-driven partition,
    /// so no positive bin width can be derived for it.
    #[error("axis {axis} has zero extent; cannot derive a positive bin width")]
    DegenerateAxis {
        /// Zero-based axis index.
        axis: usize,
    },

    /// Returned when a boundary-condition name is not recognised.
    #[error("unsupported boundary condition {name:?} (expected \"none\", \"circular\" or \"random\")")]
    UnsupportedBoundary {
        /// The rejected selector string.
        name: String,
    },

    /// Returned when fewer than two distinct bins are visited, leaving no
    /// transition structure to estimate.
    #[error("only {n} distinct bin(s) visited; transition estimation needs at least 2")]
    TooFewBins {
        /// Number of distinct bins visited.
        n: usize,
    },

    /// Returned when a weight vector cannot be turned into a probability
    /// distribution.
    #[error("invalid distribution weights: {reason}")]
    InvalidDistribution {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when solver settings are unusable.
    #[error("invalid solver configuration: {reason}")]
    InvalidSolverConfig {
        /// Description of the problem.
        reason: String,
    },
}
