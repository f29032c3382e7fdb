use ndarray::{Array1, ArrayView1};

/// Per-axis integer bin indices identifying one rectangular bin.
pub type EncodedBin = Vec<i32>;

/// A rectangular partition with per-axis origin, edge lengths and bin
/// counts, resolved from a [`PartitionSpec`](super::PartitionSpec) and (for
/// data-driven variants) the data extent.
///
/// Encoding is a pure function of the point and the resolved axes: the bin
/// index on each axis is the floored, edge-length-scaled offset from that
/// axis' origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPartition {
    origin: Vec<f64>,
    edge_lengths: Vec<f64>,
    bins_per_axis: Vec<usize>,
    bounded: bool,
}

impl ResolvedPartition {
    pub(crate) fn new(
        origin: Vec<f64>,
        edge_lengths: Vec<f64>,
        bins_per_axis: Vec<usize>,
        bounded: bool,
    ) -> Self {
        debug_assert_eq!(origin.len(), edge_lengths.len());
        debug_assert_eq!(origin.len(), bins_per_axis.len());
        Self {
            origin,
            edge_lengths,
            bins_per_axis,
            bounded,
        }
    }

    /// Number of state-space dimensions.
    pub fn dims(&self) -> usize {
        self.origin.len()
    }

    /// Per-axis reference corner of bin `(0, …, 0)`.
    pub fn origin(&self) -> &[f64] {
        &self.origin
    }

    /// Per-axis bin edge lengths.
    pub fn edge_lengths(&self) -> &[f64] {
        &self.edge_lengths
    }

    /// Per-axis bin counts covering the resolved ranges.
    pub fn bins_per_axis(&self) -> &[usize] {
        &self.bins_per_axis
    }

    /// Whether the partition has pre-fixed ranges, outside which points are
    /// not covered.
    pub fn is_bounded(&self) -> bool {
        self.bounded
    }

    /// Encode one point into its per-axis bin indices.
    ///
    /// Returns `None` when the partition has pre-fixed ranges and the point
    /// falls outside them on any axis. Data-driven partitions cover every
    /// point they were resolved from, so `None` cannot occur for those.
    pub fn encode_point(&self, point: ArrayView1<'_, f64>) -> Option<EncodedBin> {
        debug_assert_eq!(point.len(), self.dims());
        let mut bin = Vec::with_capacity(self.dims());
        for (axis, &x) in point.iter().enumerate() {
            let idx = ((x - self.origin[axis]) / self.edge_lengths[axis]).floor();
            if self.bounded && (idx < 0.0 || idx >= self.bins_per_axis[axis] as f64) {
                return None;
            }
            bin.push(idx as i32);
        }
        Some(bin)
    }

    /// Reference corner of a bin in data coordinates (the corner closest to
    /// the axis origins).
    pub fn decode(&self, bin: &EncodedBin) -> Array1<f64> {
        debug_assert_eq!(bin.len(), self.dims());
        Array1::from_iter(
            bin.iter()
                .enumerate()
                .map(|(axis, &i)| self.origin[axis] + f64::from(i) * self.edge_lengths[axis]),
        )
    }
}
