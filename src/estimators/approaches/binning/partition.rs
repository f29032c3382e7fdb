use ndarray::{Array2, Axis};

use crate::estimators::approaches::binning::encoder::ResolvedPartition;
use crate::estimators::error::EstimatorError;

/// Fraction by which data-driven edge lengths are padded so the largest
/// datum falls strictly inside the last bin instead of on its upper edge.
const COVERAGE_PAD: f64 = 0.01;

/// Specification of a rectangular partition of D-dimensional state space.
///
/// The data-driven variants derive their axis ranges from the data passed to
/// [`PartitionSpec::resolve`]; `FixedRanges` fixes them up front, in which
/// case points outside the ranges encode to the out-of-range sentinel and
/// are excluded downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum PartitionSpec {
    /// Same number of bins on every axis; ranges derived from the data
    /// extent with a small pad guaranteeing coverage.
    BinCount(usize),
    /// Per-axis bin counts; ranges derived as for [`PartitionSpec::BinCount`].
    BinCountPerAxis(Vec<usize>),
    /// Same bin width on every axis; ranges grow from the per-axis data
    /// minimum until the data is covered.
    BinWidth(f64),
    /// Per-axis bin widths; ranges derived as for [`PartitionSpec::BinWidth`].
    BinWidthPerAxis(Vec<f64>),
    /// Explicit per-axis `(min, max)` ranges, each split into `bins` bins,
    /// independent of the data.
    FixedRanges {
        /// Inclusive lower and exclusive upper bound per axis.
        ranges: Vec<(f64, f64)>,
        /// Number of bins per axis.
        bins: usize,
    },
}

impl PartitionSpec {
    /// Check the specification itself, independent of any data.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::InvalidPartition`] for zero bin counts,
    /// non-positive or non-finite widths, and empty or inverted ranges.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        match self {
            PartitionSpec::BinCount(count) => {
                if *count == 0 {
                    return Err(EstimatorError::InvalidPartition {
                        reason: "bin count must be positive".to_string(),
                    });
                }
            }
            PartitionSpec::BinCountPerAxis(counts) => {
                if counts.is_empty() {
                    return Err(EstimatorError::InvalidPartition {
                        reason: "per-axis bin counts are empty".to_string(),
                    });
                }
                if let Some(axis) = counts.iter().position(|&c| c == 0) {
                    return Err(EstimatorError::InvalidPartition {
                        reason: format!("bin count for axis {axis} must be positive"),
                    });
                }
            }
            PartitionSpec::BinWidth(width) => {
                if !width.is_finite() || *width <= 0.0 {
                    return Err(EstimatorError::InvalidPartition {
                        reason: format!("bin width must be finite and positive, got {width}"),
                    });
                }
            }
            PartitionSpec::BinWidthPerAxis(widths) => {
                if widths.is_empty() {
                    return Err(EstimatorError::InvalidPartition {
                        reason: "per-axis bin widths are empty".to_string(),
                    });
                }
                if let Some(axis) = widths.iter().position(|w| !w.is_finite() || *w <= 0.0) {
                    return Err(EstimatorError::InvalidPartition {
                        reason: format!(
                            "bin width for axis {axis} must be finite and positive, got {}",
                            widths[axis]
                        ),
                    });
                }
            }
            PartitionSpec::FixedRanges { ranges, bins } => {
                if *bins == 0 {
                    return Err(EstimatorError::InvalidPartition {
                        reason: "bin count must be positive".to_string(),
                    });
                }
                if ranges.is_empty() {
                    return Err(EstimatorError::InvalidPartition {
                        reason: "axis ranges are empty".to_string(),
                    });
                }
                for (axis, &(lo, hi)) in ranges.iter().enumerate() {
                    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
                        return Err(EstimatorError::InvalidPartition {
                            reason: format!("range for axis {axis} is not a finite interval: ({lo}, {hi})"),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Resolve per-axis origin, edge length and bin count against the data.
    ///
    /// Rows of `data` are samples, columns are dimensions. For the
    /// data-driven variants the resolved axes cover every sample: count
    /// variants pad the edge length by 1% so the maximum falls
    /// strictly inside the last bin, width variants extend the range with
    /// whole bins until the maximum is covered.
    ///
    /// # Errors
    ///
    /// [`EstimatorError::EmptyData`] for empty input,
    /// [`EstimatorError::NonFiniteData`] if any coordinate is NaN or
    /// infinite, [`EstimatorError::DimensionMismatch`] when a per-axis
    /// specification does not match the data dimensionality, and
    /// [`EstimatorError::DegenerateAxis`] when a count variant meets an axis
    /// of zero extent.
    pub fn resolve(&self, data: &Array2<f64>) -> Result<ResolvedPartition, EstimatorError> {
        self.validate()?;
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(EstimatorError::EmptyData);
        }
        let dims = data.ncols();
        let extents = column_extents(data)?;

        match self {
            PartitionSpec::BinCount(count) => {
                resolve_counts(&extents, &vec![*count; dims])
            }
            PartitionSpec::BinCountPerAxis(counts) => {
                if counts.len() != dims {
                    return Err(EstimatorError::DimensionMismatch {
                        spec_dims: counts.len(),
                        data_dims: dims,
                    });
                }
                resolve_counts(&extents, counts)
            }
            PartitionSpec::BinWidth(width) => Ok(resolve_widths(&extents, &vec![*width; dims])),
            PartitionSpec::BinWidthPerAxis(widths) => {
                if widths.len() != dims {
                    return Err(EstimatorError::DimensionMismatch {
                        spec_dims: widths.len(),
                        data_dims: dims,
                    });
                }
                Ok(resolve_widths(&extents, widths))
            }
            PartitionSpec::FixedRanges { ranges, bins } => {
                if ranges.len() != dims {
                    return Err(EstimatorError::DimensionMismatch {
                        spec_dims: ranges.len(),
                        data_dims: dims,
                    });
                }
                let mut origin = Vec::with_capacity(dims);
                let mut edges = Vec::with_capacity(dims);
                for &(lo, hi) in ranges {
                    origin.push(lo);
                    edges.push((hi - lo) / *bins as f64);
                }
                Ok(ResolvedPartition::new(origin, edges, vec![*bins; dims], true))
            }
        }
    }
}

/// Per-axis `(min, max)` over all samples, rejecting non-finite input.
fn column_extents(data: &Array2<f64>) -> Result<Vec<(f64, f64)>, EstimatorError> {
    let mut extents = Vec::with_capacity(data.ncols());
    for column in data.axis_iter(Axis(1)) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in column.iter() {
            if !v.is_finite() {
                return Err(EstimatorError::NonFiniteData);
            }
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        extents.push((min, max));
    }
    Ok(extents)
}

fn resolve_counts(
    extents: &[(f64, f64)],
    counts: &[usize],
) -> Result<ResolvedPartition, EstimatorError> {
    let mut origin = Vec::with_capacity(extents.len());
    let mut edges = Vec::with_capacity(extents.len());
    for (axis, (&(min, max), &count)) in extents.iter().zip(counts.iter()).enumerate() {
        let extent = max - min;
        if extent <= 0.0 {
            return Err(EstimatorError::DegenerateAxis { axis });
        }
        origin.push(min);
        edges.push(extent * (1.0 + COVERAGE_PAD) / count as f64);
    }
    Ok(ResolvedPartition::new(origin, edges, counts.to_vec(), false))
}

fn resolve_widths(extents: &[(f64, f64)], widths: &[f64]) -> ResolvedPartition {
    let mut origin = Vec::with_capacity(extents.len());
    let mut bins = Vec::with_capacity(extents.len());
    for (&(min, max), &width) in extents.iter().zip(widths.iter()) {
        origin.push(min);
        // Whole bins from the minimum until the maximum is covered.
        bins.push(((max - min) / width).floor() as usize + 1);
    }
    ResolvedPartition::new(origin, widths.to_vec(), bins, false)
}
