use std::collections::HashMap;
use std::collections::hash_map::Entry;

use ndarray::{Array2, Axis};

use crate::estimators::approaches::binning::encoder::{EncodedBin, ResolvedPartition};

/// The distinct bins visited by a sequence, in first-appearance order, with
/// a reverse index from bin to catalog position.
///
/// The ordering is part of the public contract: probability vectors and
/// outcome lists downstream are aligned with it, and callers may rely on it
/// being first-visitation order rather than any spatial sort.
#[derive(Debug, Clone, Default)]
pub struct BinCatalog {
    bins: Vec<EncodedBin>,
    index: HashMap<EncodedBin, usize>,
}

impl BinCatalog {
    /// Number of distinct bins.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether no bin was catalogued.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// The bin at catalog position `i`.
    pub fn bin(&self, i: usize) -> &EncodedBin {
        &self.bins[i]
    }

    /// Catalog position of `bin`, if it was visited.
    pub fn position(&self, bin: &EncodedBin) -> Option<usize> {
        self.index.get(bin).copied()
    }

    /// Iterate over the bins in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = &EncodedBin> {
        self.bins.iter()
    }

    /// Position of `bin`, inserting it at the end on first appearance.
    fn insert(&mut self, bin: EncodedBin) -> usize {
        match self.index.entry(bin) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let id = self.bins.len();
                self.bins.push(e.key().clone());
                e.insert(id);
                id
            }
        }
    }
}

/// Result of encoding an ordered point cloud over a resolved partition.
#[derive(Debug, Clone)]
pub struct EncodedSequence {
    /// Distinct visited bins in first-appearance order.
    pub catalog: BinCatalog,
    /// Catalog position of each retained point, in time order.
    pub positions: Vec<usize>,
    /// Number of points excluded as out of range (pre-fixed ranges only).
    pub excluded: usize,
}

/// Encode every point of `data` (rows = time-ordered samples) over
/// `partition` and compact the visited bins into a catalog.
///
/// Out-of-range points are dropped from the retained sequence and only
/// counted; the surviving points keep their relative time order.
pub fn encode_sequence(data: &Array2<f64>, partition: &ResolvedPartition) -> EncodedSequence {
    debug_assert_eq!(data.ncols(), partition.dims());
    let mut catalog = BinCatalog::default();
    let mut positions = Vec::with_capacity(data.nrows());
    let mut excluded = 0usize;
    for point in data.axis_iter(Axis(0)) {
        match partition.encode_point(point) {
            Some(bin) => positions.push(catalog.insert(bin)),
            None => excluded += 1,
        }
    }
    EncodedSequence {
        catalog,
        positions,
        excluded,
    }
}
