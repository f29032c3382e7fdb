// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Rectangular-binning module: groups the partition specification, the point
// encoder, the sequence encoder and the visitation-frequency estimator.

pub mod encoder;
pub mod partition;
pub mod sequence;
pub mod value_binning;

pub use encoder::{EncodedBin, ResolvedPartition};
pub use partition::PartitionSpec;
pub use sequence::{BinCatalog, EncodedSequence, encode_sequence};
pub use value_binning::ValueBinning;
