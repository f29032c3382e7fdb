pub mod binning;
pub mod transfer_operator;

// Unified re-exports so users can import
// transferop::estimators::approaches::* ergonomically.
pub use binning::{PartitionSpec, ResolvedPartition, ValueBinning};
pub use transfer_operator::{Boundary, PowerIterationConfig, TransferOperator};
