use ndarray::array;
use transferop::estimators::approaches::binning::PartitionSpec;
use transferop::estimators::error::EstimatorError;

use crate::test_helpers::{assert_abs_diff_eq, column};

#[test]
fn validate_rejects_zero_bin_count() {
    let result = PartitionSpec::BinCount(0).validate();
    assert!(matches!(result, Err(EstimatorError::InvalidPartition { .. })));
}

#[test]
fn validate_rejects_zero_per_axis_count() {
    let result = PartitionSpec::BinCountPerAxis(vec![3, 0]).validate();
    assert!(matches!(result, Err(EstimatorError::InvalidPartition { .. })));
}

#[test]
fn validate_rejects_nonpositive_width() {
    assert!(matches!(
        PartitionSpec::BinWidth(-0.5).validate(),
        Err(EstimatorError::InvalidPartition { .. })
    ));
    assert!(matches!(
        PartitionSpec::BinWidth(f64::NAN).validate(),
        Err(EstimatorError::InvalidPartition { .. })
    ));
    assert!(matches!(
        PartitionSpec::BinWidthPerAxis(vec![0.5, 0.0]).validate(),
        Err(EstimatorError::InvalidPartition { .. })
    ));
}

#[test]
fn validate_rejects_inverted_range() {
    let spec = PartitionSpec::FixedRanges {
        ranges: vec![(1.0, 0.0)],
        bins: 2,
    };
    assert!(matches!(
        spec.validate(),
        Err(EstimatorError::InvalidPartition { .. })
    ));
}

#[test]
fn resolve_rejects_dimension_mismatch() {
    let data = column(&[0.0, 0.5, 1.0]);
    let result = PartitionSpec::BinCountPerAxis(vec![2, 3]).resolve(&data);
    assert!(matches!(
        result,
        Err(EstimatorError::DimensionMismatch {
            spec_dims: 2,
            data_dims: 1
        })
    ));
}

#[test]
fn resolve_rejects_zero_extent_axis() {
    let data = column(&[0.7, 0.7, 0.7, 0.7]);
    let result = PartitionSpec::BinCount(3).resolve(&data);
    assert!(matches!(result, Err(EstimatorError::DegenerateAxis { axis: 0 })));
}

#[test]
fn resolve_rejects_non_finite_data() {
    let data = column(&[0.1, f64::NAN, 0.9]);
    let result = PartitionSpec::BinCount(3).resolve(&data);
    assert!(matches!(result, Err(EstimatorError::NonFiniteData)));
}

#[test]
fn resolve_rejects_empty_data() {
    let data = ndarray::Array2::<f64>::zeros((0, 1));
    let result = PartitionSpec::BinCount(3).resolve(&data);
    assert!(matches!(result, Err(EstimatorError::EmptyData)));
}

#[test]
fn count_partition_covers_all_points() {
    // Points spanning [0, 1]; the coverage pad must keep the maximum
    // strictly inside the last of 5 bins.
    let values: Vec<f64> = (0..=20).map(|i| i as f64 / 20.0).collect();
    let data = column(&values);
    let partition = PartitionSpec::BinCount(5).resolve(&data).unwrap();

    for point in data.axis_iter(ndarray::Axis(0)) {
        let bin = partition.encode_point(point);
        assert!(bin.is_some(), "point {point} failed to encode");
        let idx = bin.unwrap()[0];
        assert!((0..5).contains(&idx), "index {idx} outside [0, 5)");
    }
}

#[test]
fn width_partition_covers_maximum() {
    let data = column(&[0.0, 0.4, 1.0]);
    let partition = PartitionSpec::BinWidth(0.3).resolve(&data).unwrap();
    // floor(1.0 / 0.3) + 1 = 4 bins of width 0.3 from the minimum.
    assert_eq!(partition.bins_per_axis(), &[4]);
    let bin = partition.encode_point(data.row(2)).unwrap();
    assert_eq!(bin[0], 3);
}

#[test]
fn fixed_ranges_resolve_independent_of_data() {
    let data = column(&[0.4, 0.6]);
    let spec = PartitionSpec::FixedRanges {
        ranges: vec![(0.0, 1.0)],
        bins: 4,
    };
    let partition = spec.resolve(&data).unwrap();
    assert_abs_diff_eq!(partition.origin()[0], 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(partition.edge_lengths()[0], 0.25, epsilon = 1e-15);
    assert!(partition.is_bounded());
}

#[test]
fn decode_returns_reference_corner() {
    let data = array![[0.0, 10.0], [2.0, 14.0], [4.0, 18.0]];
    let partition = PartitionSpec::BinCount(4).resolve(&data).unwrap();
    for (axis, (&origin, &edge)) in partition
        .origin()
        .iter()
        .zip(partition.edge_lengths().iter())
        .enumerate()
    {
        let corner = partition.decode(&vec![0, 0]);
        assert_abs_diff_eq!(corner[axis], origin, epsilon = 1e-12);
        let shifted = partition.decode(&vec![1, 1]);
        assert_abs_diff_eq!(shifted[axis], origin + edge, epsilon = 1e-12);
    }
}
