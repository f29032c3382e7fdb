use transferop::estimators::approaches::transfer_operator::{
    Boundary, count_transitions, normalize_rows,
};

use crate::test_helpers::{SeedableRng, StdRng, assert_abs_diff_eq};

#[test]
fn non_degenerate_rows_sum_to_one() {
    let positions = [0, 1, 0, 2, 1, 0];
    let mut rng = StdRng::seed_from_u64(1);
    let counts = count_transitions(&positions, 3, Boundary::Circular, &mut rng);
    let stochastic = normalize_rows(&counts);

    assert!(stochastic.is_fully_stochastic());
    for i in 0..3 {
        assert_abs_diff_eq!(stochastic.matrix().row_sum(i), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn all_zero_rows_are_recorded_and_left_untouched() {
    // Bin 2 is only visited last, so it has no outgoing transitions.
    let positions = [0, 1, 2];
    let mut rng = StdRng::seed_from_u64(1);
    let counts = count_transitions(&positions, 3, Boundary::None, &mut rng);
    let stochastic = normalize_rows(&counts);

    assert!(!stochastic.is_fully_stochastic());
    assert_eq!(stochastic.degenerate_rows(), &[2]);
    assert_abs_diff_eq!(stochastic.matrix().row_sum(2), 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(stochastic.matrix().row_sum(0), 1.0, epsilon = 1e-12);
}

#[test]
fn normalization_preserves_within_row_ratios() {
    let positions = [0, 1, 0, 0, 0, 1];
    // Row 0 pairs: (0,1) twice, (0,0) twice; row 1 pairs: (1,0) once.
    let mut rng = StdRng::seed_from_u64(1);
    let counts = count_transitions(&positions, 2, Boundary::None, &mut rng);
    let stochastic = normalize_rows(&counts);

    assert_abs_diff_eq!(stochastic.matrix().get(0, 0), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(stochastic.matrix().get(0, 1), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(stochastic.matrix().get(1, 0), 1.0, epsilon = 1e-12);
}

#[test]
fn normalization_does_not_mutate_the_counts() {
    let positions = [0, 1, 0];
    let mut rng = StdRng::seed_from_u64(1);
    let counts = count_transitions(&positions, 2, Boundary::None, &mut rng);
    let before = counts.clone();
    let _ = normalize_rows(&counts);
    assert_eq!(counts, before);
}
