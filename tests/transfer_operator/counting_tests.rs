use transferop::estimators::approaches::transfer_operator::{Boundary, count_transitions};
use transferop::estimators::error::EstimatorError;

use crate::test_helpers::{SeedableRng, StdRng, assert_abs_diff_eq};

#[test]
fn consecutive_pairs_are_counted() {
    // Pairs: (0,1), (1,0), (0,1), (1,0) -> 4 transitions total.
    let positions = [0, 1, 0, 1, 0];
    let mut rng = StdRng::seed_from_u64(1);
    let counts = count_transitions(&positions, 2, Boundary::None, &mut rng);

    assert_abs_diff_eq!(counts.get(0, 1), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(counts.get(1, 0), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(counts.total(), 1.0, epsilon = 1e-12);
}

#[test]
fn boundary_none_leaves_the_last_bin_without_outgoing_mass() {
    let positions = [0, 1, 2];
    let mut rng = StdRng::seed_from_u64(1);
    let counts = count_transitions(&positions, 3, Boundary::None, &mut rng);

    assert_abs_diff_eq!(counts.row_sum(2), 0.0, epsilon = 1e-15);
    assert_eq!(counts.nnz(), 2);
}

#[test]
fn boundary_circular_links_the_last_point_to_the_first_bin() {
    let positions = [0, 1, 2];
    let mut rng = StdRng::seed_from_u64(1);
    let counts = count_transitions(&positions, 3, Boundary::Circular, &mut rng);

    // Three transitions after the synthetic one, each 1/3 of the mass.
    assert_abs_diff_eq!(counts.get(2, 0), 1.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(counts.total(), 1.0, epsilon = 1e-12);
}

#[test]
fn boundary_random_adds_exactly_one_outgoing_transition() {
    let positions = [0, 1, 2];
    let mut rng = StdRng::seed_from_u64(99);
    let counts = count_transitions(&positions, 3, Boundary::Random, &mut rng);

    // The observed pairs keep their relative weight and the last row gains
    // a single synthetic transition to some catalogued bin.
    assert_abs_diff_eq!(counts.get(0, 1), 1.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(counts.get(1, 2), 1.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(counts.row_sum(2), 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn boundary_random_is_reproducible_from_the_seed() {
    let positions = [0, 1, 2, 1, 0, 2];
    let mut rng_a = StdRng::seed_from_u64(5);
    let mut rng_b = StdRng::seed_from_u64(5);
    let a = count_transitions(&positions, 3, Boundary::Random, &mut rng_a);
    let b = count_transitions(&positions, 3, Boundary::Random, &mut rng_b);
    assert_eq!(a, b);
}

#[test]
fn boundary_none_ignores_the_generator() {
    let positions = [0, 1, 1, 0];
    let mut rng_a = StdRng::seed_from_u64(1);
    let mut rng_b = StdRng::seed_from_u64(2);
    let a = count_transitions(&positions, 2, Boundary::None, &mut rng_a);
    let b = count_transitions(&positions, 2, Boundary::None, &mut rng_b);
    assert_eq!(a, b);
}

#[test]
fn boundary_parses_from_selector_strings() {
    assert_eq!("none".parse::<Boundary>().unwrap(), Boundary::None);
    assert_eq!("circular".parse::<Boundary>().unwrap(), Boundary::Circular);
    assert_eq!("random".parse::<Boundary>().unwrap(), Boundary::Random);
}

#[test]
fn unknown_boundary_selector_is_a_configuration_error() {
    let result = "reflective".parse::<Boundary>();
    assert!(matches!(
        result,
        Err(EstimatorError::UnsupportedBoundary { .. })
    ));
}
