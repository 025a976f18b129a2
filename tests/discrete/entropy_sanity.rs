// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use mibits::estimators::approaches::discrete::DiscreteConditionalEntropy;
use mibits::estimators::approaches::discrete::mle::DiscreteEntropy;
use mibits::estimators::{GlobalValue, JointEntropy, LocalValues, OptionalLocalValues};
use ndarray::Array1;

use crate::test_helpers::{generate_random_labels, naive_entropy_bits};

#[test]
fn discrete_entropy_known_example() {
    // [1,1,2,3,3,4,5]: two states of count 2, three of count 1
    let data = Array1::from(vec![1, 1, 2, 3, 3, 4, 5]);
    let est = DiscreteEntropy::new(data);

    // H = log2(7) - 4/7 bits
    let expected_h = 7f64.log2() - 4.0 / 7.0;
    assert_abs_diff_eq!(est.global_value(), expected_h, epsilon = 1e-12);

    // Local values: -log2 p(x)
    let local_2 = -(2.0f64 / 7.0).log2();
    let local_1 = -(1.0f64 / 7.0).log2();
    let expected_locals = [local_2, local_2, local_1, local_2, local_2, local_1, local_1];
    let locals = est.local_values();
    for (i, &val) in locals.iter().enumerate() {
        assert_abs_diff_eq!(val, expected_locals[i], epsilon = 1e-12);
    }

    // OptionalLocalValues should report support
    assert!(est.supports_local());
    assert_eq!(est.local_values_opt().unwrap().len(), locals.len());
}

#[test]
fn discrete_entropy_uniform_is_two_bits() {
    let data = Array1::from(vec![0, 1, 2, 3, 0, 1, 2, 3]);
    let est = DiscreteEntropy::new(data);
    assert_abs_diff_eq!(est.global_value(), 2.0, epsilon = 1e-12);
    for val in est.local_values().iter() {
        assert_abs_diff_eq!(*val, 2.0, epsilon = 1e-12);
    }
}

#[test]
fn entropy_is_zero_exactly_for_a_point_mass() {
    let constant = DiscreteEntropy::new(Array1::from(vec![7; 32]));
    assert_eq!(constant.global_value(), 0.0);

    let nearly_constant = DiscreteEntropy::new(Array1::from(vec![7, 7, 7, 8]));
    assert!(nearly_constant.global_value() > 0.0);
}

#[test]
fn empty_series_has_zero_entropy() {
    let est = DiscreteEntropy::new(Array1::from(Vec::<i32>::new()));
    assert_eq!(est.global_value(), 0.0);
    assert_eq!(est.local_values().len(), 0);
    assert_eq!(est.global_from_local(), 0.0);
}

#[test]
fn global_matches_mean_of_locals() {
    let data = Array1::from(generate_random_labels(500, 6, 11));
    let est = DiscreteEntropy::new(data);
    assert_abs_diff_eq!(est.global_value(), est.global_from_local(), epsilon = 1e-10);
}

#[test]
fn global_matches_naive_reference() {
    let labels = generate_random_labels(300, 8, 21);
    let est = DiscreteEntropy::new(Array1::from(labels.clone()));
    assert_abs_diff_eq!(est.global_value(), naive_entropy_bits(&labels), epsilon = 1e-10);
}

#[test]
fn joint_entropy_of_a_series_with_itself() {
    let x = Array1::from(generate_random_labels(200, 5, 31));
    let h = DiscreteEntropy::new(x.clone()).global_value();
    let h_xx = DiscreteEntropy::joint_entropy(&[x.clone(), x], ());
    assert_abs_diff_eq!(h_xx, h, epsilon = 1e-10);
}

#[test]
fn joint_entropy_is_subadditive() {
    let x = Array1::from(generate_random_labels(400, 4, 41));
    let y = Array1::from(generate_random_labels(400, 5, 42));
    let h_x = DiscreteEntropy::new(x.clone()).global_value();
    let h_y = DiscreteEntropy::new(y.clone()).global_value();
    let h_xy = DiscreteEntropy::joint_entropy(&[x.clone(), y.clone()], ());
    assert!(h_xy <= h_x + h_y + 1e-10);
    assert!(h_xy >= h_x.max(h_y) - 1e-10);
}

#[test]
fn joint_entropy_of_no_series_is_zero() {
    assert_eq!(DiscreteEntropy::joint_entropy(&[], ()), 0.0);
}

#[test]
fn conditional_entropy_of_independent_pair_is_marginal() {
    // Y tells us nothing about X here
    let x = Array1::from(vec![0, 0, 1, 1]);
    let y = Array1::from(vec![0, 1, 0, 1]);
    let est = DiscreteConditionalEntropy::new(&x, &y, DiscreteEntropy::new);
    assert_abs_diff_eq!(est.global_value(), 1.0, epsilon = 1e-12);
}

#[test]
fn conditional_entropy_of_determined_series_is_near_zero() {
    // X is a function of Y, so H(X|Y) is zero up to rounding in the
    // difference of the two estimates.
    let y = Array1::from(generate_random_labels(300, 6, 51));
    let x = y.mapv(|v| v % 2);
    let est = DiscreteConditionalEntropy::new(&x, &y, DiscreteEntropy::new);
    let h = est.global_value();
    assert!(h.abs() < 1e-10, "H(X|Y) = {h} for functionally dependent X");
}

#[test]
fn conditional_entropy_locals_average_to_global() {
    let x = Array1::from(generate_random_labels(250, 3, 61));
    let y = Array1::from(generate_random_labels(250, 4, 62));
    let est = DiscreteConditionalEntropy::new(&x, &y, DiscreteEntropy::new);
    assert!(est.supports_local());
    assert_abs_diff_eq!(est.global_value(), est.global_from_local(), epsilon = 1e-10);
}
