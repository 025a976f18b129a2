// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use mibits::errors::Error;
use mibits::estimators::approaches::discrete::weighted::WeightedEntropy;
use mibits::estimators::entropy::Entropy;
use mibits::estimators::mutual_information::MutualInformation;
use mibits::estimators::{GlobalValue, OptionalLocalValues};
use ndarray::Array1;

use crate::test_helpers::{generate_random_labels, generate_random_weights, naive_entropy_bits};

#[test]
fn integer_weights_equal_sample_replication() {
    let x = Array1::from(vec![0, 0, 1, 1]);
    let w = Array1::from(vec![2.0, 2.0, 1.0, 1.0]);
    let weighted = WeightedEntropy::new(x, &w).unwrap().global_value();
    let replicated = naive_entropy_bits(&[0, 0, 0, 0, 1, 1]);
    assert_abs_diff_eq!(weighted, replicated, epsilon = 1e-12);
    // H(2/3, 1/3) in closed form
    assert_abs_diff_eq!(weighted, 3f64.log2() - 2.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn all_ones_weights_match_unweighted() {
    for seed in 0..4 {
        let labels = generate_random_labels(200, 5, 300 + seed);
        let x = Array1::from(labels);
        let w = Array1::from(vec![1.0; 200]);
        let weighted = WeightedEntropy::new(x.clone(), &w).unwrap().global_value();
        let unweighted = Entropy::new_discrete(x).global_value();
        assert_abs_diff_eq!(weighted, unweighted, epsilon = 1e-12);
    }
}

#[test]
fn scaling_all_weights_changes_nothing() {
    let x = Array1::from(generate_random_labels(150, 4, 401));
    let w = generate_random_weights(150, 402);
    let doubled: Vec<f64> = w.iter().map(|v| v * 2.0).collect();
    let a = WeightedEntropy::new(x.clone(), &Array1::from(w))
        .unwrap()
        .global_value();
    let b = WeightedEntropy::new(x, &Array1::from(doubled))
        .unwrap()
        .global_value();
    assert_abs_diff_eq!(a, b, epsilon = 1e-10);
}

#[test]
fn zero_weight_states_drop_out_of_the_distribution() {
    // State 2 appears only with zero weight, leaving a fair coin.
    let x = Array1::from(vec![0, 1, 2, 0, 1]);
    let w = Array1::from(vec![1.0, 1.0, 0.0, 1.0, 1.0]);
    let weighted = WeightedEntropy::new(x, &w).unwrap().global_value();
    assert_abs_diff_eq!(weighted, 1.0, epsilon = 1e-12);
}

#[test]
fn zero_total_weight_means_zero_entropy() {
    let x = Array1::from(vec![0, 1, 2]);
    let w = Array1::from(vec![0.0, 0.0, 0.0]);
    assert_eq!(WeightedEntropy::new(x, &w).unwrap().global_value(), 0.0);
}

#[test]
fn empty_series_with_empty_weights_is_zero() {
    let est = WeightedEntropy::new(Array1::from(Vec::<i32>::new()), &Array1::from(Vec::<f64>::new()))
        .unwrap();
    assert_eq!(est.global_value(), 0.0);
}

#[test]
fn negative_weight_is_rejected_with_its_index() {
    let x = Array1::from(vec![0, 1, 2]);
    let w = Array1::from(vec![1.0, -0.5, 1.0]);
    match WeightedEntropy::new(x, &w) {
        Err(Error::InvalidWeight { index, weight }) => {
            assert_eq!(index, 1);
            assert_eq!(weight, -0.5);
        }
        _ => panic!("expected InvalidWeight"),
    }
}

#[test]
fn nan_weight_is_rejected() {
    let x = Array1::from(vec![0, 1]);
    let w = Array1::from(vec![1.0, f64::NAN]);
    assert!(matches!(
        WeightedEntropy::new(x, &w),
        Err(Error::InvalidWeight { index: 1, .. })
    ));
}

#[test]
fn length_mismatch_wins_over_weight_validity() {
    let x = Array1::from(vec![0, 1]);
    let w = Array1::from(vec![1.0, -1.0, 2.0]);
    assert!(matches!(
        WeightedEntropy::new(x, &w),
        Err(Error::LengthMismatch(2, 3))
    ));
}

#[test]
fn weighted_joint_with_all_ones_matches_unweighted_joint() {
    use mibits::estimators::JointEntropy;
    use mibits::estimators::approaches::DiscreteEntropy;

    let x = Array1::from(generate_random_labels(200, 4, 410));
    let y = Array1::from(generate_random_labels(200, 3, 411));
    let w = Array1::from(vec![1.0; 200]);
    let weighted = WeightedEntropy::joint(&[x.clone(), y.clone()], &w).unwrap();
    let unweighted = DiscreteEntropy::joint_entropy(&[x, y], ());
    assert_abs_diff_eq!(weighted, unweighted, epsilon = 1e-12);
}

#[test]
fn weighted_mi_with_all_ones_matches_unweighted() {
    let x = Array1::from(generate_random_labels(200, 4, 500));
    let y = Array1::from(generate_random_labels(200, 4, 501));
    let w = Array1::from(vec![1.0; 200]);
    let weighted = MutualInformation::new_weighted(&[x.clone(), y.clone()], &w)
        .unwrap()
        .global_value();
    let unweighted = MutualInformation::new_discrete(&[x, y]).global_value();
    assert_abs_diff_eq!(weighted, unweighted, epsilon = 1e-12);
}

#[test]
fn weighted_cmi_with_all_ones_matches_unweighted() {
    let x = Array1::from(generate_random_labels(200, 3, 502));
    let y = Array1::from(generate_random_labels(200, 3, 503));
    let z = Array1::from(generate_random_labels(200, 2, 504));
    let w = Array1::from(vec![1.0; 200]);
    let weighted = MutualInformation::new_cmi_weighted(&[x.clone(), y.clone()], &z, &w)
        .unwrap()
        .global_value();
    let unweighted = MutualInformation::new_cmi_discrete(&[x, y], &z).global_value();
    assert_abs_diff_eq!(weighted, unweighted, epsilon = 1e-12);
}

#[test]
fn weighted_mi_replication_equivalence() {
    let x = Array1::from(vec![0, 0, 1, 1]);
    let y = Array1::from(vec![0, 1, 0, 1]);
    let w = Array1::from(vec![3.0, 1.0, 1.0, 1.0]);
    let weighted = MutualInformation::new_weighted(&[x, y], &w)
        .unwrap()
        .global_value();

    // Same data with the first sample written out three times.
    let xr = Array1::from(vec![0, 0, 0, 0, 1, 1]);
    let yr = Array1::from(vec![0, 0, 0, 1, 0, 1]);
    let replicated = MutualInformation::new_discrete(&[xr, yr]).global_value();
    assert_abs_diff_eq!(weighted, replicated, epsilon = 1e-12);
}

#[test]
fn weighted_mi_rejects_misaligned_weights() {
    let x = Array1::from(vec![0, 1, 0]);
    let y = Array1::from(vec![0, 1, 1]);
    let w = Array1::from(vec![1.0, 1.0]);
    assert!(matches!(
        MutualInformation::new_weighted(&[x, y], &w),
        Err(Error::LengthMismatch(3, 2))
    ));
}

#[test]
fn weighted_estimators_decline_locals() {
    let est = WeightedEntropy::new(Array1::from(vec![0, 1]), &Array1::from(vec![1.0, 2.0]))
        .unwrap();
    assert!(!est.supports_local());
    assert!(est.local_values_opt().is_err());
}
