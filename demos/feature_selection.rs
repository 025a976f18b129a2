//! Feature ranking with mutual information and conditional mutual information.
//!
//! Builds a synthetic classification dataset of discrete features, ranks the
//! features by MI with the target, then runs one greedy selection step where
//! candidates are re-scored by CMI given the feature already picked. The
//! redundant feature scores high on the marginal ranking and collapses in the
//! conditional one.
//!
//! Run: cargo run --example feature_selection

use mibits::{cmi, hx, mi, relabel_dense};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Copy a binary series, flipping each sample with probability `p`.
fn noisy_copy(source: &[i32], p: f64, rng: &mut StdRng) -> Vec<i32> {
    source
        .iter()
        .map(|&v| if rng.gen_bool(p) { 1 - v } else { v })
        .collect()
}

fn main() {
    let n = 600;
    let mut rng = StdRng::seed_from_u64(7);

    // Binary target, balanced.
    let target: Vec<i32> = (0..n).map(|_| rng.gen_range(0..2)).collect();

    // Feature 0: target observed through a 10% noise channel.
    let f0 = noisy_copy(&target, 0.10, &mut rng);
    // Feature 1: the same, through a 35% channel.
    let f1 = noisy_copy(&target, 0.35, &mut rng);
    // Feature 2: a slightly degraded copy of feature 0. Informative about the
    // target on its own, but nearly everything it knows is already in f0.
    let f2 = noisy_copy(&f0, 0.05, &mut rng);
    // Feature 3: categorical readings with no relation to the target,
    // arriving as strings and relabeled to dense integers first.
    let categories = ["low", "mid", "high"];
    let raw: Vec<&str> = (0..n).map(|_| categories[rng.gen_range(0..3)]).collect();
    let f3 = relabel_dense(&raw);
    // Feature 4: independent coin flips.
    let f4: Vec<i32> = (0..n).map(|_| rng.gen_range(0..2)).collect();

    let features: Vec<(&str, Vec<i32>)> = vec![
        ("f0 (10% noise)", f0),
        ("f1 (35% noise)", f1),
        ("f2 (copy of f0)", f2),
        ("f3 (categorical noise)", f3),
        ("f4 (coin flips)", f4),
    ];

    println!("Feature ranking for a binary target, n = {n} samples");
    println!("H(target) = {:.4} bits\n", hx(&target));

    // -- Marginal ranking: MI with the target --------------------------------
    let mut ranked: Vec<(usize, f64)> = features
        .iter()
        .enumerate()
        .map(|(i, (_, f))| (i, mi(f, &target).unwrap()))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    println!("{:>4}  {:>9}  feature", "rank", "MI");
    for (rank, &(i, score)) in ranked.iter().enumerate() {
        println!("{:>4}  {:>9.4}  {}", rank + 1, score, features[i].0);
    }

    // -- One greedy step: condition on the best feature ----------------------
    let (best, best_mi) = ranked[0];
    println!(
        "\nPicked {} (MI = {best_mi:.4}); re-scoring the rest given it:",
        features[best].0
    );

    let mut conditional: Vec<(usize, f64)> = features
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != best)
        .map(|(i, (_, f))| (i, cmi(f, &target, &features[best].1).unwrap()))
        .collect();
    conditional.sort_by(|a, b| b.1.total_cmp(&a.1));

    // The copy of f0 adds almost nothing once its twin is in the set, while
    // the independently noisy f1 keeps most of its marginal value.
    println!("{:>4}  {:>9}  {:>9}  feature", "rank", "CMI", "was MI");
    for (rank, &(i, score)) in conditional.iter().enumerate() {
        let marginal = ranked.iter().find(|&&(j, _)| j == i).unwrap().1;
        println!(
            "{:>4}  {:>9.4}  {:>9.4}  {}",
            rank + 1,
            score,
            marginal,
            features[i].0
        );
    }
}
