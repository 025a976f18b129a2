//! Convenience surface computing each measure in one call.
//!
//! These free functions cover the common case of wanting a number rather
//! than an estimator value. Inputs are plain slices of dense integer labels
//! (see [`relabel_dense`] for preparing other label types); sample alignment
//! and weight validity are checked here at the call boundary, lengths before
//! weight values. Every measure of an empty input is zero, never an error.

use std::collections::HashMap;
use std::hash::Hash;

use crate::errors::{Error, Result};
use crate::estimators::approaches::discrete::weighted::check_weights;
use crate::estimators::approaches::{
    DiscreteConditionalEntropy, DiscreteEntropy, RenyiEntropy, WeightedEntropy,
};
use crate::estimators::entropy::Entropy;
use crate::estimators::mutual_information::MutualInformation;
use crate::estimators::{GlobalValue, JointEntropy};
use ndarray::Array1;

fn to_array(x: &[i32]) -> Array1<i32> {
    Array1::from(x.to_vec())
}

fn check_lengths(a: usize, b: usize) -> Result<()> {
    if a != b {
        return Err(Error::LengthMismatch(a, b));
    }
    Ok(())
}

/// Shannon entropy H(X) = -Σ p(x) log2 p(x) in bits.
///
/// Probabilities are the plug-in estimates n_x / N over the observed states.
pub fn hx(x: &[i32]) -> f64 {
    Entropy::new_discrete(to_array(x)).global_value()
}

/// Joint Shannon entropy H(X, Y) in bits.
pub fn hxy(x: &[i32], y: &[i32]) -> Result<f64> {
    check_lengths(x.len(), y.len())?;
    Ok(DiscreteEntropy::joint_entropy(
        &[to_array(x), to_array(y)],
        (),
    ))
}

/// Conditional Shannon entropy H(X | Y) = H(X, Y) - H(Y) in bits.
///
/// The difference of the two estimates is reported raw, so a result a
/// rounding margin below zero is possible when X is determined by Y.
pub fn hxcondy(x: &[i32], y: &[i32]) -> Result<f64> {
    check_lengths(x.len(), y.len())?;
    let est = DiscreteConditionalEntropy::new(&to_array(x), &to_array(y), DiscreteEntropy::new);
    Ok(est.global_value())
}

/// Mutual information I(X; Y) = H(X) + H(Y) - H(X, Y) in bits.
pub fn mi(x: &[i32], y: &[i32]) -> Result<f64> {
    check_lengths(x.len(), y.len())?;
    Ok(MutualInformation::new_discrete(&[to_array(x), to_array(y)]).global_value())
}

/// Conditional mutual information I(X; Y | Z) in bits.
pub fn cmi(x: &[i32], y: &[i32], z: &[i32]) -> Result<f64> {
    check_lengths(x.len(), y.len())?;
    check_lengths(x.len(), z.len())?;
    let est = MutualInformation::new_cmi_discrete(&[to_array(x), to_array(y)], &to_array(z));
    Ok(est.global_value())
}

/// Renyi entropy H_a(X) of order `alpha` in bits.
pub fn renyi_entropy(alpha: f64, x: &[i32]) -> Result<f64> {
    Ok(Entropy::new_renyi(to_array(x), alpha)?.global_value())
}

/// Joint Renyi entropy H_a(X, Y) of order `alpha` in bits.
pub fn renyi_joint_entropy(alpha: f64, x: &[i32], y: &[i32]) -> Result<f64> {
    check_lengths(x.len(), y.len())?;
    RenyiEntropy::joint(&[to_array(x), to_array(y)], alpha)
}

/// Renyi mutual information I_a(X; Y) of order `alpha` in bits.
///
/// Computed as the Renyi alpha-divergence between the joint distribution and
/// the product of its marginals.
pub fn renyi_mi(alpha: f64, x: &[i32], y: &[i32]) -> Result<f64> {
    Ok(MutualInformation::new_renyi(to_array(x), to_array(y), alpha)?.global_value())
}

/// Weighted Shannon entropy in bits, with weights as sample multiplicities.
pub fn whx(x: &[i32], w: &[f64]) -> Result<f64> {
    Ok(Entropy::new_weighted(to_array(x), &Array1::from(w.to_vec()))?.global_value())
}

/// Weighted joint Shannon entropy in bits.
pub fn whxy(x: &[i32], y: &[i32], w: &[f64]) -> Result<f64> {
    check_lengths(x.len(), y.len())?;
    WeightedEntropy::joint(&[to_array(x), to_array(y)], &Array1::from(w.to_vec()))
}

/// Weighted conditional Shannon entropy H_w(X | Y) in bits.
pub fn whxcondy(x: &[i32], y: &[i32], w: &[f64]) -> Result<f64> {
    check_lengths(x.len(), y.len())?;
    check_lengths(x.len(), w.len())?;
    let weights = Array1::from(w.to_vec());
    check_weights(&weights)?;
    let est = DiscreteConditionalEntropy::new(&to_array(x), &to_array(y), |s| {
        WeightedEntropy::from_checked(s, &weights)
    });
    Ok(est.global_value())
}

/// Weighted mutual information in bits.
pub fn wmi(x: &[i32], y: &[i32], w: &[f64]) -> Result<f64> {
    check_lengths(x.len(), y.len())?;
    let est = MutualInformation::new_weighted(&[to_array(x), to_array(y)], &Array1::from(w.to_vec()))?;
    Ok(est.global_value())
}

/// Weighted conditional mutual information in bits.
pub fn wcmi(x: &[i32], y: &[i32], z: &[i32], w: &[f64]) -> Result<f64> {
    check_lengths(x.len(), y.len())?;
    check_lengths(x.len(), z.len())?;
    let est = MutualInformation::new_cmi_weighted(
        &[to_array(x), to_array(y)],
        &to_array(z),
        &Array1::from(w.to_vec()),
    )?;
    Ok(est.global_value())
}

/// Relabel arbitrary hashable values into dense integer labels.
///
/// Labels are assigned in first-occurrence order starting at 0, so the result
/// is deterministic for a given input and ready for the measure functions.
pub fn relabel_dense<T: Hash + Eq>(values: &[T]) -> Vec<i32> {
    let mut ids: HashMap<&T, i32> = HashMap::new();
    let mut next_id: i32 = 0;
    let mut out = Vec::with_capacity(values.len());
    for v in values.iter() {
        let id = *ids.entry(v).or_insert_with(|| {
            let id = next_id;
            next_id = next_id
                .checked_add(1)
                .expect("too many distinct values to fit into i32");
            id
        });
        out.push(id);
    }
    out
}
