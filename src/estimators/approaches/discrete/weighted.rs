use std::collections::HashMap;

use crate::errors::{Error, Result};
use crate::estimators::approaches::discrete::discrete_utils::reduce_joint_space_compact;
use crate::estimators::traits::{GlobalValue, OptionalLocalValues};
use ndarray::Array1;

/// Validate per-sample weights: each must be finite and non-negative.
/// A negative or NaN weight is a contract violation, never silently clamped.
pub(crate) fn check_weights(weights: &Array1<f64>) -> Result<()> {
    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { index, weight });
        }
    }
    Ok(())
}

/// Shared dataset for the weighted estimators.
///
/// The frequency table accumulates weight instead of unit counts, so a state's
/// probability is the weight it gathered divided by the total weight. States
/// whose accumulated weight is zero carry no probability and are left out of
/// the distribution, mirroring how unobserved states are never materialized.
pub struct WeightedDataset {
    /// Original integer data (1D)
    pub data: Array1<i32>,
    /// Accumulated weight per unique symbol
    pub weight_sums: HashMap<i32, f64>,
    /// Sum of all sample weights
    pub total_weight: f64,
    /// Total number of observations
    pub n: usize,
    /// Number of unique symbols observed
    pub k: usize,
    /// Probability dictionary p(x) for each symbol with positive weight
    pub dist: HashMap<i32, f64>,
}

impl WeightedDataset {
    /// Build a WeightedDataset from a series and per-sample weights.
    /// Callers must have checked alignment and weight validity.
    pub fn from_data(data: Array1<i32>, weights: &Array1<f64>) -> Self {
        debug_assert_eq!(data.len(), weights.len());
        let n = data.len();
        let mut weight_sums: HashMap<i32, f64> = HashMap::new();
        let mut total_weight = 0.0_f64;
        for (&v, &w) in data.iter().zip(weights.iter()) {
            *weight_sums.entry(v).or_insert(0.0) += w;
            total_weight += w;
        }
        let k = weight_sums.len();
        let mut dist = HashMap::with_capacity(k);
        if total_weight > 0.0 {
            for (&v, &wsum) in weight_sums.iter() {
                if wsum > 0.0 {
                    dist.insert(v, wsum / total_weight);
                }
            }
        }
        Self {
            data,
            weight_sums,
            total_weight,
            n,
            k,
            dist,
        }
    }
}

/// Weighted Shannon entropy estimator, reported in bits.
///
/// Each sample carries a non-negative weight acting as a fractional
/// multiplicity: the probability of a state is the weight it accumulated
/// divided by the total weight, and H = -Σ P(x) log2 P(x) over the states
/// with positive weight. With all weights equal to one this reproduces the
/// unweighted estimator, and integer weights behave exactly like replicating
/// the corresponding samples. A zero total weight leaves the distribution
/// empty and the entropy zero.
pub struct WeightedEntropy {
    dataset: WeightedDataset,
}

impl WeightedEntropy {
    pub fn new(data: Array1<i32>, weights: &Array1<f64>) -> Result<Self> {
        if data.len() != weights.len() {
            return Err(Error::LengthMismatch(data.len(), weights.len()));
        }
        check_weights(weights)?;
        Ok(Self::from_checked(data, weights))
    }

    /// Build from inputs the caller has already validated.
    pub(crate) fn from_checked(data: Array1<i32>, weights: &Array1<f64>) -> Self {
        Self {
            dataset: WeightedDataset::from_data(data, weights),
        }
    }

    /// Joint weighted entropy of multiple aligned series sharing one weight
    /// sequence, via compact joint codes.
    pub fn joint(series: &[Array1<i32>], weights: &Array1<f64>) -> Result<f64> {
        for s in series.iter() {
            if s.len() != weights.len() {
                return Err(Error::LengthMismatch(s.len(), weights.len()));
            }
        }
        check_weights(weights)?;
        if series.is_empty() {
            return Ok(0.0);
        }
        let joint_codes = reduce_joint_space_compact(series);
        Ok(Self::from_checked(joint_codes, weights).global_value())
    }
}

impl GlobalValue for WeightedEntropy {
    fn global_value(&self) -> f64 {
        let mut h = 0.0_f64;
        for &p in self.dataset.dist.values() {
            h -= p * p.log2();
        }
        h
    }
}

impl OptionalLocalValues for WeightedEntropy {
    fn supports_local(&self) -> bool {
        false
    }
    fn local_values_opt(&self) -> std::result::Result<Array1<f64>, &'static str> {
        Err("Weighted entropy has no per-sample decomposition.")
    }
}
