use std::collections::HashMap;

use crate::errors::{Error, Result};
use crate::estimators::approaches::discrete::discrete_utils::{
    DiscreteDataset, count_joint_pairs, reduce_joint_space_compact,
};
use crate::estimators::traits::{GlobalValue, MutualInformationEstimator, OptionalLocalValues};
use ndarray::Array1;

/// Validate a Renyi order: alpha must be positive and not equal to 1.
///
/// The Shannon case alpha = 1 is a removable singularity of the Renyi formula
/// and is served by the dedicated Shannon estimator instead, so it is rejected
/// here rather than special-cased.
pub(crate) fn check_order(alpha: f64) -> Result<()> {
    if !(alpha > 0.0) || alpha == 1.0 {
        return Err(Error::InvalidOrder(alpha));
    }
    Ok(())
}

/// Sum of p^alpha over the observed states of a frequency table.
fn renyi_power_sum<'a, I>(counts: I, n: usize, alpha: f64) -> f64
where
    I: Iterator<Item = &'a usize>,
{
    let n_f = n as f64;
    counts.map(|&cnt| (cnt as f64 / n_f).powf(alpha)).sum()
}

/// Renyi entropy in bits from a power sum, with the empty-data guard.
fn renyi_entropy_bits(power_sum: f64, alpha: f64) -> f64 {
    if power_sum <= 0.0 {
        return 0.0;
    }
    power_sum.log2() / (1.0 - alpha)
}

/// Renyi entropy estimator for discrete data, reported in bits.
///
/// Computes H_a(X) = log2(Σ p(x)^a) / (1 - a) over the observed states for
/// order a > 0, a != 1. As a -> 1 this approaches the Shannon entropy; a = 2
/// is the collision entropy. An empty series has entropy zero for every order.
pub struct RenyiEntropy {
    dataset: DiscreteDataset,
    alpha: f64,
}

impl RenyiEntropy {
    pub fn new(data: Array1<i32>, alpha: f64) -> Result<Self> {
        check_order(alpha)?;
        let dataset = DiscreteDataset::from_data(data);
        Ok(Self { dataset, alpha })
    }

    /// Joint Renyi entropy of multiple aligned series, via compact joint codes.
    pub fn joint(series: &[Array1<i32>], alpha: f64) -> Result<f64> {
        check_order(alpha)?;
        if series.is_empty() {
            return Ok(0.0);
        }
        let joint_codes = reduce_joint_space_compact(series);
        Ok(Self {
            dataset: DiscreteDataset::from_data(joint_codes),
            alpha,
        }
        .global_value())
    }
}

impl GlobalValue for RenyiEntropy {
    fn global_value(&self) -> f64 {
        let sum = renyi_power_sum(self.dataset.counts.values(), self.dataset.n, self.alpha);
        renyi_entropy_bits(sum, self.alpha)
    }
}

impl OptionalLocalValues for RenyiEntropy {
    fn supports_local(&self) -> bool {
        false
    }
    fn local_values_opt(&self) -> std::result::Result<Array1<f64>, &'static str> {
        Err("Renyi entropy has no per-sample decomposition.")
    }
}

/// Renyi mutual information estimator for a pair of discrete series.
///
/// The primary value is the Renyi alpha-divergence between the empirical joint
/// distribution and the product of its marginals,
///
/// I_a(X; Y) = log2(Σ p(x,y)^a (p(x) p(y))^(1-a)) / (a - 1),
///
/// summed over observed pairs. This recovers Shannon mutual information as
/// a -> 1 and is zero exactly when the empirical joint factorizes. The
/// entropy-difference form H_a(X) + H_a(Y) - H_a(X,Y) is also offered; the two
/// do not coincide for a != 1.
pub struct RenyiMutualInformation {
    first: DiscreteDataset,
    second: DiscreteDataset,
    pairs: HashMap<(i32, i32), usize>,
    alpha: f64,
}

impl RenyiMutualInformation {
    pub fn new(x: Array1<i32>, y: Array1<i32>, alpha: f64) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::LengthMismatch(x.len(), y.len()));
        }
        check_order(alpha)?;
        let pairs = count_joint_pairs(&x, &y);
        Ok(Self {
            first: DiscreteDataset::from_data(x),
            second: DiscreteDataset::from_data(y),
            pairs,
            alpha,
        })
    }

    /// Entropy-difference form H_a(X) + H_a(Y) - H_a(X,Y).
    pub fn joint_difference(&self) -> f64 {
        let n = self.first.n;
        let h_x = renyi_entropy_bits(
            renyi_power_sum(self.first.counts.values(), n, self.alpha),
            self.alpha,
        );
        let h_y = renyi_entropy_bits(
            renyi_power_sum(self.second.counts.values(), n, self.alpha),
            self.alpha,
        );
        let h_xy = renyi_entropy_bits(
            renyi_power_sum(self.pairs.values(), n, self.alpha),
            self.alpha,
        );
        h_x + h_y - h_xy
    }
}

impl GlobalValue for RenyiMutualInformation {
    fn global_value(&self) -> f64 {
        let n_f = self.first.n as f64;
        let mut sum = 0.0_f64;
        for (&(a, b), &cnt) in self.pairs.iter() {
            let p_xy = cnt as f64 / n_f;
            // Marginals are positive wherever the joint is observed.
            let p_marg = self.first.dist[&a] * self.second.dist[&b];
            sum += p_xy.powf(self.alpha) * p_marg.powf(1.0 - self.alpha);
        }
        if sum <= 0.0 {
            return 0.0;
        }
        sum.log2() / (self.alpha - 1.0)
    }
}

impl OptionalLocalValues for RenyiMutualInformation {
    fn supports_local(&self) -> bool {
        false
    }
    fn local_values_opt(&self) -> std::result::Result<Array1<f64>, &'static str> {
        Err("Renyi mutual information has no per-sample decomposition.")
    }
}

impl MutualInformationEstimator for RenyiMutualInformation {}
