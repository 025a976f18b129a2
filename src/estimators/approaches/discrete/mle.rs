use crate::estimators::approaches::discrete::discrete_utils::{
    DiscreteDataset, reduce_joint_space_compact,
};
use crate::estimators::traits::{GlobalValue, JointEntropy, LocalValues, OptionalLocalValues};
use ndarray::Array1;

/// Shannon entropy estimator for discrete data, reported in bits.
///
/// Computes H(X) = -Σ p(x) log2 p(x) from the empirical probabilities
/// p(x) = n_x / N. Only states observed in the data enter the sum, and an
/// empty series has entropy zero. Local values are supported, where each
/// sample contributes -log2 p(x).
///
/// Joint entropy over multiple aligned series is supported by reducing the
/// tuples to a single compact code space before estimation, so H(X, Y) is
/// the plain entropy of the pair series.
pub struct DiscreteEntropy {
    dataset: DiscreteDataset,
}

impl DiscreteEntropy {
    pub fn new(data: Array1<i32>) -> Self {
        let dataset = DiscreteDataset::from_data(data);
        Self { dataset }
    }
}

impl GlobalValue for DiscreteEntropy {
    /// Calculate global entropy for the data set.
    /// Separate implementation, not inferred from local_values.
    fn global_value(&self) -> f64 {
        let n_f = self.dataset.n as f64;
        let mut h = 0.0_f64;
        for &cnt in self.dataset.counts.values() {
            let p = cnt as f64 / n_f;
            h -= p * p.log2();
        }
        h
    }
}

impl LocalValues for DiscreteEntropy {
    /// Calculate local entropy values for each element in the dataset.
    fn local_values(&self) -> Array1<f64> {
        // Map each value to its probability: local = -log2 p(x)
        let p_local = self.dataset.map_probs();
        -p_local.mapv(f64::log2)
    }
}

impl JointEntropy for DiscreteEntropy {
    type Source = Array1<i32>;
    type Params = ();

    fn joint_entropy(series: &[Self::Source], _params: Self::Params) -> f64 {
        if series.is_empty() {
            return 0.0;
        }
        let joint_codes = reduce_joint_space_compact(series);
        DiscreteEntropy::new(joint_codes).global_value()
    }
}

impl OptionalLocalValues for DiscreteEntropy {
    fn supports_local(&self) -> bool {
        true
    }
    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}
