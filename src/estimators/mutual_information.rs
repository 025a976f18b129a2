use crate::errors::{Error, Result};
use crate::estimators::approaches::discrete::weighted::check_weights;
use crate::estimators::approaches::{
    DiscreteConditionalMutualInformation, DiscreteEntropy, DiscreteMutualInformation,
    RenyiMutualInformation, WeightedEntropy,
};
use ndarray::Array1;

/// Mutual information estimation methods for discrete data
///
/// This struct provides static methods for creating mutual information and
/// conditional mutual information estimators. The discrete constructors are
/// infallible and expect sample-aligned series; the Renyi and weighted
/// constructors validate their extra parameters and return a `Result`.
pub struct MutualInformation;

impl MutualInformation {
    /// Creates a new discrete mutual information estimator
    ///
    /// # Arguments
    ///
    /// * `series` - Two or more sample-aligned arrays of integer data
    ///
    /// # Returns
    ///
    /// An estimator of I(X1; ...; Xn) wrapping the discrete entropy estimator
    pub fn new_discrete(series: &[Array1<i32>]) -> DiscreteMutualInformation<DiscreteEntropy> {
        DiscreteMutualInformation::new(series, DiscreteEntropy::new)
    }

    /// Creates a new discrete conditional mutual information estimator
    ///
    /// # Arguments
    ///
    /// * `series` - Two or more sample-aligned arrays of integer data
    /// * `cond` - Conditioning series, aligned with `series`
    ///
    /// # Returns
    ///
    /// An estimator of I(X1; ...; Xn | Z) wrapping the discrete entropy
    /// estimator
    pub fn new_cmi_discrete(
        series: &[Array1<i32>],
        cond: &Array1<i32>,
    ) -> DiscreteConditionalMutualInformation<DiscreteEntropy> {
        DiscreteConditionalMutualInformation::new(series, cond, DiscreteEntropy::new)
    }

    /// Creates a new Renyi mutual information estimator of order `alpha`
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Sample-aligned arrays of integer data
    /// * `alpha` - Renyi order; must be positive and not equal to 1
    ///
    /// # Returns
    ///
    /// A Renyi mutual information estimator, or an error for misaligned
    /// series or an invalid order
    pub fn new_renyi(x: Array1<i32>, y: Array1<i32>, alpha: f64) -> Result<RenyiMutualInformation> {
        RenyiMutualInformation::new(x, y, alpha)
    }

    /// Creates a new weighted mutual information estimator
    ///
    /// All series share the one weight sequence, so aligning each series with
    /// the weights also aligns the series with each other.
    ///
    /// # Arguments
    ///
    /// * `series` - Two or more sample-aligned arrays of integer data
    /// * `weights` - Per-sample weights, index-aligned with every series
    ///
    /// # Returns
    ///
    /// An estimator of I(X1; ...; Xn) wrapping the weighted entropy
    /// estimator, or an error if the weights are misaligned, negative, or NaN
    pub fn new_weighted(
        series: &[Array1<i32>],
        weights: &Array1<f64>,
    ) -> Result<DiscreteMutualInformation<WeightedEntropy>> {
        check_aligned(series, weights)?;
        check_weights(weights)?;
        Ok(DiscreteMutualInformation::new(series, |s| {
            WeightedEntropy::from_checked(s, weights)
        }))
    }

    /// Creates a new weighted conditional mutual information estimator
    ///
    /// # Arguments
    ///
    /// * `series` - Two or more sample-aligned arrays of integer data
    /// * `cond` - Conditioning series, aligned with `series`
    /// * `weights` - Per-sample weights, index-aligned with every series
    ///
    /// # Returns
    ///
    /// An estimator of I(X1; ...; Xn | Z) wrapping the weighted entropy
    /// estimator, or an error if the weights are misaligned, negative, or NaN
    pub fn new_cmi_weighted(
        series: &[Array1<i32>],
        cond: &Array1<i32>,
        weights: &Array1<f64>,
    ) -> Result<DiscreteConditionalMutualInformation<WeightedEntropy>> {
        check_aligned(series, weights)?;
        if cond.len() != weights.len() {
            return Err(Error::LengthMismatch(cond.len(), weights.len()));
        }
        check_weights(weights)?;
        Ok(DiscreteConditionalMutualInformation::new(series, cond, |s| {
            WeightedEntropy::from_checked(s, weights)
        }))
    }
}

// Length checks come before weight-value checks across the whole surface.
fn check_aligned(series: &[Array1<i32>], weights: &Array1<f64>) -> Result<()> {
    for s in series.iter() {
        if s.len() != weights.len() {
            return Err(Error::LengthMismatch(s.len(), weights.len()));
        }
    }
    Ok(())
}
