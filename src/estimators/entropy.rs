use crate::errors::Result;
use crate::estimators::approaches::{DiscreteEntropy, RenyiEntropy, WeightedEntropy};
pub use crate::estimators::traits::LocalValues;
use ndarray::Array1;

/// Entropy estimation methods for discrete data
///
/// This struct provides static methods for creating entropy estimators
/// for the different estimation approaches.
pub struct Entropy;

impl Entropy {
    /// Creates a new discrete entropy estimator for 1D integer data
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional array of integer data
    ///
    /// # Returns
    ///
    /// A discrete entropy estimator configured for the provided data
    pub fn new_discrete(data: Array1<i32>) -> DiscreteEntropy {
        DiscreteEntropy::new(data)
    }

    /// Creates a new Renyi entropy estimator of order `alpha`
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional array of integer data
    /// * `alpha` - Renyi order; must be positive and not equal to 1
    ///
    /// # Returns
    ///
    /// A Renyi entropy estimator, or `Error::InvalidOrder` for an order
    /// outside the valid domain
    pub fn new_renyi(data: Array1<i32>, alpha: f64) -> Result<RenyiEntropy> {
        RenyiEntropy::new(data, alpha)
    }

    /// Creates a new weighted entropy estimator for 1D integer data
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional array of integer data
    /// * `weights` - Per-sample weights, index-aligned with `data`
    ///
    /// # Returns
    ///
    /// A weighted entropy estimator, or an error if the weights are
    /// misaligned, negative, or NaN
    pub fn new_weighted(data: Array1<i32>, weights: &Array1<f64>) -> Result<WeightedEntropy> {
        WeightedEntropy::new(data, weights)
    }
}
