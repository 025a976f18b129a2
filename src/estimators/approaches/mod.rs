pub mod discrete;

// Unified re-exports for common estimators so tests and users can import
// mibits::estimators::approaches::* ergonomically.
pub use discrete::mle::DiscreteEntropy;
pub use discrete::renyi::{RenyiEntropy, RenyiMutualInformation};
pub use discrete::weighted::WeightedEntropy;

pub use discrete::{
    DiscreteConditionalEntropy, DiscreteConditionalMutualInformation, DiscreteMutualInformation,
};
