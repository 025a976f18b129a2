// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Error types for the estimation surface.
///
/// Construction of an estimator validates its inputs up front; the estimation
/// itself is total. Empty input is not an error anywhere in the crate: every
/// measure of an empty series is defined as zero.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Two series that must be sample-aligned have different lengths.
    #[error("series have different lengths: {0} vs {1}")]
    LengthMismatch(usize, usize),

    /// A sample weight is negative or NaN.
    #[error("invalid weight {weight} at index {index}: weights must be finite and non-negative")]
    InvalidWeight { index: usize, weight: f64 },

    /// A Renyi order outside the valid domain (alpha > 0, alpha != 1).
    #[error("invalid Renyi order {0}: must be positive and not equal to 1")]
    InvalidOrder(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
