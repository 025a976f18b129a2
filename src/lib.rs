// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # mibits
//!
//! Information-theoretic measures for discrete data: entropy, mutual
//! information, and conditional mutual information in bits, with Renyi-order
//! and sample-weighted generalizations. Built as a computational primitive
//! for feature selection and dependency analysis over already-discretized
//! label sequences.
//!
//! ## Quick Start
//!
//! ```rust
//! use mibits::{hx, mi};
//!
//! let x = vec![0, 0, 1, 1];
//! let y = vec![0, 1, 0, 1];
//!
//! // A fair binary variable carries exactly one bit.
//! assert_eq!(hx(&x), 1.0);
//!
//! // X and Y are independent here, so they share no information.
//! assert_eq!(mi(&x, &y).unwrap(), 0.0);
//! ```
//!
//! Estimators can also be constructed directly when local values or reuse
//! across measures are needed:
//!
//! ```rust
//! use mibits::estimators::entropy::Entropy;
//! use mibits::estimators::traits::GlobalValue;
//! use ndarray::array;
//!
//! let data = array![1, 2, 1, 3, 2, 1];
//! let entropy_bits = Entropy::new_discrete(data).global_value();
//! ```
//!
//! ## Features
//!
//! | Measure | Shannon | Renyi | Weighted |
//! |---------|---------|-------|----------|
//! | Entropy | ✅ | ✅ | ✅ |
//! | Joint entropy | ✅ | ✅ | ✅ |
//! | Conditional entropy | ✅ | ❌ | ✅ |
//! | Mutual Information | ✅ | ✅ | ✅ |
//! | Conditional Mutual Information | ✅ | ❌ | ✅ |
//!
//! ✅ = Implemented | ❌ = Planned
//!
//! ## Architecture
//!
//! The library follows a three-layer architecture:
//!
//! 1. **Measure Functions**: one-call helpers over plain slices ([`hx`],
//!    [`mi`], [`wcmi`], ...) that validate inputs at the boundary
//! 2. **Public API Layer**: factory types (`Entropy`, `MutualInformation`)
//!    creating configured estimators
//! 3. **Estimation Core**: estimator structs over shared traits, frequency
//!    tables, and compact joint-state reduction
//!
//! All Shannon-family measures are plug-in (maximum likelihood) estimates
//! with no smoothing or bias correction; weighted variants treat weights as
//! fractional sample multiplicities and reduce to the unweighted measures
//! when every weight is one.

pub mod errors;
pub mod estimators;
pub mod measures;

pub use errors::{Error, Result};
pub use measures::{
    cmi, hx, hxcondy, hxy, mi, relabel_dense, renyi_entropy, renyi_joint_entropy, renyi_mi, wcmi,
    whx, whxcondy, whxy, wmi,
};
