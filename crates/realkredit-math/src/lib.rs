//! # Realkredit Math
//!
//! Numerical kernel for the Realkredit annuity loan analytics library.
//!
//! This crate provides:
//!
//! - **Root-finding**: Dense polynomial root-finding via the
//!   companion-matrix eigenvalue method
//!
//! ## Design Philosophy
//!
//! - **All Roots, Then Filter**: the kernel returns the complete root set;
//!   domain-level uniqueness checks are explicit post-filters in the caller
//! - **Numerical Stability**: careful handling of degenerate inputs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod roots;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::roots::{polynomial_roots, real_roots, DEFAULT_IMAG_TOLERANCE};
}

pub use error::{MathError, MathResult};
