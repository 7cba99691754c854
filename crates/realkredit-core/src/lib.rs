//! # Realkredit Core
//!
//! Core types and abstractions for the Realkredit annuity loan analytics
//! library.
//!
//! This crate provides the foundational building blocks used throughout
//! Realkredit:
//!
//! - **Types**: Domain-specific types like [`types::LoanTerms`],
//!   [`types::Schedule`], and [`types::CashFlowSeries`]
//! - **Errors**: The structured [`CoreError`] type shared by the higher
//!   crates
//!
//! ## Design Philosophy
//!
//! - **Validated Construction**: Terms are range-checked once, at the edge
//! - **Immutable Data**: Schedules are computed once and never mutated;
//!   derived views are new sequences
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use realkredit_core::prelude::*;
//!
//! let terms = LoanTerms::with_frequency(
//!     1_000_000.0,
//!     0.04,
//!     30,
//!     PaymentFrequency::Quarterly,
//! )
//! .unwrap();
//! assert_eq!(terms.total_periods(), 120);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        CashFlowSeries, FeeAdjustedRow, FeeAdjustedSchedule, LoanTerms, PaymentFrequency, Schedule,
        ScheduleRow,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CashFlowSeries, FeeAdjustedSchedule, LoanTerms, Schedule};
