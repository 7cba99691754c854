//! # Realkredit Loans
//!
//! Annuity amortization, servicing fees, and yield analytics for Danish
//! mortgage-bond-backed (realkredit) loans.
//!
//! This crate provides:
//!
//! - **Amortization**: Level-payment schedule generation from validated
//!   loan terms
//! - **Fees**: The proportional servicing-fee (bidrag) transform and
//!   after-tax views
//! - **Yield**: Internal rate of return via dense polynomial
//!   root-finding with an explicit uniqueness check
//! - **Loan model**: [`loan::MortgageLoan`], composing the above and
//!   exposing cash flows, totals, and yields
//! - **Batch**: Parallel evaluation of independent loans (optional
//!   `parallel` feature)
//!
//! ## Example
//!
//! ```rust
//! use realkredit_core::types::LoanTerms;
//! use realkredit_loans::loan::MortgageLoan;
//!
//! // Borrow 1,000,000 at 4% over 30 years, quarterly, 0.45% bidrag,
//! // bond priced at 98.5
//! let terms = LoanTerms::new(1_000_000.0, 0.04, 30, 4).unwrap();
//! let loan = MortgageLoan::with_price(terms, 0.0045, 98.5).unwrap();
//!
//! let ytm = loan.yield_to_maturity().unwrap();
//! assert!(ytm > terms.periodic_rate()); // below par + fee
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
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod amortization;
pub mod batch;
pub mod error;
pub mod fees;
pub mod irr;
pub mod loan;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::amortization::{build_schedule, periodic_payment, principal_portion};
    pub use crate::batch::{summaries, LoanSummary};
    pub use crate::error::{LoanError, LoanResult};
    pub use crate::fees::{after_tax, apply_servicing_fee};
    pub use crate::irr::{effective_annual, internal_rate, nominal_annual, IrrSolver};
    pub use crate::loan::MortgageLoan;
}

pub use error::{LoanError, LoanResult};
pub use loan::MortgageLoan;
