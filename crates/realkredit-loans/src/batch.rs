//! Batch evaluation of independent loans.
//!
//! Every loan is immutable after construction and evaluation touches no
//! shared state, so a batch parallelizes with plain data parallelism and
//! no synchronization. With the `parallel` feature enabled the batch
//! runs on rayon; without it, sequentially.

use serde::{Deserialize, Serialize};

use crate::error::LoanResult;
use crate::irr;
use crate::loan::MortgageLoan;

/// Aggregate figures for one loan in a comparison set.
///
/// Carries the values a reporting or charting layer plots across loans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    /// Comparison label, e.g. `"5.00% 30Y 0.60%"`
    pub label: String,
    /// Sum of all fee-adjusted payments
    pub total_cost: f64,
    /// Sum of interest and servicing fees
    pub total_interest_and_fee: f64,
    /// Periodic yield to maturity
    pub periodic_yield: f64,
    /// Periodic yield compounded over one year
    pub effective_annual_yield: f64,
}

impl LoanSummary {
    /// Evaluates the summary of a single loan.
    ///
    /// # Errors
    ///
    /// Propagates the yield solver's errors.
    pub fn for_loan(loan: &MortgageLoan) -> LoanResult<Self> {
        let periodic = loan.yield_to_maturity()?;
        Ok(Self {
            label: loan.label(),
            total_cost: loan.total_cost(),
            total_interest_and_fee: loan.total_interest_and_fee(),
            periodic_yield: periodic,
            effective_annual_yield: irr::effective_annual(
                periodic,
                loan.terms().payments_per_year(),
            ),
        })
    }
}

/// Evaluates summaries for a batch of loans in parallel.
#[cfg(feature = "parallel")]
#[must_use]
pub fn summaries(loans: &[MortgageLoan]) -> Vec<LoanResult<LoanSummary>> {
    use rayon::prelude::*;

    loans.par_iter().map(LoanSummary::for_loan).collect()
}

/// Evaluates summaries for a batch of loans sequentially.
#[cfg(not(feature = "parallel"))]
#[must_use]
pub fn summaries(loans: &[MortgageLoan]) -> Vec<LoanResult<LoanSummary>> {
    loans.iter().map(LoanSummary::for_loan).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use realkredit_core::types::LoanTerms;

    fn loan(annual_rate: f64, fee_rate: f64) -> MortgageLoan {
        let terms = LoanTerms::new(100_000.0, annual_rate, 30, 4).unwrap();
        MortgageLoan::new(terms, fee_rate).unwrap()
    }

    #[test]
    fn test_summary_fields() {
        let loan = loan(0.05, 0.006);
        let summary = LoanSummary::for_loan(&loan).unwrap();

        assert_eq!(summary.label, "5.00% 30Y 0.60%");
        assert_relative_eq!(summary.total_cost, loan.total_cost());
        assert!(summary.effective_annual_yield > summary.periodic_yield);
    }

    #[test]
    fn test_batch_preserves_order() {
        let loans = vec![loan(0.03, 0.0), loan(0.05, 0.0), loan(0.07, 0.0)];
        let summaries = summaries(&loans);

        assert_eq!(summaries.len(), 3);
        let yields: Vec<f64> = summaries
            .into_iter()
            .map(|s| s.unwrap().periodic_yield)
            .collect();

        // Higher coupon, higher yield; order matches input order
        assert!(yields[0] < yields[1]);
        assert!(yields[1] < yields[2]);
    }

    #[test]
    fn test_summary_serde_roundtrip() {
        let summary = LoanSummary::for_loan(&loan(0.05, 0.006)).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        let back: LoanSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
