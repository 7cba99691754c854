//! Loan terms and payment frequency types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Payment frequency for annuity loans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentFrequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    SemiAnnual,
    /// Quarterly payments (4 per year) - the Danish realkredit convention
    #[default]
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl PaymentFrequency {
    /// Returns the number of payments per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Annual => 1,
            PaymentFrequency::SemiAnnual => 2,
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::Monthly => 12,
        }
    }

    /// Returns the number of months between payments.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        match self {
            PaymentFrequency::Annual => 12,
            PaymentFrequency::SemiAnnual => 6,
            PaymentFrequency::Quarterly => 3,
            PaymentFrequency::Monthly => 1,
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentFrequency::Annual => "Annual",
            PaymentFrequency::SemiAnnual => "Semi-Annual",
            PaymentFrequency::Quarterly => "Quarterly",
            PaymentFrequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

/// Immutable terms of a fixed-rate annuity loan.
///
/// The periodic rate is the nominal annual rate divided by the number of
/// payments per year, and the total number of periods is the maturity in
/// years times the number of payments per year.
///
/// # Example
///
/// ```rust
/// use realkredit_core::types::LoanTerms;
///
/// // 1,000,000 at 4% over 30 years, paid quarterly
/// let terms = LoanTerms::new(1_000_000.0, 0.04, 30, 4).unwrap();
/// assert_eq!(terms.total_periods(), 120);
/// assert!((terms.periodic_rate() - 0.01).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount owed at origination
    principal: f64,
    /// Nominal annual rate as a decimal (0.05 = 5%)
    annual_rate: f64,
    /// Time to maturity in years
    maturity_years: u32,
    /// Number of payments per year
    payments_per_year: u32,
}

impl LoanTerms {
    /// Creates validated loan terms.
    ///
    /// # Errors
    ///
    /// Returns an error if the principal is not positive and finite, the
    /// rate is negative or non-finite, or the maturity or payment count
    /// is zero.
    pub fn new(
        principal: f64,
        annual_rate: f64,
        maturity_years: u32,
        payments_per_year: u32,
    ) -> CoreResult<Self> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(CoreError::InvalidPrincipal { value: principal });
        }
        if !annual_rate.is_finite() || annual_rate < 0.0 {
            return Err(CoreError::InvalidRate { value: annual_rate });
        }
        if maturity_years == 0 {
            return Err(CoreError::invalid_term("maturity must be at least 1 year"));
        }
        if payments_per_year == 0 {
            return Err(CoreError::invalid_term(
                "payments per year must be at least 1",
            ));
        }

        Ok(Self {
            principal,
            annual_rate,
            maturity_years,
            payments_per_year,
        })
    }

    /// Creates loan terms from a standard payment frequency.
    pub fn with_frequency(
        principal: f64,
        annual_rate: f64,
        maturity_years: u32,
        frequency: PaymentFrequency,
    ) -> CoreResult<Self> {
        Self::new(
            principal,
            annual_rate,
            maturity_years,
            frequency.periods_per_year(),
        )
    }

    /// Returns the loan principal.
    #[must_use]
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Returns the nominal annual rate as a decimal.
    #[must_use]
    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    /// Returns the time to maturity in years.
    #[must_use]
    pub fn maturity_years(&self) -> u32 {
        self.maturity_years
    }

    /// Returns the number of payments per year.
    #[must_use]
    pub fn payments_per_year(&self) -> u32 {
        self.payments_per_year
    }

    /// Returns the interest rate per payment period.
    #[must_use]
    pub fn periodic_rate(&self) -> f64 {
        self.annual_rate / f64::from(self.payments_per_year)
    }

    /// Returns the total number of payment periods over the loan's life.
    #[must_use]
    pub fn total_periods(&self) -> u32 {
        self.maturity_years * self.payments_per_year
    }

    /// Returns terms identical to these but with a different principal.
    ///
    /// Used when a market price converts a requested amount into a larger
    /// face value that the schedule must amortize.
    pub fn with_principal(&self, principal: f64) -> CoreResult<Self> {
        Self::new(
            principal,
            self.annual_rate,
            self.maturity_years,
            self.payments_per_year,
        )
    }
}

impl fmt::Display for LoanTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}% {}Y ({}/yr)",
            self.annual_rate * 100.0,
            self.maturity_years,
            self.payments_per_year
        )
    }
}
