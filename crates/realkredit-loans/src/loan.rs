//! Mortgage-bond-backed annuity loans.
//!
//! A [`MortgageLoan`] composes the amortization engine, the servicing-fee
//! transform, and the yield solver. The borrower asks for an amount of
//! cash; when the backing bond trades away from par, the face value the
//! schedule amortizes is that amount divided by the price fraction, so
//! the cash received and the debt incurred differ. The loan's cash-flow
//! series starts at the cash actually disbursed, which is what makes the
//! yield reflect the market price.

use realkredit_core::types::{CashFlowSeries, FeeAdjustedSchedule, LoanTerms, Schedule};

use crate::amortization;
use crate::error::{LoanError, LoanResult};
use crate::fees;
use crate::irr;

/// A fixed-rate annuity loan funded by a mortgage bond.
///
/// The schedule is computed once at construction and owned by the loan;
/// all views derived from it are new sequences.
///
/// # Example
///
/// ```rust
/// use realkredit_core::types::LoanTerms;
/// use realkredit_loans::loan::MortgageLoan;
///
/// // Borrow 95,000 against a bond priced at 95: the debt is 100,000
/// let terms = LoanTerms::new(95_000.0, 0.05, 30, 1).unwrap();
/// let loan = MortgageLoan::with_price(terms, 0.0, 95.0).unwrap();
///
/// assert!((loan.face_value() - 100_000.0).abs() < 1e-9);
/// assert!(loan.yield_to_maturity().unwrap() > 0.05);
/// ```
#[derive(Debug, Clone)]
pub struct MortgageLoan {
    /// Terms as requested: the principal is the amount disbursed
    terms: LoanTerms,
    /// Market price of the backing bond, percent of par
    price: Option<f64>,
    /// Annual servicing-fee rate as a decimal
    annual_fee_rate: f64,
    /// Face value the schedule amortizes
    face_value: f64,
    /// Constant per-period payment before fees
    periodic_payment: f64,
    /// Base amortization table of the face value
    base: Schedule,
    /// Table with the servicing fee folded in
    adjusted: FeeAdjustedSchedule,
}

impl MortgageLoan {
    /// Creates a loan disbursed at par: face value equals the requested
    /// amount.
    ///
    /// # Errors
    ///
    /// Returns an error when the fee rate is negative or non-finite.
    pub fn new(terms: LoanTerms, annual_fee_rate: f64) -> LoanResult<Self> {
        Self::build(terms, annual_fee_rate, None)
    }

    /// Creates a loan whose backing bond trades at `price` percent of
    /// par.
    ///
    /// The requested amount (`terms.principal()`) is what the borrower
    /// receives in cash; the schedule amortizes
    /// `requested / (price / 100)`.
    ///
    /// # Errors
    ///
    /// Returns [`LoanError::InvalidPrice`] when the price is not positive
    /// and finite, in addition to the conditions of [`MortgageLoan::new`].
    pub fn with_price(terms: LoanTerms, annual_fee_rate: f64, price: f64) -> LoanResult<Self> {
        Self::build(terms, annual_fee_rate, Some(price))
    }

    fn build(terms: LoanTerms, annual_fee_rate: f64, price: Option<f64>) -> LoanResult<Self> {
        if !annual_fee_rate.is_finite() || annual_fee_rate < 0.0 {
            return Err(LoanError::invalid_term(format!(
                "fee rate must be non-negative and finite, got {annual_fee_rate}"
            )));
        }

        let face_value = match price {
            Some(p) if !p.is_finite() || p <= 0.0 => {
                return Err(LoanError::InvalidPrice { value: p });
            }
            Some(p) => terms.principal() / (p / 100.0),
            None => terms.principal(),
        };

        let face_terms = terms.with_principal(face_value)?;
        let periodic_payment = amortization::periodic_payment(
            face_value,
            face_terms.periodic_rate(),
            face_terms.total_periods(),
        )?;
        let base = amortization::build_schedule(&face_terms)?;
        let adjusted = fees::apply_servicing_fee(&base, annual_fee_rate, terms.payments_per_year());

        Ok(Self {
            terms,
            price,
            annual_fee_rate,
            face_value,
            periodic_payment,
            base,
            adjusted,
        })
    }

    /// Returns the requested terms. The principal is the disbursed
    /// amount, not the face value.
    #[must_use]
    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    /// Returns the bond's market price in percent of par, if one was
    /// given.
    #[must_use]
    pub fn price(&self) -> Option<f64> {
        self.price
    }

    /// Returns the annual servicing-fee rate.
    #[must_use]
    pub fn annual_fee_rate(&self) -> f64 {
        self.annual_fee_rate
    }

    /// Returns the cash amount disbursed to the borrower.
    #[must_use]
    pub fn disbursed_amount(&self) -> f64 {
        self.terms.principal()
    }

    /// Returns the face value the schedule amortizes.
    #[must_use]
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Returns the constant per-period payment before fees.
    #[must_use]
    pub fn periodic_payment(&self) -> f64 {
        self.periodic_payment
    }

    /// Returns the base amortization schedule, without fees.
    #[must_use]
    pub fn base_schedule(&self) -> &Schedule {
        &self.base
    }

    /// Returns the fee-adjusted amortization schedule.
    #[must_use]
    pub fn schedule(&self) -> &FeeAdjustedSchedule {
        &self.adjusted
    }

    /// Returns the loan's cash-flow series: the disbursed amount negated,
    /// followed by the fee-adjusted payment of every period in order.
    #[must_use]
    pub fn cash_flow(&self) -> CashFlowSeries {
        CashFlowSeries::from_disbursement(self.terms.principal(), self.adjusted.payments())
    }

    /// Solves for the periodic yield to maturity of the cash-flow series.
    ///
    /// # Errors
    ///
    /// Returns [`LoanError::AmbiguousYield`] when the flows do not
    /// determine a unique positive discount factor.
    pub fn yield_to_maturity(&self) -> LoanResult<f64> {
        irr::internal_rate(&self.cash_flow())
    }

    /// Solves for the effective annual yield: the periodic yield
    /// compounded over one year.
    ///
    /// # Errors
    ///
    /// Same conditions as [`MortgageLoan::yield_to_maturity`].
    pub fn effective_annual_yield(&self) -> LoanResult<f64> {
        let periodic = self.yield_to_maturity()?;
        Ok(irr::effective_annual(periodic, self.terms.payments_per_year()))
    }

    /// Returns the total cost of the loan: the sum of all fee-adjusted
    /// payments.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.adjusted.total_payment()
    }

    /// Returns the total of interest and servicing fees over the loan's
    /// life.
    #[must_use]
    pub fn total_interest_and_fee(&self) -> f64 {
        self.adjusted.total_interest() + self.adjusted.total_fee()
    }

    /// Returns a new schedule with interest and fee reduced by a tax
    /// rebate. The loan's own schedule is unchanged.
    ///
    /// `tax_rate` is expected in `[0, 1)`; see [`fees::after_tax`].
    #[must_use]
    pub fn after_tax_schedule(&self, tax_rate: f64) -> FeeAdjustedSchedule {
        fees::after_tax(&self.adjusted, tax_rate)
    }

    /// Returns a short label for comparison legends, e.g.
    /// `"5.00% 30Y 0.60%"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{:.2}% {}Y {:.2}%",
            self.terms.annual_rate() * 100.0,
            self.terms.maturity_years(),
            self.annual_fee_rate * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn terms() -> LoanTerms {
        LoanTerms::new(100_000.0, 0.05, 30, 1).unwrap()
    }

    #[test]
    fn test_par_loan_face_equals_request() {
        let loan = MortgageLoan::new(terms(), 0.0).unwrap();
        assert_relative_eq!(loan.face_value(), 100_000.0);
        assert_relative_eq!(loan.disbursed_amount(), 100_000.0);
    }

    #[test]
    fn test_price_converts_request_to_face() {
        let requested = LoanTerms::new(95_000.0, 0.05, 30, 1).unwrap();
        let loan = MortgageLoan::with_price(requested, 0.0, 95.0).unwrap();

        assert_relative_eq!(loan.face_value(), 100_000.0, max_relative = 1e-12);
        assert_relative_eq!(loan.disbursed_amount(), 95_000.0);
        // The schedule amortizes the face value
        assert_relative_eq!(
            loan.base_schedule().total_principal(),
            100_000.0,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_invalid_price_rejected() {
        assert!(MortgageLoan::with_price(terms(), 0.0, 0.0).is_err());
        assert!(MortgageLoan::with_price(terms(), 0.0, -95.0).is_err());
        assert!(MortgageLoan::with_price(terms(), 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_negative_fee_rate_rejected() {
        assert!(MortgageLoan::new(terms(), -0.001).is_err());
    }

    #[test]
    fn test_cash_flow_shape() {
        let loan = MortgageLoan::new(terms(), 0.006).unwrap();
        let flows = loan.cash_flow();

        assert_eq!(flows.len(), 31);
        assert_relative_eq!(flows.disbursement().unwrap(), -100_000.0);
        for payment in flows.payments() {
            assert!(*payment > 0.0);
        }
    }

    #[test]
    fn test_par_yield_matches_nominal_rate() {
        let loan = MortgageLoan::new(terms(), 0.0).unwrap();
        let ytm = loan.yield_to_maturity().unwrap();
        assert_relative_eq!(ytm, 0.05, epsilon = 1e-8);
    }

    #[test]
    fn test_fee_raises_yield() {
        let without = MortgageLoan::new(terms(), 0.0).unwrap();
        let with = MortgageLoan::new(terms(), 0.006).unwrap();

        assert!(
            with.yield_to_maturity().unwrap() > without.yield_to_maturity().unwrap()
        );
    }

    #[test]
    fn test_total_cost_decomposition() {
        let loan = MortgageLoan::new(terms(), 0.006).unwrap();

        assert_relative_eq!(
            loan.total_cost(),
            loan.face_value() + loan.total_interest_and_fee(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_effective_annual_yield_for_quarterly_loan() {
        let quarterly = LoanTerms::new(100_000.0, 0.05, 30, 4).unwrap();
        let loan = MortgageLoan::new(quarterly, 0.0).unwrap();

        let periodic = loan.yield_to_maturity().unwrap();
        let effective = loan.effective_annual_yield().unwrap();

        assert_relative_eq!(periodic, 0.0125, epsilon = 1e-8);
        assert_relative_eq!(effective, 1.0125_f64.powi(4) - 1.0, epsilon = 1e-7);
    }

    #[test]
    fn test_after_tax_schedule_leaves_loan_unchanged() {
        let loan = MortgageLoan::new(terms(), 0.006).unwrap();
        let before = loan.schedule().clone();
        let taxed = loan.after_tax_schedule(0.33);

        assert_eq!(loan.schedule(), &before);
        assert!(taxed.total_payment() < before.total_payment());
    }

    #[test]
    fn test_label() {
        let loan = MortgageLoan::new(terms(), 0.006).unwrap();
        assert_eq!(loan.label(), "5.00% 30Y 0.60%");
    }
}
