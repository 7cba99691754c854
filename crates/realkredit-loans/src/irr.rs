//! Internal rate of return for loan cash-flow series.
//!
//! The flows are treated as the coefficients of a polynomial in the
//! per-period discount factor `x = 1 / (1 + rate)`: the disbursement is
//! the constant term and payment `k` multiplies `x^k`. All roots are
//! found with the dense companion-matrix method, and the economically
//! admissible root - real and strictly positive - must be unique. For a
//! single disbursement followed by positive payments the flow has one
//! sign change and the unique root is guaranteed (Descartes); arbitrary
//! flow shapes are not, which is why uniqueness is an explicit
//! post-filter rather than a solver assumption.

use log::debug;

use realkredit_core::types::CashFlowSeries;
use realkredit_math::roots::{real_roots, DEFAULT_IMAG_TOLERANCE};

use crate::error::{LoanError, LoanResult};

/// Internal-rate-of-return solver.
///
/// Finds the single positive real periodic discount rate that zeroes the
/// net present value of a cash-flow series.
///
/// # Example
///
/// ```rust
/// use realkredit_core::types::CashFlowSeries;
/// use realkredit_loans::irr::IrrSolver;
///
/// // 1000 disbursed, repaid by one payment of 1100
/// let flows = CashFlowSeries::from_disbursement(1000.0, vec![1100.0]);
/// let rate = IrrSolver::new().periodic_rate(&flows).unwrap();
/// assert!((rate - 0.10).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct IrrSolver {
    /// Tolerance below which a root's imaginary part is treated as zero.
    imag_tolerance: f64,
}

impl Default for IrrSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IrrSolver {
    /// Creates a solver with the default imaginary-part tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            imag_tolerance: DEFAULT_IMAG_TOLERANCE,
        }
    }

    /// Sets the imaginary-part tolerance used to classify real roots.
    #[must_use]
    pub fn with_imag_tolerance(mut self, imag_tolerance: f64) -> Self {
        self.imag_tolerance = imag_tolerance;
        self
    }

    /// Solves for the periodic internal rate of the given flows.
    ///
    /// The rate is per payment period; annualization is the caller's
    /// choice (see [`nominal_annual`] and [`effective_annual`]).
    ///
    /// # Errors
    ///
    /// Returns [`LoanError::AmbiguousYield`] when zero or several
    /// positive real discount factors zero the net present value, and a
    /// math error when the series is too short to form a polynomial.
    pub fn periodic_rate(&self, flows: &CashFlowSeries) -> LoanResult<f64> {
        let coeffs = flows.as_slice();
        let reals = real_roots(coeffs, self.imag_tolerance)?;
        let positive: Vec<f64> = reals.into_iter().filter(|x| *x > 0.0).collect();

        debug!(
            "IRR: degree {} flow polynomial, {} positive real discount factor(s)",
            coeffs.len().saturating_sub(1),
            positive.len()
        );

        match positive.as_slice() {
            [factor] => Ok(1.0 / factor - 1.0),
            _ => Err(LoanError::AmbiguousYield {
                candidates: positive.len(),
            }),
        }
    }
}

/// Solves for the periodic internal rate using default settings.
///
/// # Errors
///
/// Same conditions as [`IrrSolver::periodic_rate`].
pub fn internal_rate(flows: &CashFlowSeries) -> LoanResult<f64> {
    IrrSolver::new().periodic_rate(flows)
}

/// Annualizes a periodic rate multiplicatively (nominal convention).
#[must_use]
pub fn nominal_annual(periodic_rate: f64, payments_per_year: u32) -> f64 {
    periodic_rate * f64::from(payments_per_year)
}

/// Annualizes a periodic rate by compounding (effective convention).
#[must_use]
pub fn effective_annual(periodic_rate: f64, payments_per_year: u32) -> f64 {
    (1.0 + periodic_rate).powi(payments_per_year as i32) - 1.0
}
