//! Level-payment annuity schedule generation.
//!
//! An annuity loan is repaid with a constant total payment per period,
//! computed from the closed form
//!
//! ```text
//! payment = P * r / (1 - (1 + r)^-n)
//! ```
//!
//! where `P` is the principal, `r` the periodic rate, and `n` the total
//! number of periods. The principal portion of period `t` follows the
//! closed form `a1 * (1 + r)^(t - 1)` with
//! `a1 = P * r / ((1 + r)^n - 1)`; interest is the difference to the
//! constant payment, and the remaining balance is the principal less the
//! cumulative principal portions.
//!
//! A periodic rate of exactly zero is a removable singularity of both
//! closed forms and a valid economic input (an interest-free loan); it is
//! handled by the limiting case `P / n`, never by an error.

use realkredit_core::types::{LoanTerms, Schedule, ScheduleRow};

use crate::error::{LoanError, LoanResult};

/// Validates the shared argument ranges of the schedule calculations.
fn validate_inputs(principal: f64, periodic_rate: f64, total_periods: u32) -> LoanResult<()> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(LoanError::invalid_term(format!(
            "principal must be positive and finite, got {principal}"
        )));
    }
    if !periodic_rate.is_finite() || periodic_rate < 0.0 {
        return Err(LoanError::invalid_term(format!(
            "periodic rate must be non-negative and finite, got {periodic_rate}"
        )));
    }
    if total_periods == 0 {
        return Err(LoanError::invalid_term("total periods must be at least 1"));
    }
    Ok(())
}

/// Computes the constant payment of a level-payment annuity.
///
/// # Errors
///
/// Returns [`LoanError::InvalidTerm`] when the principal is not positive
/// and finite, the rate is negative or non-finite, or the period count is
/// zero.
///
/// # Example
///
/// ```rust
/// use realkredit_loans::amortization::periodic_payment;
///
/// let payment = periodic_payment(100_000.0, 0.05, 30).unwrap();
/// assert!((payment - 6_505.14).abs() < 0.01);
/// ```
pub fn periodic_payment(principal: f64, periodic_rate: f64, total_periods: u32) -> LoanResult<f64> {
    validate_inputs(principal, periodic_rate, total_periods)?;

    if periodic_rate == 0.0 {
        // Limit of the closed form as the rate goes to zero
        return Ok(principal / f64::from(total_periods));
    }

    let n = total_periods as i32;
    Ok(principal * periodic_rate / (1.0 - (1.0 + periodic_rate).powi(-n)))
}

/// Computes the principal portion of the payment in a given period.
///
/// `period` is 1-based: the first repayment is period 1. Passing period 0
/// is a contract error, not a silent wraparound.
///
/// # Errors
///
/// Returns [`LoanError::InvalidTerm`] for the same ranges as
/// [`periodic_payment`], and additionally when `period` is zero.
pub fn principal_portion(
    principal: f64,
    periodic_rate: f64,
    total_periods: u32,
    period: u32,
) -> LoanResult<f64> {
    validate_inputs(principal, periodic_rate, total_periods)?;
    if period == 0 {
        return Err(LoanError::invalid_term(
            "repayment period must be at least 1",
        ));
    }

    if periodic_rate == 0.0 {
        // Every payment is pure principal on an interest-free loan
        return Ok(principal / f64::from(total_periods));
    }

    let n = total_periods as i32;
    let a1 = principal * periodic_rate / ((1.0 + periodic_rate).powi(n) - 1.0);
    Ok(a1 * (1.0 + periodic_rate).powi(period as i32 - 1))
}

/// Builds the full amortization schedule for the given terms.
///
/// Every row carries the same constant payment; the principal portion
/// grows geometrically, interest is the difference, and the remaining
/// balance is the principal minus the running sum of principal portions.
/// The function is pure: identical terms produce bit-identical schedules.
///
/// # Errors
///
/// Returns [`LoanError::InvalidTerm`] when the derived periodic rate or
/// period count is out of range (the terms themselves are already
/// range-validated at construction).
pub fn build_schedule(terms: &LoanTerms) -> LoanResult<Schedule> {
    let principal = terms.principal();
    let rate = terms.periodic_rate();
    let total_periods = terms.total_periods();

    let payment = periodic_payment(principal, rate, total_periods)?;

    let mut schedule = Schedule::with_capacity(total_periods as usize);
    let mut repaid = 0.0;

    for period in 1..=total_periods {
        let portion = principal_portion(principal, rate, total_periods, period)?;
        repaid += portion;

        schedule.push(ScheduleRow {
            period,
            payment,
            principal_portion: portion,
            interest_portion: payment - portion,
            remaining_balance: principal - repaid,
        });
    }

    Ok(schedule)
}
