//! Servicing-fee adjustment and after-tax views.
//!
//! Danish mortgage-bond loans charge a recurring servicing fee (bidrag) on
//! top of principal and interest. The fee for a period is proportional to
//! that period's principal portion plus the balance still outstanding
//! after it:
//!
//! ```text
//! fee = (principal_portion + remaining_balance) * fee_rate / payments_per_year
//! ```
//!
//! Note that this charges the period's repaid principal on top of the
//! post-payment balance. The convention is preserved exactly as ported;
//! whether it matches a particular servicer's contract is a domain
//! question, not a numerical one.

use realkredit_core::types::{FeeAdjustedRow, FeeAdjustedSchedule, Schedule};

/// Adds a proportional servicing fee to every row of a schedule.
///
/// The returned schedule reports the revised total payment (base payment
/// plus fee) per row; the input schedule is not modified. A fee rate of
/// zero produces fee 0.0 on every row and leaves the payments unchanged.
#[must_use]
pub fn apply_servicing_fee(
    schedule: &Schedule,
    annual_fee_rate: f64,
    payments_per_year: u32,
) -> FeeAdjustedSchedule {
    let per_period_rate = annual_fee_rate / f64::from(payments_per_year);

    schedule
        .iter()
        .map(|row| {
            let fee = (row.principal_portion + row.remaining_balance) * per_period_rate;
            FeeAdjustedRow {
                period: row.period,
                payment: row.payment + fee,
                principal_portion: row.principal_portion,
                interest_portion: row.interest_portion,
                fee,
                remaining_balance: row.remaining_balance,
            }
        })
        .collect()
}

/// Returns a new schedule with interest and fee reduced by a tax rebate.
///
/// Interest and fee are scaled by `1 - tax_rate` and the payment is
/// recomputed as principal portion plus the scaled interest and fee. The
/// input schedule is not modified.
///
/// `tax_rate` is expected in `[0, 1)`. Values outside this range are
/// applied as given and will silently produce negative or inflated
/// payments; validating the rate is the caller's responsibility.
#[must_use]
pub fn after_tax(schedule: &FeeAdjustedSchedule, tax_rate: f64) -> FeeAdjustedSchedule {
    let keep = 1.0 - tax_rate;

    schedule
        .iter()
        .map(|row| {
            let interest = row.interest_portion * keep;
            let fee = row.fee * keep;
            FeeAdjustedRow {
                period: row.period,
                payment: row.principal_portion + interest + fee,
                principal_portion: row.principal_portion,
                interest_portion: interest,
                fee,
                remaining_balance: row.remaining_balance,
            }
        })
        .collect()
}
