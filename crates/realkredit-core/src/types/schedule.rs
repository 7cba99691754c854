//! Amortization schedule types.
//!
//! A [`Schedule`] is the level-payment amortization table of an annuity
//! loan; a [`FeeAdjustedSchedule`] is the same table after a proportional
//! servicing fee has been folded into each payment. Both are created once
//! and treated as read-only thereafter; derived views (such as an
//! after-tax table) are always new sequences.

use serde::{Deserialize, Serialize};

/// A single row of an amortization schedule.
///
/// Invariant: `payment == principal_portion + interest_portion` within
/// floating tolerance, and `remaining_balance` is the principal minus the
/// cumulative principal portions through this row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Payment period, 1-based
    pub period: u32,
    /// Total amount paid this period
    pub payment: f64,
    /// Part of the payment that repays principal
    pub principal_portion: f64,
    /// Part of the payment that covers interest
    pub interest_portion: f64,
    /// Outstanding debt after this period's payment
    pub remaining_balance: f64,
}

/// The full amortization table of an annuity loan.
///
/// Rows are ordered by period and all share the same `payment` value
/// (level-payment convention).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Ordered list of schedule rows
    rows: Vec<ScheduleRow>,
}

impl Schedule {
    /// Creates a new empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Creates a schedule with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    /// Adds a row to the schedule.
    pub fn push(&mut self, row: ScheduleRow) {
        self.rows.push(row);
    }

    /// Returns the rows as a slice.
    #[must_use]
    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    /// Returns the number of periods in the schedule.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the schedule has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduleRow> {
        self.rows.iter()
    }

    /// Returns the row for a 1-based period, if present.
    #[must_use]
    pub fn get(&self, period: u32) -> Option<&ScheduleRow> {
        if period == 0 {
            return None;
        }
        self.rows.get(period as usize - 1)
    }

    /// Returns the sum of all payments.
    #[must_use]
    pub fn total_payment(&self) -> f64 {
        self.rows.iter().map(|r| r.payment).sum()
    }

    /// Returns the sum of all interest portions.
    #[must_use]
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest_portion).sum()
    }

    /// Returns the sum of all principal portions.
    #[must_use]
    pub fn total_principal(&self) -> f64 {
        self.rows.iter().map(|r| r.principal_portion).sum()
    }

    /// Returns the remaining balance after the final period.
    #[must_use]
    pub fn final_balance(&self) -> Option<f64> {
        self.rows.last().map(|r| r.remaining_balance)
    }

    /// Returns the payment column.
    #[must_use]
    pub fn payments(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.payment).collect()
    }

    /// Returns the principal-portion column.
    #[must_use]
    pub fn principal_portions(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.principal_portion).collect()
    }

    /// Returns the interest-portion column.
    #[must_use]
    pub fn interest_portions(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.interest_portion).collect()
    }

    /// Returns the remaining-balance column.
    #[must_use]
    pub fn remaining_balances(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.remaining_balance).collect()
    }
}

impl IntoIterator for Schedule {
    type Item = ScheduleRow;
    type IntoIter = std::vec::IntoIter<ScheduleRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleRow;
    type IntoIter = std::slice::Iter<'a, ScheduleRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<ScheduleRow> for Schedule {
    fn from_iter<I: IntoIterator<Item = ScheduleRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// A schedule row with a servicing fee folded into the payment.
///
/// `payment` is the revised total (base payment plus fee); the fee is
/// derived by the fee transform and never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeAdjustedRow {
    /// Payment period, 1-based
    pub period: u32,
    /// Total amount paid this period, fee included
    pub payment: f64,
    /// Part of the payment that repays principal
    pub principal_portion: f64,
    /// Part of the payment that covers interest
    pub interest_portion: f64,
    /// Servicing fee charged this period
    pub fee: f64,
    /// Outstanding debt after this period's payment
    pub remaining_balance: f64,
}

/// An amortization table with per-period servicing fees.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeeAdjustedSchedule {
    /// Ordered list of fee-adjusted rows
    rows: Vec<FeeAdjustedRow>,
}

impl FeeAdjustedSchedule {
    /// Creates a new empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Creates a schedule with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    /// Adds a row to the schedule.
    pub fn push(&mut self, row: FeeAdjustedRow) {
        self.rows.push(row);
    }

    /// Returns the rows as a slice.
    #[must_use]
    pub fn rows(&self) -> &[FeeAdjustedRow] {
        &self.rows
    }

    /// Returns the number of periods in the schedule.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the schedule has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &FeeAdjustedRow> {
        self.rows.iter()
    }

    /// Returns the row for a 1-based period, if present.
    #[must_use]
    pub fn get(&self, period: u32) -> Option<&FeeAdjustedRow> {
        if period == 0 {
            return None;
        }
        self.rows.get(period as usize - 1)
    }

    /// Returns the sum of all payments, fees included.
    #[must_use]
    pub fn total_payment(&self) -> f64 {
        self.rows.iter().map(|r| r.payment).sum()
    }

    /// Returns the sum of all interest portions.
    #[must_use]
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest_portion).sum()
    }

    /// Returns the sum of all principal portions.
    #[must_use]
    pub fn total_principal(&self) -> f64 {
        self.rows.iter().map(|r| r.principal_portion).sum()
    }

    /// Returns the sum of all servicing fees.
    #[must_use]
    pub fn total_fee(&self) -> f64 {
        self.rows.iter().map(|r| r.fee).sum()
    }

    /// Returns the remaining balance after the final period.
    #[must_use]
    pub fn final_balance(&self) -> Option<f64> {
        self.rows.last().map(|r| r.remaining_balance)
    }

    /// Returns the payment column, fees included.
    #[must_use]
    pub fn payments(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.payment).collect()
    }

    /// Returns the principal-portion column.
    #[must_use]
    pub fn principal_portions(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.principal_portion).collect()
    }

    /// Returns the interest-portion column.
    #[must_use]
    pub fn interest_portions(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.interest_portion).collect()
    }

    /// Returns the fee column.
    #[must_use]
    pub fn fees(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.fee).collect()
    }

    /// Returns the remaining-balance column.
    #[must_use]
    pub fn remaining_balances(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.remaining_balance).collect()
    }
}

impl IntoIterator for FeeAdjustedSchedule {
    type Item = FeeAdjustedRow;
    type IntoIter = std::vec::IntoIter<FeeAdjustedRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeeAdjustedSchedule {
    type Item = &'a FeeAdjustedRow;
    type IntoIter = std::slice::Iter<'a, FeeAdjustedRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<FeeAdjustedRow> for FeeAdjustedSchedule {
    fn from_iter<I: IntoIterator<Item = FeeAdjustedRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
