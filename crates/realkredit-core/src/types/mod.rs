//! Domain types for annuity loan analytics.

mod cashflow;
mod schedule;
mod terms;

pub use cashflow::CashFlowSeries;
pub use schedule::{FeeAdjustedRow, FeeAdjustedSchedule, Schedule, ScheduleRow};
pub use terms::{LoanTerms, PaymentFrequency};
