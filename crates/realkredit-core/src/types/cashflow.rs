//! Cash-flow series type for yield calculations.

use serde::{Deserialize, Serialize};

/// An ordered series of loan cash flows.
///
/// The first element is the amount disbursed to the borrower, negated
/// (cash out from the lender's point of view); the remaining elements are
/// the per-period total payments received. The series is the input to the
/// internal-rate solver and is not persisted anywhere else.
///
/// # Example
///
/// ```rust
/// use realkredit_core::types::CashFlowSeries;
///
/// let flows = CashFlowSeries::from_disbursement(95_000.0, vec![6_505.14; 30]);
/// assert_eq!(flows.len(), 31);
/// assert_eq!(flows.disbursement(), Some(-95_000.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CashFlowSeries {
    /// Disbursement followed by per-period payments
    flows: Vec<f64>,
}

impl CashFlowSeries {
    /// Creates a series from raw flow values.
    ///
    /// The caller is responsible for the sign convention: element 0
    /// negative, the rest positive.
    #[must_use]
    pub fn new(flows: Vec<f64>) -> Self {
        Self { flows }
    }

    /// Creates a series from a disbursed amount and the payments it buys.
    ///
    /// The disbursement is negated; payments are taken as given, in
    /// period order.
    #[must_use]
    pub fn from_disbursement(disbursed: f64, payments: impl IntoIterator<Item = f64>) -> Self {
        let mut flows = vec![-disbursed];
        flows.extend(payments);
        Self { flows }
    }

    /// Returns the flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.flows
    }

    /// Returns the number of flows, disbursement included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns true if the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Returns the (negative) disbursement flow, if present.
    #[must_use]
    pub fn disbursement(&self) -> Option<f64> {
        self.flows.first().copied()
    }

    /// Returns the payment flows following the disbursement.
    #[must_use]
    pub fn payments(&self) -> &[f64] {
        if self.flows.is_empty() {
            &[]
        } else {
            &self.flows[1..]
        }
    }

    /// Returns an iterator over all flows.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.flows.iter()
    }

    /// Returns the net undiscounted total of all flows.
    #[must_use]
    pub fn net_total(&self) -> f64 {
        self.flows.iter().sum()
    }
}

impl IntoIterator for CashFlowSeries {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CashFlowSeries {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.iter()
    }
}

impl FromIterator<f64> for CashFlowSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            flows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_disbursement() {
        let flows = CashFlowSeries::from_disbursement(1000.0, vec![300.0, 300.0, 300.0, 300.0]);

        assert_eq!(flows.len(), 5);
        assert_relative_eq!(flows.disbursement().unwrap(), -1000.0);
        assert_eq!(flows.payments().len(), 4);
        assert_relative_eq!(flows.net_total(), 200.0);
    }

    #[test]
    fn test_empty_series() {
        let flows = CashFlowSeries::default();
        assert!(flows.is_empty());
        assert!(flows.disbursement().is_none());
        assert!(flows.payments().is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let flows = CashFlowSeries::from_disbursement(1000.0, vec![550.0, 550.0]);
        let json = serde_json::to_string(&flows).unwrap();
        let back: CashFlowSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(back, flows);
    }
}
