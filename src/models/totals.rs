use serde::Serialize;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Time and currency aggregates derived from a set of item counts.
///
/// Stored as a snapshot on every day row; week and month views sum these
/// snapshots field by field instead of recomputing from counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TotalsResult {
    pub total_minutes: i64,
    pub total_hours: i64,
    pub amount_with_bbi: f64,
    pub amount_without_bbi: f64,
    pub loading_amount: f64,
    pub grand_total: f64,
}

impl TotalsResult {
    pub fn is_zero(&self) -> bool {
        *self == TotalsResult::default()
    }
}

impl Add for TotalsResult {
    type Output = TotalsResult;

    fn add(mut self, rhs: TotalsResult) -> TotalsResult {
        self += rhs;
        self
    }
}

impl AddAssign for TotalsResult {
    fn add_assign(&mut self, rhs: TotalsResult) {
        self.total_minutes += rhs.total_minutes;
        self.total_hours += rhs.total_hours;
        self.amount_with_bbi += rhs.amount_with_bbi;
        self.amount_without_bbi += rhs.amount_without_bbi;
        self.loading_amount += rhs.loading_amount;
        self.grand_total += rhs.grand_total;
    }
}

impl Sum for TotalsResult {
    fn sum<I: Iterator<Item = TotalsResult>>(iter: I) -> Self {
        iter.fold(TotalsResult::default(), |acc, t| acc + t)
    }
}

impl<'a> Sum<&'a TotalsResult> for TotalsResult {
    fn sum<I: Iterator<Item = &'a TotalsResult>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
