use super::budget::BudgetStatus;
use super::totals::TotalsResult;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MonthSummary {
    pub month: String,
    pub day_count: usize,
    pub totals: TotalsResult,
    pub budget: Option<f64>,
    pub status: Option<BudgetStatus>,
}
