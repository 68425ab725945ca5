use crate::models::budget::{BudgetStatus, MonthlyBudget};
use crate::models::day::DayRecord;
use crate::models::month_summary::MonthSummary;
use crate::models::totals::TotalsResult;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Differences smaller than this count as exactly on budget.
pub const BUDGET_EPSILON: f64 = 0.01;

/// "YYYY-MM" key of a date.
pub fn month_key_of(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Classify `actual` against `budget`.
pub fn budget_status(actual: f64, budget: f64) -> BudgetStatus {
    let diff = actual - budget;
    if diff.abs() < BUDGET_EPSILON {
        BudgetStatus::OnBudget
    } else if diff > 0.0 {
        BudgetStatus::Over(diff)
    } else {
        BudgetStatus::Under(-diff)
    }
}

/// Per-month dashboard rows, most recent month first, with the month's
/// budget joined in when one exists.
pub fn summarize_by_month(days: &[DayRecord], budgets: &[MonthlyBudget]) -> Vec<MonthSummary> {
    let budget_by_month: HashMap<&str, f64> = budgets
        .iter()
        .map(|b| (b.month.as_str(), b.budget_amount))
        .collect();

    let mut buckets: BTreeMap<String, (usize, TotalsResult)> = BTreeMap::new();
    for day in days {
        let entry = buckets.entry(month_key_of(day.date)).or_default();
        entry.0 += 1;
        entry.1 += day.totals;
    }

    buckets
        .into_iter()
        .rev()
        .map(|(month, (day_count, totals))| {
            let budget = budget_by_month.get(month.as_str()).copied();
            let status = budget.map(|b| budget_status(totals.grand_total, b));
            MonthSummary {
                month,
                day_count,
                totals,
                budget,
                status,
            }
        })
        .collect()
}
