use crate::db::repository::DayRepository;
use crate::errors::{AppError, AppResult};
use crate::models::budget::MonthlyBudget;
use crate::utils::date::parse_month;

/// Parse a budget amount: a finite number, zero or more.
pub fn parse_budget_amount(s: &str) -> AppResult<f64> {
    let amount: f64 = s
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidBudget(s.to_string()))?;

    if !amount.is_finite() || amount < 0.0 {
        return Err(AppError::InvalidBudget(s.to_string()));
    }

    // "-0" parses to -0.0
    Ok(amount + 0.0)
}

pub struct BudgetLogic;

impl BudgetLogic {
    /// Validate both inputs, then insert or replace the month's budget.
    pub fn set<R: DayRepository>(repo: &mut R, month: &str, amount: &str) -> AppResult<MonthlyBudget> {
        let month = parse_month(month)?;
        let amount = parse_budget_amount(amount)?;
        repo.upsert_budget(&month, amount)
    }

    /// One month's budget, or every budget when `month` is `None`.
    pub fn show<R: DayRepository>(repo: &R, month: Option<&str>) -> AppResult<Vec<MonthlyBudget>> {
        match month {
            Some(m) => {
                let m = parse_month(m)?;
                Ok(repo.get_budget(&m)?.into_iter().collect())
            }
            None => repo.list_budgets(),
        }
    }
}
