use serde::Serialize;

/// Budget for a calendar month ⇔ one row of `monthly_budgets`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBudget {
    /// Format: "YYYY-MM"
    pub month: String,
    pub budget_amount: f64,
}

/// Outcome of comparing a month's billings against its budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum BudgetStatus {
    OnBudget,
    Over(f64),
    Under(f64),
}

impl BudgetStatus {
    pub fn label(&self) -> String {
        match self {
            BudgetStatus::OnBudget => "on budget".to_string(),
            BudgetStatus::Over(d) => format!("over by {:.2}", d),
            BudgetStatus::Under(d) => format!("under by {:.2}", d),
        }
    }
}
