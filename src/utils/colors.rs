//! ANSI color helper utilities for terminal output.
use crate::models::budget::BudgetStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";

/// Budget status color:
/// over → red
/// under → green
/// on budget → yellow
/// no budget → grey
pub fn color_for_status(status: Option<&BudgetStatus>) -> &'static str {
    match status {
        Some(BudgetStatus::Over(_)) => RED,
        Some(BudgetStatus::Under(_)) => GREEN,
        Some(BudgetStatus::OnBudget) => YELLOW,
        None => GREY,
    }
}
