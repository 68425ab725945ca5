use crate::cli::parser::{BudgetAction, Commands};
use crate::config::Config;
use crate::core::budget::BudgetLogic;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::{money, money_with};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Budget { action } = cmd {
        match action {
            BudgetAction::Set { month, amount } => {
                let mut pool = DbPool::new(&cfg.database)?;
                let budget = BudgetLogic::set(&mut pool, month, amount)?;

                log::audit(
                    &pool.conn,
                    "budget",
                    &budget.month,
                    &format!("Budget set to {}", money(budget.budget_amount)),
                );

                success(format!(
                    "Budget for {} set to {}.",
                    budget.month,
                    money_with(&cfg.currency_symbol, budget.budget_amount)
                ));
            }
            BudgetAction::Show { month } => {
                let pool = DbPool::open_existing(&cfg.database)?;
                let budgets = BudgetLogic::show(&pool, month.as_deref())?;

                if budgets.is_empty() {
                    info("No budgets set.");
                    return Ok(());
                }

                let mut table = Table::new(vec![Column::left("Month"), Column::right("Budget")])
                    .with_separator(cfg.separator());
                for b in budgets {
                    table.add_row(vec![b.month, money(b.budget_amount)]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
