use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::repository::DayRepository;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        force,
    } = cmd
    {
        let d = date::require_date(date_str)?;

        let mut pool = DbPool::open_existing(&cfg.database)?;
        if pool.get_day_by_date(d)?.is_none() {
            return Err(AppError::DayNotFound(d.to_string()));
        }

        let prompt = format!(
            "Delete the record for {} and all its line items? This action is irreversible.",
            d
        );

        if !*force && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(&mut pool, d)?;

        log::audit(
            &pool.conn,
            "del",
            &removed.date_str(),
            &format!("Deleted day #{}", removed.id),
        );

        success(format!("The record for {} has been deleted.", d));
    }

    Ok(())
}
