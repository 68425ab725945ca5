use crate::cli::commands::show::print_totals;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::counts::parse_item_args;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::formatting::money;

/// Record a new day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, items } = cmd {
        //
        // 1. Validate input before touching the DB
        //
        let d = date::require_date(date)?;
        let counts = parse_item_args(items)?;

        if counts.values().all(|&c| c == 0) {
            warning(format!("No items counted for {}: saving a zero day.", d));
        }

        //
        // 2. Compute and store
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let record = AddLogic::apply(&mut pool, d, counts)?;

        log::audit(
            &pool.conn,
            "add",
            &record.date_str(),
            &format!("Saved day, total billings {}", money(record.totals.grand_total)),
        );

        success(format!("Saved {}.", record.date_str()));
        print_totals(cfg, &record.totals);
    }

    Ok(())
}
