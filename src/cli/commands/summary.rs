use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::load_month_summaries;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date::month_name;
use crate::utils::formatting::money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Summary) {
        let pool = DbPool::open_existing(&cfg.database)?;
        let months = load_month_summaries(&pool)?;

        if months.is_empty() {
            info("No records saved yet.");
            return Ok(());
        }

        header("Monthly summary");

        let mut table = Table::new(vec![
            Column::left("Month"),
            Column::right("Days"),
            Column::right("Hours"),
            Column::right("Total Billings"),
            Column::right("Budget"),
            Column::left("Status"),
        ])
        .with_separator(cfg.separator());

        for m in &months {
            let name = m
                .month
                .split_once('-')
                .map(|(y, mm)| format!("{} {}", month_name(mm), y))
                .unwrap_or_else(|| m.month.clone());

            let status = match &m.status {
                Some(s) => format!("{}{}{}", color_for_status(Some(s)), s.label(), RESET),
                None => format!("{}no budget{}", color_for_status(None), RESET),
            };

            table.add_row(vec![
                format!("{} ({})", m.month, name),
                m.day_count.to_string(),
                m.totals.total_hours.to_string(),
                money(m.totals.grand_total),
                m.budget.map(money).unwrap_or_else(|| "-".to_string()),
                status,
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
