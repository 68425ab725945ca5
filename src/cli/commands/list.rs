use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::load_weeks;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::range::parse_optional_range;
use crate::models::totals::TotalsResult;
use crate::models::work_week::WorkWeek;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::formatting::{bold, money};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let bounds = resolve_period(period.as_deref())?;
        let pool = DbPool::open_existing(&cfg.database)?;
        let weeks = load_weeks(&pool, bounds)?;

        if weeks.is_empty() {
            info("No records found for the selected period.");
            return Ok(());
        }

        for week in &weeks {
            print_week(week, cfg);
        }

        let grand: TotalsResult = weeks.iter().map(|w| &w.totals).sum();
        let days: usize = weeks.iter().map(|w| w.days.len()).sum();
        println!(
            "\n{}",
            bold(&format!(
                "{} day(s) in {} week(s), total billings {}{}",
                days,
                weeks.len(),
                cfg.currency_symbol,
                money(grand.grand_total)
            ))
        );
    }
    Ok(())
}

/// No period → current month; "all" → no bounds.
fn resolve_period(period: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        Some(p) => parse_optional_range(Some(p)),
        None => date::current_month_bounds()
            .map(Some)
            .ok_or_else(|| AppError::InvalidPeriod("current month".to_string())),
    }
}

fn totals_cells(t: &TotalsResult) -> [String; 6] {
    [
        t.total_minutes.to_string(),
        t.total_hours.to_string(),
        money(t.amount_with_bbi),
        money(t.amount_without_bbi),
        money(t.loading_amount),
        money(t.grand_total),
    ]
}

fn print_week(week: &WorkWeek, cfg: &Config) {
    header(week.label());

    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::right("Minutes"),
        Column::right("Hours"),
        Column::right("With BBI"),
        Column::right("Without BBI"),
        Column::right("Loading"),
        Column::right("Total"),
    ])
    .with_separator(cfg.separator());

    for day in &week.days {
        let label = if cfg.show_weekday {
            format!("{} {}", day.date_str(), date::weekday_short(day.date))
        } else {
            day.date_str()
        };
        let mut row = vec![label];
        row.extend(totals_cells(&day.totals));
        table.add_row(row);
    }

    let mut total_row = vec!["Week total".to_string()];
    total_row.extend(totals_cells(&week.totals));
    table.add_row(total_row);

    print!("{}", table.render());
}
