use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{group_by_category, load_day_detail};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::totals::TotalsResult;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::formatting::{bold, mins2readable, money, money_with};
use crate::utils::table::{Column, Table};

/// Totals block shared by `add` and `show`.
pub(crate) fn print_totals(cfg: &Config, totals: &TotalsResult) {
    let sym = cfg.currency_symbol.as_str();
    println!(
        "Total minutes      : {} ({})",
        totals.total_minutes,
        mins2readable(totals.total_minutes)
    );
    println!("Total hours        : {}", totals.total_hours);
    println!("Prelim with BBI    : {}", money_with(sym, totals.amount_with_bbi));
    println!("Prelim without BBI : {}", money_with(sym, totals.amount_without_bbi));
    println!("Loading (6.25%)    : {}", money_with(sym, totals.loading_amount));
    println!(
        "{}",
        bold(&format!(
            "Total billings     : {}",
            money_with(sym, totals.grand_total)
        ))
    );
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date: date_str } = cmd {
        let d = date::require_date(date_str)?;
        let pool = DbPool::open_existing(&cfg.database)?;
        let detail = load_day_detail(&pool, d)?;

        if cfg.show_weekday {
            header(format!("{} ({})", detail.day.date_str(), date::weekday_short(d)));
        } else {
            header(detail.day.date_str());
        }

        if detail.items.is_empty() {
            info("No items billed on this day.");
        }

        for (category, items) in group_by_category(&detail.items) {
            println!("\n{}", bold(category.title()));

            let mut table = Table::new(vec![
                Column::left("Item"),
                Column::right("Min"),
                Column::right("Base"),
                Column::right("BBI"),
                Column::right("Count"),
                Column::right("Subtotal"),
            ])
            .with_separator(cfg.separator());

            for item in items {
                table.add_row(vec![
                    item.label.clone(),
                    item.minutes_per_unit.to_string(),
                    money(item.base_amount),
                    money(item.bbi_amount),
                    item.count.to_string(),
                    money(item.subtotal()),
                ]);
            }

            print!("{}", table.render());
        }

        println!();
        print_totals(cfg, &detail.day.totals);
    }

    Ok(())
}
