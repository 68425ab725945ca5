//! CSV layouts for a single day and for bulk (work-week) exports.
//!
//! The column set and the trailing summary block are consumed by
//! spreadsheets downstream and must keep exactly this shape.

use crate::errors::{AppError, AppResult};
use crate::models::day::DayRecord;
use crate::models::line_item::DayLineItemRow;
use crate::models::totals::TotalsResult;
use crate::models::work_week::WorkWeek;
use crate::utils::money;
use std::collections::HashMap;

pub const DAY_HEADER: [&str; 7] = [
    "Date",
    "Item",
    "Minutes per Item",
    "Base Amount",
    "BBI Amount",
    "Count",
    "Subtotal",
];

fn writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn into_string(wtr: csv::Writer<Vec<u8>>) -> AppResult<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

fn item_fields(date: &str, item: &DayLineItemRow) -> [String; 7] {
    [
        date.to_string(),
        item.label.clone(),
        item.minutes_per_unit.to_string(),
        money(item.base_amount),
        money(item.bbi_amount),
        item.count.to_string(),
        money(item.subtotal()),
    ]
}

/// Blank line, `Summary`, then one `label,value` line per total.
pub fn summary_block(totals: &TotalsResult) -> String {
    format!(
        "\nSummary\n\
         Total Minutes,{}\n\
         Total Hours,{}\n\
         Prelim with BBI,{}\n\
         Prelim without BBI,{}\n\
         Loading (6.25%),{}\n\
         Total Billings,{}\n",
        totals.total_minutes,
        totals.total_hours,
        money(totals.amount_with_bbi),
        money(totals.amount_without_bbi),
        money(totals.loading_amount),
        money(totals.grand_total),
    )
}

/// CSV for one day. Items with a zero count are skipped.
pub fn build_day_csv(day: &DayRecord, items: &[DayLineItemRow]) -> AppResult<String> {
    let date = day.date_str();
    let mut wtr = writer();

    wtr.write_record(DAY_HEADER)?;
    for item in items.iter().filter(|i| i.count > 0) {
        wtr.write_record(item_fields(&date, item))?;
    }

    let mut out = into_string(wtr)?;
    out.push_str(&summary_block(&day.totals));
    Ok(out)
}

/// CSV for several weeks: each row is prefixed with its week label, and the
/// summary covers every exported day.
pub fn build_bulk_csv(
    weeks: &[WorkWeek],
    items_by_day: &HashMap<i64, Vec<DayLineItemRow>>,
) -> AppResult<String> {
    let mut wtr = writer();

    let mut header = vec!["Week"];
    header.extend(DAY_HEADER);
    wtr.write_record(&header)?;

    for week in weeks {
        let label = week.label();
        for day in &week.days {
            let date = day.date_str();
            let Some(items) = items_by_day.get(&day.id) else {
                continue;
            };
            for item in items.iter().filter(|i| i.count > 0) {
                let fields = item_fields(&date, item);
                wtr.write_record(std::iter::once(label.as_str()).chain(fields.iter().map(String::as_str)))?;
            }
        }
    }

    let totals: TotalsResult = weeks.iter().map(|w| &w.totals).sum();

    let mut out = into_string(wtr)?;
    out.push_str(&summary_block(&totals));
    Ok(out)
}
