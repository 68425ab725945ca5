use crate::errors::AppResult;
use crate::models::line_item::DayLineItemRow;
use crate::models::totals::TotalsResult;
use crate::models::work_week::WorkWeek;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize)]
struct DayExport<'a> {
    date: String,
    created_at: &'a str,
    totals: TotalsResult,
    items: Vec<&'a DayLineItemRow>,
}

#[derive(Serialize)]
struct WeekExport<'a> {
    week: String,
    monday: String,
    sunday: String,
    totals: TotalsResult,
    days: Vec<DayExport<'a>>,
}

/// Pretty JSON: weeks (most recent first) → days → billed items.
pub fn build_json(
    weeks: &[WorkWeek],
    items_by_day: &HashMap<i64, Vec<DayLineItemRow>>,
) -> AppResult<String> {
    let export: Vec<WeekExport> = weeks
        .iter()
        .map(|w| WeekExport {
            week: w.label(),
            monday: w.monday.format("%Y-%m-%d").to_string(),
            sunday: w.sunday.format("%Y-%m-%d").to_string(),
            totals: w.totals,
            days: w
                .days
                .iter()
                .map(|d| DayExport {
                    date: d.date_str(),
                    created_at: &d.created_at,
                    totals: d.totals,
                    items: items_by_day
                        .get(&d.id)
                        .map(|items| items.iter().filter(|i| i.count > 0).collect())
                        .unwrap_or_default(),
                })
                .collect(),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&export)?)
}
