//! Read-side views over stored days: single-day breakdowns, week and month
//! groupings.

use crate::core::calculator::month::summarize_by_month;
use crate::core::calculator::week::group_by_work_week;
use crate::db::repository::DayRepository;
use crate::errors::{AppError, AppResult};
use crate::models::day::DayRecord;
use crate::models::line_item::{Category, DayLineItemRow};
use crate::models::month_summary::MonthSummary;
use crate::models::work_week::WorkWeek;
use chrono::NaiveDate;

/// A saved day with its billed (count > 0) line items.
#[derive(Debug, Clone)]
pub struct DayDetail {
    pub day: DayRecord,
    pub items: Vec<DayLineItemRow>,
}

/// Line items worth showing or exporting: zero counts are dropped.
pub fn billed_items(items: Vec<DayLineItemRow>) -> Vec<DayLineItemRow> {
    items.into_iter().filter(|i| i.count > 0).collect()
}

pub fn load_day_detail<R: DayRepository>(repo: &R, date: NaiveDate) -> AppResult<DayDetail> {
    let day = repo
        .get_day_by_date(date)?
        .ok_or_else(|| AppError::DayNotFound(date.format("%Y-%m-%d").to_string()))?;
    let items = billed_items(repo.list_line_items(day.id)?);
    Ok(DayDetail { day, items })
}

/// Group items by category. Categories appear in the order their first item
/// appears, so catalog order is kept.
pub fn group_by_category(items: &[DayLineItemRow]) -> Vec<(Category, Vec<&DayLineItemRow>)> {
    let mut groups: Vec<(Category, Vec<&DayLineItemRow>)> = Vec::new();
    for item in items {
        let cat = item.category();
        match groups.iter_mut().find(|(c, _)| *c == cat) {
            Some((_, members)) => members.push(item),
            None => groups.push((cat, vec![item])),
        }
    }
    groups
}

/// Days within `bounds`, or all days when `bounds` is `None`.
pub fn load_days<R: DayRepository>(
    repo: &R,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<DayRecord>> {
    match bounds {
        Some((start, end)) => repo.list_days_between(start, end),
        None => repo.list_days(),
    }
}

pub fn load_weeks<R: DayRepository>(
    repo: &R,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<WorkWeek>> {
    Ok(group_by_work_week(&load_days(repo, bounds)?))
}

pub fn load_month_summaries<R: DayRepository>(repo: &R) -> AppResult<Vec<MonthSummary>> {
    let days = repo.list_days()?;
    let budgets = repo.list_budgets()?;
    Ok(summarize_by_month(&days, &budgets))
}
