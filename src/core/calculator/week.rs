use crate::errors::{AppError, AppResult};
use crate::models::day::DayRecord;
use crate::models::work_week::WorkWeek;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// Monday on or before `date`. A Sunday belongs to the week that started six
/// days earlier.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    date - Duration::days(i64::from(offset))
}

/// Sunday closing the week that starts on `monday`.
pub fn sunday_of(monday: NaiveDate) -> AppResult<NaiveDate> {
    if monday.weekday() != Weekday::Mon {
        return Err(AppError::NotAMonday(monday.format("%Y-%m-%d").to_string()));
    }
    Ok(monday + Duration::days(6))
}

/// (Monday, Sunday) of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = monday_of(date);
    (monday, monday + Duration::days(6))
}

/// Bucket days by work week.
///
/// Days inside a week are ascending by date; weeks are returned most recent
/// first. Week totals are the field-wise sum of the stored day totals.
pub fn group_by_work_week(days: &[DayRecord]) -> Vec<WorkWeek> {
    let mut buckets: BTreeMap<NaiveDate, Vec<DayRecord>> = BTreeMap::new();

    for day in days {
        buckets
            .entry(monday_of(day.date))
            .or_default()
            .push(day.clone());
    }

    buckets
        .into_iter()
        .rev()
        .map(|(monday, mut members)| {
            members.sort_by_key(|d| d.date);
            let totals = members.iter().map(|d| &d.totals).sum();
            let (_, sunday) = week_bounds(monday);
            WorkWeek {
                monday,
                sunday,
                days: members,
                totals,
            }
        })
        .collect()
}
