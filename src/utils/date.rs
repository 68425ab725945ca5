//! Date and month parsing at the input boundary.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern"));
static MONTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("month pattern"));

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Strict `YYYY-MM-DD`: zero padded and a real calendar date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Strict `YYYY-MM` with month 01..=12. Returns the normalized key.
pub fn parse_month(s: &str) -> AppResult<String> {
    let caps = MONTH_RE
        .captures(s)
        .ok_or_else(|| AppError::InvalidMonth(s.to_string()))?;

    let month: u32 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidMonth(s.to_string()))?;

    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidMonth(s.to_string()));
    }

    Ok(s.to_string())
}

/// First and last day of a "YYYY-MM" month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next.pred_opt()?))
}

pub fn current_month_bounds() -> Option<(NaiveDate, NaiveDate)> {
    let t = today();
    month_bounds(t.year(), t.month())
}

pub fn month_name(month: &str) -> &'static str {
    match month {
        "01" => "January",
        "02" => "February",
        "03" => "March",
        "04" => "April",
        "05" => "May",
        "06" => "June",
        "07" => "July",
        "08" => "August",
        "09" => "September",
        "10" => "October",
        "11" => "November",
        "12" => "December",
        _ => "",
    }
}

pub fn weekday_short(date: NaiveDate) -> String {
    date.format("%a").to_string()
}
