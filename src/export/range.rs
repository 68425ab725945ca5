// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_bounds;
use chrono::NaiveDate;

/// Inclusive bounds of a single period token: `YYYY`, `YYYY-MM` or
/// `YYYY-MM-DD`.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 if p.as_bytes()[4] == b'-' => {
            let y: i32 = p[0..4].parse().ok()?;
            let m: u32 = p[5..7].parse().ok()?;
            month_bounds(y, m)
        }
        10 => {
            let d = crate::utils::date::parse_date(p)?;
            Some((d, d))
        }
        _ => None,
    }
}

/// Parse --period / --range (year / month / day / range).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(r.to_string());

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "{r} (start and end must have the same format)"
            )));
        }

        let (from, _) = period_bounds(start).ok_or_else(invalid)?;
        let (_, to) = period_bounds(end).ok_or_else(invalid)?;

        if from > to {
            return Err(AppError::InvalidPeriod(format!("{r} (start is after end)")));
        }
        Ok((from, to))
    } else {
        period_bounds(r.trim()).ok_or_else(invalid)
    }
}

/// `None` or `"all"` → no bounds.
pub fn parse_optional_range(r: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match r {
        None => Ok(None),
        Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => parse_range(r).map(Some),
    }
}
