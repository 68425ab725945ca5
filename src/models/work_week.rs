use super::day::DayRecord;
use super::totals::TotalsResult;
use chrono::NaiveDate;
use serde::Serialize;

/// Monday–Sunday bucket of saved days. Identified by its Monday only.
#[derive(Debug, Clone, Serialize)]
pub struct WorkWeek {
    pub monday: NaiveDate,
    pub sunday: NaiveDate,
    pub days: Vec<DayRecord>,
    pub totals: TotalsResult,
}

impl WorkWeek {
    /// "<monday> to <sunday>", as used in listings and bulk export.
    pub fn label(&self) -> String {
        format!(
            "{} to {}",
            self.monday.format("%Y-%m-%d"),
            self.sunday.format("%Y-%m-%d")
        )
    }
}
