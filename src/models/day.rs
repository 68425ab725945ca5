use super::totals::TotalsResult;
use super::CountMap;
use chrono::NaiveDate;
use serde::Serialize;

/// One saved day ⇔ one row of the `days` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub id: i64,
    pub date: NaiveDate,    // ⇔ days.date (TEXT "YYYY-MM-DD", UNIQUE)
    pub created_at: String, // ⇔ days.created_at (TEXT, ISO8601)
    #[serde(flatten)]
    pub totals: TotalsResult,
}

impl DayRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Input of `DayRepository::create_day`: the counts to snapshot and the
/// totals already computed from them.
#[derive(Debug, Clone)]
pub struct NewDay {
    pub date: NaiveDate,
    pub counts: CountMap,
    pub totals: TotalsResult,
}
