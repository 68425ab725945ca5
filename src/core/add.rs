use crate::core::calculator::totals::compute_totals;
use crate::db::repository::DayRepository;
use crate::errors::AppResult;
use crate::models::CountMap;
use crate::models::day::{DayRecord, NewDay};
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Compute the day's totals and store the day with its line items.
    ///
    /// A date that already has a record is refused with
    /// `AppError::DuplicateDate`; nothing is overwritten.
    pub fn apply<R: DayRepository>(
        repo: &mut R,
        date: NaiveDate,
        counts: CountMap,
    ) -> AppResult<DayRecord> {
        let totals = compute_totals(&counts);
        repo.create_day(&NewDay {
            date,
            counts,
            totals,
        })
    }
}
