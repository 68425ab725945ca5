use crate::db::repository::DayRepository;
use crate::errors::{AppError, AppResult};
use crate::models::day::DayRecord;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the record saved for `date`, line items included.
    pub fn apply<R: DayRepository>(repo: &mut R, date: NaiveDate) -> AppResult<DayRecord> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let day = repo
            .get_day_by_date(date)?
            .ok_or_else(|| AppError::DayNotFound(date_str.clone()))?;

        if !repo.delete_day(day.id)? {
            return Err(AppError::DayNotFound(date_str));
        }

        Ok(day)
    }
}
