//! Storage boundary for day records, their line items and monthly budgets.

use crate::core::catalog::CATALOG;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::budget::MonthlyBudget;
use crate::models::day::{DayRecord, NewDay};
use crate::models::line_item::DayLineItemRow;
use crate::models::totals::TotalsResult;
use chrono::{Local, NaiveDate};
use rusqlite::{ErrorCode, OptionalExtension, Row, params};

pub trait DayRepository {
    /// All days, ascending by date.
    fn list_days(&self) -> AppResult<Vec<DayRecord>>;

    /// Days with `start <= date <= end`, ascending by date.
    fn list_days_between(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<DayRecord>>;

    fn get_day(&self, id: i64) -> AppResult<Option<DayRecord>>;

    fn get_day_by_date(&self, date: NaiveDate) -> AppResult<Option<DayRecord>>;

    /// Store a day and its line items atomically.
    /// Fails with `AppError::DuplicateDate` if the date is already taken.
    fn create_day(&mut self, new_day: &NewDay) -> AppResult<DayRecord>;

    /// Delete a day and, by cascade, its line items.
    /// Returns `false` if no day has that id.
    fn delete_day(&mut self, id: i64) -> AppResult<bool>;

    /// Line items of a day, in catalog order.
    fn list_line_items(&self, day_id: i64) -> AppResult<Vec<DayLineItemRow>>;

    fn get_budget(&self, month: &str) -> AppResult<Option<MonthlyBudget>>;

    fn upsert_budget(&mut self, month: &str, amount: f64) -> AppResult<MonthlyBudget>;

    /// All budgets, ascending by month.
    fn list_budgets(&self) -> AppResult<Vec<MonthlyBudget>>;
}

const DAY_COLUMNS: &str = "id, date, created_at, total_minutes, total_hours, \
     amount_with_bbi, amount_without_bbi, loading_amount, grand_total";

fn map_day(row: &Row) -> rusqlite::Result<DayRecord> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(DayRecord {
        id: row.get("id")?,
        date,
        created_at: row.get("created_at")?,
        totals: TotalsResult {
            total_minutes: row.get("total_minutes")?,
            total_hours: row.get("total_hours")?,
            amount_with_bbi: row.get("amount_with_bbi")?,
            amount_without_bbi: row.get("amount_without_bbi")?,
            loading_amount: row.get("loading_amount")?,
            grand_total: row.get("grand_total")?,
        },
    })
}

fn map_line_item(row: &Row) -> rusqlite::Result<DayLineItemRow> {
    Ok(DayLineItemRow {
        id: row.get("id")?,
        day_id: row.get("day_id")?,
        item_key: row.get("item_key")?,
        label: row.get("label")?,
        minutes_per_unit: row.get("minutes_per_unit")?,
        base_amount: row.get("base_amount")?,
        bbi_amount: row.get("bbi_amount")?,
        count: row.get("count")?,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn date_str(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

impl DayRepository for DbPool {
    fn list_days(&self) -> AppResult<Vec<DayRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {DAY_COLUMNS} FROM days ORDER BY date ASC"))?;

        let rows = stmt.query_map([], map_day)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn list_days_between(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<DayRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {DAY_COLUMNS} FROM days
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date ASC"
        ))?;

        let rows = stmt.query_map(params![date_str(start), date_str(end)], map_day)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn get_day(&self, id: i64) -> AppResult<Option<DayRecord>> {
        let day = self
            .conn
            .query_row(
                &format!("SELECT {DAY_COLUMNS} FROM days WHERE id = ?1"),
                [id],
                map_day,
            )
            .optional()?;
        Ok(day)
    }

    fn get_day_by_date(&self, date: NaiveDate) -> AppResult<Option<DayRecord>> {
        let day = self
            .conn
            .query_row(
                &format!("SELECT {DAY_COLUMNS} FROM days WHERE date = ?1"),
                [date_str(date)],
                map_day,
            )
            .optional()?;
        Ok(day)
    }

    fn create_day(&mut self, new_day: &NewDay) -> AppResult<DayRecord> {
        let date = date_str(new_day.date);
        let created_at = Local::now().to_rfc3339();
        let t = &new_day.totals;

        // Dropping the transaction without commit rolls everything back, so a
        // refused date never leaves line items behind.
        let tx = self.conn.transaction()?;

        let inserted = tx.execute(
            "INSERT INTO days (date, created_at, total_minutes, total_hours,
                               amount_with_bbi, amount_without_bbi, loading_amount, grand_total)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                date,
                created_at,
                t.total_minutes,
                t.total_hours,
                t.amount_with_bbi,
                t.amount_without_bbi,
                t.loading_amount,
                t.grand_total,
            ],
        );

        match inserted {
            Err(e) if is_unique_violation(&e) => return Err(AppError::DuplicateDate(date)),
            Err(e) => return Err(e.into()),
            Ok(_) => {}
        }

        let day_id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare(
                "INSERT INTO day_line_items
                    (day_id, item_key, label, minutes_per_unit, base_amount, bbi_amount, count)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;

            for item in CATALOG {
                if let Some(&count) = new_day.counts.get(item.key) {
                    stmt.execute(params![
                        day_id,
                        item.key,
                        item.label,
                        item.minutes_per_unit,
                        item.base_amount,
                        item.bbi_amount,
                        count,
                    ])?;
                }
            }
        }

        tx.commit()?;

        Ok(DayRecord {
            id: day_id,
            date: new_day.date,
            created_at,
            totals: new_day.totals,
        })
    }

    fn delete_day(&mut self, id: i64) -> AppResult<bool> {
        let affected = self.conn.execute("DELETE FROM days WHERE id = ?1", [id])?;
        Ok(affected > 0)
    }

    fn list_line_items(&self, day_id: i64) -> AppResult<Vec<DayLineItemRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, day_id, item_key, label, minutes_per_unit, base_amount, bbi_amount, count
             FROM day_line_items
             WHERE day_id = ?1
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([day_id], map_line_item)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn get_budget(&self, month: &str) -> AppResult<Option<MonthlyBudget>> {
        let budget = self
            .conn
            .query_row(
                "SELECT month, budget_amount FROM monthly_budgets WHERE month = ?1",
                [month],
                |row| {
                    Ok(MonthlyBudget {
                        month: row.get(0)?,
                        budget_amount: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(budget)
    }

    fn upsert_budget(&mut self, month: &str, amount: f64) -> AppResult<MonthlyBudget> {
        self.conn.execute(
            "INSERT INTO monthly_budgets (month, budget_amount) VALUES (?1, ?2)
             ON CONFLICT(month) DO UPDATE SET budget_amount = excluded.budget_amount",
            params![month, amount],
        )?;

        Ok(MonthlyBudget {
            month: month.to_string(),
            budget_amount: amount,
        })
    }

    fn list_budgets(&self) -> AppResult<Vec<MonthlyBudget>> {
        let mut stmt = self
            .conn
            .prepare("SELECT month, budget_amount FROM monthly_budgets ORDER BY month ASC")?;

        let rows = stmt.query_map([], |row| {
            Ok(MonthlyBudget {
                month: row.get(0)?,
                budget_amount: row.get(1)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
