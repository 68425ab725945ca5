// src/export/logic.rs

use crate::core::report::{billed_items, load_day_detail, load_weeks};
use crate::db::pool::DbPool;
use crate::db::repository::DayRepository;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::range::parse_optional_range;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::models::line_item::DayLineItemRow;
use crate::models::work_week::WorkWeek;
use crate::ui::messages::{info, warning};
use crate::utils::date::require_date;
use crate::utils::path::expand_tilde;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// What to export.
pub enum ExportScope<'a> {
    /// A single day, by date.
    Day(&'a str),
    /// Every day in a period (`None` / "all" → whole archive), by work week.
    Range(Option<&'a str>),
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Build the export text for `scope` in `format`.
    ///
    /// Returns `None` when there is nothing to export.
    pub fn render<R: DayRepository>(
        repo: &R,
        format: ExportFormat,
        scope: &ExportScope,
    ) -> AppResult<Option<String>> {
        match scope {
            ExportScope::Day(date) => {
                let date = require_date(date)?;
                let detail = load_day_detail(repo, date)?;
                let text = match format {
                    ExportFormat::Csv => csv::build_day_csv(&detail.day, &detail.items)?,
                    ExportFormat::Json => {
                        let week = crate::core::calculator::week::group_by_work_week(
                            std::slice::from_ref(&detail.day),
                        );
                        let items = HashMap::from([(detail.day.id, detail.items)]);
                        json::build_json(&week, &items)?
                    }
                };
                Ok(Some(text))
            }
            ExportScope::Range(range) => {
                let bounds = parse_optional_range(*range)?;
                let weeks = load_weeks(repo, bounds)?;
                if weeks.is_empty() {
                    return Ok(None);
                }
                let items = load_items(repo, &weeks)?;
                let text = match format {
                    ExportFormat::Csv => csv::build_bulk_csv(&weeks, &items)?,
                    ExportFormat::Json => json::build_json(&weeks, &items)?,
                };
                Ok(Some(text))
            }
        }
    }

    /// Export to `file` (absolute path required). Returns `true` if a file was
    /// written.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        scope: &ExportScope,
        force: bool,
    ) -> AppResult<bool> {
        let path: PathBuf = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let Some(text) = Self::render(pool, format, scope)? else {
            warning("No records found for selected range.");
            return Ok(false);
        };

        ensure_writable(&path, force)?;

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        fs::write(&path, text)?;

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(true)
    }
}

/// Billed line items for every day in `weeks`, keyed by day id.
fn load_items<R: DayRepository>(
    repo: &R,
    weeks: &[WorkWeek],
) -> AppResult<HashMap<i64, Vec<DayLineItemRow>>> {
    let mut out = HashMap::new();
    for day in weeks.iter().flat_map(|w| &w.days) {
        out.insert(day.id, billed_items(repo.list_line_items(day.id)?));
    }
    Ok(out)
}
