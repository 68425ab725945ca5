//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database not found: {0} (run `rbilllog init` first)")]
    DatabaseNotFound(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid count: {0}")]
    InvalidCount(String),

    #[error("Unknown item key: {0}")]
    UnknownItem(String),

    #[error("Invalid budget amount: {0}")]
    InvalidBudget(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("{0} is not a Monday")]
    NotAMonday(String),

    // ---------------------------
    // Conflict / lookup errors
    // ---------------------------
    #[error("A record already exists for {0}")]
    DuplicateDate(String),

    #[error("No record found for {0}")]
    DayNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
