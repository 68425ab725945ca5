//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::schema::ensure_schema;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database file, enable foreign keys and make sure the schema
    /// is in place.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Self::from_connection(conn)
    }

    /// Like `new`, but refuses to create a database that does not exist yet.
    pub fn open_existing(path: &str) -> AppResult<Self> {
        if !Path::new(path).is_file() {
            return Err(AppError::DatabaseNotFound(path.to_string()));
        }
        Self::new(path)
    }

    /// Private in-memory database, used by tests.
    pub fn in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        // Cascading deletes of day_line_items depend on this; SQLite keeps it
        // off per connection by default.
        conn.pragma_update(None, "foreign_keys", true)?;
        ensure_schema(&conn)?;
        Ok(Self { conn })
    }
}
