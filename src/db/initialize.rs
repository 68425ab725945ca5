use crate::db::schema::ensure_schema;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Returns `true` when the schema was created from scratch.
pub fn init_db(conn: &Connection) -> AppResult<bool> {
    conn.pragma_update(None, "foreign_keys", true)?;
    Ok(ensure_schema(conn)?)
}
