use rusqlite::{Connection, OptionalExtension, Result};

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create every table the application uses. Idempotent.
///
/// Returns `true` when the `days` table had to be created, i.e. on a fresh
/// database.
pub fn ensure_schema(conn: &Connection) -> Result<bool> {
    let fresh = !table_exists(conn, "days")?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS days (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            date               TEXT NOT NULL UNIQUE,
            created_at         TEXT NOT NULL,
            total_minutes      INTEGER NOT NULL DEFAULT 0,
            total_hours        INTEGER NOT NULL DEFAULT 0,
            amount_with_bbi    REAL NOT NULL DEFAULT 0,
            amount_without_bbi REAL NOT NULL DEFAULT 0,
            loading_amount     REAL NOT NULL DEFAULT 0,
            grand_total        REAL NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS day_line_items (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            day_id           INTEGER NOT NULL REFERENCES days(id) ON DELETE CASCADE,
            item_key         TEXT NOT NULL,
            label            TEXT NOT NULL,
            minutes_per_unit INTEGER NOT NULL DEFAULT 0,
            base_amount      REAL NOT NULL DEFAULT 0,
            bbi_amount       REAL NOT NULL DEFAULT 0,
            count            INTEGER NOT NULL DEFAULT 0 CHECK(count >= 0),
            UNIQUE(day_id, item_key)
        );

        CREATE INDEX IF NOT EXISTS idx_day_line_items_day ON day_line_items(day_id);

        CREATE TABLE IF NOT EXISTS monthly_budgets (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            month         TEXT NOT NULL UNIQUE,
            budget_amount REAL NOT NULL CHECK(budget_amount >= 0)
        );
        "#,
    )?;

    Ok(fresh)
}
