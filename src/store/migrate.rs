use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Schema history, one batch per version. `PRAGMA user_version` tracks the
/// last applied entry.
const MIGRATIONS: &[&str] = &[
    // v1: key-value collections + internal audit log
    r#"
    CREATE TABLE IF NOT EXISTS kv (
        key   TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS log (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        date      TEXT NOT NULL,
        operation TEXT NOT NULL,
        target    TEXT DEFAULT '',
        message   TEXT NOT NULL
    );
    "#,
];

pub fn current_version(conn: &Connection) -> AppResult<i64> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

/// Apply every migration newer than the file's `user_version`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current = current_version(conn)?;

    for (i, batch) in MIGRATIONS.iter().enumerate() {
        let version = (i + 1) as i64;
        if version <= current {
            continue;
        }

        conn.execute_batch(batch)
            .map_err(|e| AppError::Migration(format!("migration v{version} failed: {e}")))?;
        conn.pragma_update(None, "user_version", version)?;
    }

    Ok(())
}
