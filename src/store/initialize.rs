use crate::errors::AppResult;
use crate::store::migrate::run_pending_migrations;
use rusqlite::Connection;

/// Initialize the store file.
/// Delegates all schema creation / upgrades to the migration runner.
pub fn init_store(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}
