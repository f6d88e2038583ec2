use crate::errors::AppResult;
use crate::store::pool::StorePool;
use chrono::Local;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn write_log(pool: &StorePool, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    pool.conn
        .prepare_cached(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, ?2, ?3, ?4)",
        )?
        .execute(params![now, operation, target, message])?;

    Ok(())
}

pub fn load_log(pool: &StorePool) -> AppResult<Vec<(String, String, String, String)>> {
    let mut stmt = pool.conn.prepare(
        "SELECT date, operation, target, message FROM log ORDER BY date DESC, id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
