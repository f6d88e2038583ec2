//! Whole-value key-value access, the same shape browsers use to back their
//! persistent stores: every write replaces the stored value entirely.

use crate::errors::AppResult;
use crate::store::pool::StorePool;
use rusqlite::{OptionalExtension, params};

pub const RECORDS_KEY: &str = "maintenance_records_v1";
pub const SHIFTS_KEY: &str = "shifts_schedule_v1";
pub const THEME_KEY: &str = "theme";

pub fn get(pool: &StorePool, key: &str) -> AppResult<Option<String>> {
    let value = pool
        .conn
        .prepare_cached("SELECT value FROM kv WHERE key = ?1")?
        .query_row([key], |row| row.get::<_, String>(0))
        .optional()?;
    Ok(value)
}

pub fn set(pool: &StorePool, key: &str, value: &str) -> AppResult<()> {
    pool.conn
        .prepare_cached(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )?
        .execute(params![key, value])?;
    Ok(())
}

/// Theme preference, independent of the record collections.
pub fn get_theme(pool: &StorePool) -> AppResult<String> {
    Ok(get(pool, THEME_KEY)?.unwrap_or_else(|| "dark".to_string()))
}

pub fn set_theme(pool: &StorePool, theme: &str) -> AppResult<()> {
    set(pool, THEME_KEY, theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::initialize::init_store;
    use rusqlite::Connection;

    fn mem_pool() -> StorePool {
        let conn = Connection::open_in_memory().unwrap();
        init_store(&conn).unwrap();
        StorePool { conn }
    }

    #[test]
    fn set_overwrites_whole_value() {
        let pool = mem_pool();
        assert_eq!(get(&pool, "k").unwrap(), None);

        set(&pool, "k", "[1]").unwrap();
        set(&pool, "k", "[1,2]").unwrap();
        assert_eq!(get(&pool, "k").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn theme_defaults_to_dark() {
        let pool = mem_pool();
        assert_eq!(get_theme(&pool).unwrap(), "dark");
        set_theme(&pool, "light").unwrap();
        assert_eq!(get_theme(&pool).unwrap(), "light");
    }
}
