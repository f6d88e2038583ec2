//! Store adapter for the shift-assignment collection.

use crate::errors::AppResult;
use crate::models::shift::Shift;
use crate::store::kv::{self, SHIFTS_KEY};
use crate::store::log::write_log;
use crate::store::pool::StorePool;
use std::collections::HashMap;

pub fn get_all(pool: &StorePool) -> AppResult<Vec<Shift>> {
    let Some(raw) = kv::get(pool, SHIFTS_KEY)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(shifts) => Ok(shifts),
        Err(e) => {
            write_log(pool, "load", SHIFTS_KEY, &format!("parse failure: {e}"))?;
            Ok(Vec::new())
        }
    }
}

/// Merge `new_shifts` into the stored collection keyed by (date, shiftType):
/// an incoming shift overwrites the stored entry sharing its key, otherwise
/// it is appended. The unioned result is persisted and returned.
pub fn save_shifts(pool: &StorePool, new_shifts: Vec<Shift>) -> AppResult<Vec<Shift>> {
    let mut merged = get_all(pool)?;
    let mut index: HashMap<_, usize> = merged
        .iter()
        .enumerate()
        .map(|(i, s)| (s.merge_key(), i))
        .collect();

    let incoming = new_shifts.len();
    for shift in new_shifts {
        match index.get(&shift.merge_key()) {
            Some(&i) => merged[i] = shift,
            None => {
                index.insert(shift.merge_key(), merged.len());
                merged.push(shift);
            }
        }
    }

    kv::set(pool, SHIFTS_KEY, &serde_json::to_string(&merged)?)?;
    write_log(
        pool,
        "save_shifts",
        SHIFTS_KEY,
        &format!("merged {incoming} incoming, {} total", merged.len()),
    )?;
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::{ShiftRole, ShiftType};
    use crate::store::initialize::init_store;
    use chrono::NaiveDate;
    use rusqlite::Connection;

    fn mem_pool() -> StorePool {
        let conn = Connection::open_in_memory().unwrap();
        init_store(&conn).unwrap();
        StorePool { conn }
    }

    fn shift(name: &str, shift_type: Option<ShiftType>) -> Shift {
        Shift {
            date: NaiveDate::from_ymd_opt(2024, 12, 17).unwrap(),
            name: name.into(),
            role: Some(ShiftRole::Supervisor),
            shift_type,
            location: None,
        }
    }

    #[test]
    fn same_key_keeps_last_saved_name() {
        let pool = mem_pool();

        save_shifts(&pool, vec![shift("Julio Pérez", Some(ShiftType::Night))]).unwrap();
        let merged =
            save_shifts(&pool, vec![shift("Eduardo Leal", Some(ShiftType::Night))]).unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Eduardo Leal");
    }

    #[test]
    fn different_shift_type_appends() {
        let pool = mem_pool();

        save_shifts(&pool, vec![shift("Julio Pérez", Some(ShiftType::Night))]).unwrap();
        let merged = save_shifts(&pool, vec![shift("Julio Pérez", Some(ShiftType::Day))]).unwrap();

        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_survives_reload() {
        let pool = mem_pool();
        save_shifts(
            &pool,
            vec![
                shift("A", Some(ShiftType::Day)),
                shift("B", Some(ShiftType::Night)),
            ],
        )
        .unwrap();

        assert_eq!(get_all(&pool).unwrap().len(), 2);
    }
}
