//! Store adapter for the maintenance-record collection.
//!
//! Every operation is a whole-collection read-modify-write: load the JSON
//! array under `maintenance_records_v1`, apply one change, write the array
//! back, return the new authoritative collection. No partial writes.

use crate::errors::AppResult;
use crate::models::record::MaintenanceRecord;
use crate::store::kv::{self, RECORDS_KEY};
use crate::store::log::write_log;
use crate::store::pool::StorePool;

/// Load the full collection. An absent or unparseable value yields an empty
/// collection; the parse failure is logged, never propagated.
pub fn get_all(pool: &StorePool) -> AppResult<Vec<MaintenanceRecord>> {
    let Some(raw) = kv::get(pool, RECORDS_KEY)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(records) => Ok(records),
        Err(e) => {
            write_log(pool, "load", RECORDS_KEY, &format!("parse failure: {e}"))?;
            Ok(Vec::new())
        }
    }
}

fn persist(pool: &StorePool, records: &[MaintenanceRecord]) -> AppResult<()> {
    kv::set(pool, RECORDS_KEY, &serde_json::to_string(records)?)
}

/// Append one record and return the new full collection.
pub fn create(pool: &StorePool, record: MaintenanceRecord) -> AppResult<Vec<MaintenanceRecord>> {
    let mut records = get_all(pool)?;
    let id = record.id.clone();
    records.push(record);
    persist(pool, &records)?;
    write_log(pool, "create", &id, "record appended")?;
    Ok(records)
}

/// Replace the record with matching id. Silent no-op when the id is unknown.
pub fn update(pool: &StorePool, updated: MaintenanceRecord) -> AppResult<Vec<MaintenanceRecord>> {
    let mut records = get_all(pool)?;
    let mut replaced = false;
    for slot in records.iter_mut() {
        if slot.id == updated.id {
            *slot = updated.clone();
            replaced = true;
        }
    }
    persist(pool, &records)?;
    if replaced {
        write_log(pool, "update", &updated.id, "record replaced")?;
    }
    Ok(records)
}

/// Remove the record with matching id and return the new collection.
pub fn delete_by_id(pool: &StorePool, id: &str) -> AppResult<Vec<MaintenanceRecord>> {
    let mut records = get_all(pool)?;
    let before = records.len();
    records.retain(|r| r.id != id);
    persist(pool, &records)?;
    if records.len() < before {
        write_log(pool, "delete", id, "record removed")?;
    }
    Ok(records)
}
