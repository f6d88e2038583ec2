use crate::errors::AppResult;
use crate::models::record::MaintenanceRecord;
use crate::store::pool::StorePool;
use crate::store::records;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &StorePool, id: &str) -> AppResult<Vec<MaintenanceRecord>> {
        records::delete_by_id(pool, id)
    }
}

/// Resolve the target of a voice-driven delete: date equality plus
/// case-insensitive substring containment on the equipment identifier.
/// The first match wins; an empty fragment matches nothing.
pub fn resolve_voice_target<'a>(
    records: &'a [MaintenanceRecord],
    date: NaiveDate,
    equipment_fragment: &str,
) -> Option<&'a MaintenanceRecord> {
    let fragment = equipment_fragment.trim().to_lowercase();
    if fragment.is_empty() {
        return None;
    }

    records
        .iter()
        .find(|r| r.date == date && r.equipment_order.to_lowercase().contains(&fragment))
}
