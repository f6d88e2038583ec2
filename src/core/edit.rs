use crate::errors::{AppError, AppResult};
use crate::models::equipment::EquipmentType;
use crate::models::location::Location;
use crate::models::record::MaintenanceRecord;
use crate::store::pool::StorePool;
use crate::store::records;
use chrono::{NaiveDate, NaiveTime};

/// Field overrides for an existing record. Unset fields keep their value;
/// the storage layer always receives a full replacement record.
#[derive(Debug, Default)]
pub struct EditPatch {
    pub technician: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: Option<Location>,
    pub sector: Option<String>,
    pub equipment_type: Option<EquipmentType>,
    pub equipment_order: Option<String>,
    pub notes: Option<String>,
    pub audio_note: Option<String>,
}

pub struct EditLogic;

impl EditLogic {
    pub fn apply(pool: &StorePool, id: &str, patch: EditPatch) -> AppResult<MaintenanceRecord> {
        let records = records::get_all(pool)?;
        let mut record = records
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::RecordNotFound(id.to_string()))?;

        if let Some(v) = patch.technician {
            record.technician = v;
        }
        if let Some(v) = patch.date {
            record.date = v;
        }
        if let Some(v) = patch.time {
            record.time = v;
        }
        if let Some(v) = patch.location {
            record.location = v;
        }
        if let Some(v) = patch.sector {
            record.sector = Some(v).filter(|s| !s.trim().is_empty());
        }
        if let Some(v) = patch.equipment_type {
            record.equipment_type = v;
        }
        if let Some(v) = patch.equipment_order {
            record.equipment_order = v;
        }
        if let Some(v) = patch.notes {
            record.notes = Some(v).filter(|s| !s.trim().is_empty());
        }
        if let Some(v) = patch.audio_note {
            record.audio_note = Some(v);
        }

        records::update(pool, record.clone())?;
        Ok(record)
    }
}
