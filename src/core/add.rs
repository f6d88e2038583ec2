use crate::errors::{AppError, AppResult};
use crate::models::equipment::EquipmentType;
use crate::models::location::Location;
use crate::models::record::MaintenanceRecord;
use crate::store::pool::StorePool;
use crate::store::records;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        pool: &StorePool,
        technician: String,
        date: NaiveDate,
        time: NaiveTime,
        location: Location,
        sector: Option<String>,
        equipment_type: EquipmentType,
        equipment_order: String,
        notes: Option<String>,
        audio_note: Option<String>,
    ) -> AppResult<MaintenanceRecord> {
        // Required-field checks block submission; everything else is accepted
        // as-is (no referential integrity against the master inventory).
        if technician.trim().is_empty() {
            return Err(AppError::MissingField("technician"));
        }
        if equipment_order.trim().is_empty() {
            return Err(AppError::MissingField("equipment"));
        }

        let record = MaintenanceRecord::new(
            technician,
            date,
            time,
            location,
            sector.filter(|s| !s.trim().is_empty()),
            equipment_type,
            equipment_order,
            notes.filter(|s| !s.trim().is_empty()),
            audio_note,
        );

        records::create(pool, record.clone())?;
        Ok(record)
    }
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
    fn blank_technician_is_rejected() {
        let pool = mem_pool();
        let err = AddLogic::apply(
            &pool,
            "  ".into(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            Location::Marina,
            None,
            EquipmentType::Elevator,
            "1, 2".into(),
            None,
            None,
        )
        .unwrap_err();

        assert!(matches!(err, AppError::MissingField("technician")));
        assert!(records::get_all(&pool).unwrap().is_empty());
    }

    #[test]
    fn empty_optional_fields_are_normalized_away() {
        let pool = mem_pool();
        let rec = AddLogic::apply(
            &pool,
            "X".into(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            Location::Marina,
            Some("".into()),
            EquipmentType::Elevator,
            "1, 2".into(),
            Some("  ".into()),
            None,
        )
        .unwrap();

        assert!(rec.sector.is_none());
        assert!(rec.notes.is_none());
        assert_eq!(records::get_all(&pool).unwrap().len(), 1);
    }
}
