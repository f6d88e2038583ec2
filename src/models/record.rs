use super::{equipment::EquipmentType, location::Location};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One maintenance event tied to a date, location, equipment and technician.
/// Field names follow the persisted JSON layout (camelCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: String, // opaque, immutable after creation
    pub technician: String,
    pub date: NaiveDate, // "YYYY-MM-DD", primary grouping key
    #[serde(with = "crate::utils::time::hhmm")]
    pub time: NaiveTime, // "HH:MM", same-day ordering only
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    pub equipment_type: EquipmentType,
    pub equipment_order: String, // conventionally "1, 2, 3"; no uniqueness enforced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_note: Option<String>, // data URI
}

impl MaintenanceRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        technician: String,
        date: NaiveDate,
        time: NaiveTime,
        location: Location,
        sector: Option<String>,
        equipment_type: EquipmentType,
        equipment_order: String,
        notes: Option<String>,
        audio_note: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            technician,
            date,
            time,
            location,
            sector,
            equipment_type,
            equipment_order,
            notes,
            audio_note,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// "YYYY-MM" key the month filter groups by.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// date + time combine to the total sort order.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MaintenanceRecord {
        MaintenanceRecord::new(
            "José Krause".into(),
            NaiveDate::from_ymd_opt(2024, 7, 9).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            Location::Marina,
            Some("Ripley".into()),
            EquipmentType::Elevator,
            "1, 2".into(),
            None,
            None,
        )
    }

    #[test]
    fn serializes_with_persisted_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["date"], "2024-07-09");
        assert_eq!(json["time"], "10:30");
        assert_eq!(json["location"], "Marina");
        assert_eq!(json["equipmentType"], "Ascensor");
        assert_eq!(json["equipmentOrder"], "1, 2");
        assert!(json.get("notes").is_none());
        assert!(json.get("audioNote").is_none());
    }

    #[test]
    fn deserializes_with_missing_optionals() {
        let json = r#"{
            "id": "abc",
            "technician": "Julio Pérez",
            "date": "2024-03-05",
            "time": "10:00",
            "location": "Boulevard",
            "equipmentType": "Escalera Mecánica",
            "equipmentOrder": "3"
        }"#;
        let rec: MaintenanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.month_key(), "2024-03");
        assert!(rec.sector.is_none());
        assert!(rec.audio_note.is_none());
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(sample().id, sample().id);
    }
}
