use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftRole {
    Supervisor,
    #[serde(rename = "Técnico", alias = "Tecnico")]
    Technician,
}

impl ShiftRole {
    pub fn label(&self) -> &'static str {
        match self {
            ShiftRole::Supervisor => "Supervisor",
            ShiftRole::Technician => "Técnico",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    #[serde(rename = "Día", alias = "Dia")]
    Day,
    #[serde(rename = "Noche")]
    Night,
}

impl ShiftType {
    pub fn label(&self) -> &'static str {
        match self {
            ShiftType::Day => "Día",
            ShiftType::Night => "Noche",
        }
    }
}

/// One person assigned to a date and a day/night period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub date: NaiveDate,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ShiftRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_type: Option<ShiftType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Shift {
    /// Identity key for merge/overwrite purposes.
    pub fn merge_key(&self) -> (NaiveDate, Option<ShiftType>) {
        (self.date, self.shift_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_extracted_shift_json() {
        let json = r#"{
            "date": "2024-12-17",
            "name": "Julio Pérez",
            "role": "Técnico",
            "shiftType": "Noche"
        }"#;
        let s: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(s.shift_type, Some(ShiftType::Night));
        assert_eq!(s.role, Some(ShiftRole::Technician));
    }

    #[test]
    fn accent_free_aliases_are_accepted() {
        let s: Shift =
            serde_json::from_str(r#"{"date":"2024-12-18","name":"X","role":"Tecnico","shiftType":"Dia"}"#)
                .unwrap();
        assert_eq!(s.shift_type, Some(ShiftType::Day));
        assert_eq!(s.role, Some(ShiftRole::Technician));
    }
}
