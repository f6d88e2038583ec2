use serde::{Deserialize, Serialize};

/// Exactly two kinds of vertical transport equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentType {
    #[serde(rename = "Ascensor")]
    Elevator,
    #[serde(rename = "Escalera Mecánica")]
    Escalator,
}

impl EquipmentType {
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentType::Elevator => "Ascensor",
            EquipmentType::Escalator => "Escalera Mecánica",
        }
    }

    /// Short form used in the PDF table.
    pub fn abbrev(&self) -> &'static str {
        match self {
            EquipmentType::Elevator => "Asc.",
            EquipmentType::Escalator => "Esc.",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Ascensor" => Some(EquipmentType::Elevator),
            "Escalera Mecánica" => Some(EquipmentType::Escalator),
            _ => None,
        }
    }

    /// Helper: convert CLI input ("asc"/"esc" shortcuts allowed)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "asc" | "ascensor" | "elevator" => Some(EquipmentType::Elevator),
            "esc" | "escalera" | "escalator" => Some(EquipmentType::Escalator),
            _ => None,
        }
    }
}

impl std::fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
