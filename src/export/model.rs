use crate::models::record::MaintenanceRecord;
use serde::Serialize;

/// Flat row for CSV/JSON export. Serde renames produce the Spanish header
/// row spreadsheet users expect.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    #[serde(rename = "Fecha")]
    pub fecha: String,
    #[serde(rename = "Hora")]
    pub hora: String,
    #[serde(rename = "Ubicación")]
    pub ubicacion: String,
    #[serde(rename = "Tipo")]
    pub tipo: String,
    #[serde(rename = "Equipo")]
    pub equipo: String,
    #[serde(rename = "Técnico")]
    pub tecnico: String,
    #[serde(rename = "Notas")]
    pub notas: String,
}

impl From<&MaintenanceRecord> for RecordExport {
    fn from(r: &MaintenanceRecord) -> Self {
        Self {
            fecha: r.date_str(),
            hora: r.time_str(),
            ubicacion: r.location.label().to_string(),
            tipo: r.equipment_type.label().to_string(),
            equipo: r.equipment_order.clone(),
            tecnico: r.technician.clone(),
            notas: r.notes.clone().unwrap_or_default(),
        }
    }
}

/// Fixed column order, shared by every format.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["Fecha", "Hora", "Ubicación", "Tipo", "Equipo", "Técnico", "Notas"]
}

/// PDF row: abbreviated equipment type, "-" for empty notes.
pub(crate) fn record_to_pdf_row(r: &MaintenanceRecord) -> Vec<String> {
    vec![
        r.date_str(),
        r.time_str(),
        r.location.label().to_string(),
        r.equipment_type.abbrev().to_string(),
        r.equipment_order.clone(),
        r.technician.clone(),
        r.notes.clone().unwrap_or_else(|| "-".to_string()),
    ]
}

pub(crate) fn records_to_pdf_table(records: &[MaintenanceRecord]) -> Vec<Vec<String>> {
    records.iter().map(record_to_pdf_row).collect()
}
