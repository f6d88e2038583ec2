//! Image-based inventory comparison: which equipment in a photographed list
//! or floor plan already got maintenance this month, and which is pending.

use crate::ai::{GenerateClient, GenerateRequest};
use crate::errors::AppResult;
use crate::models::location::Location;
use crate::models::record::MaintenanceRecord;
use serde_json::{Value, json};

/// Master inventory per location, with the sub-sectors for elevators and
/// escalators. Reference data for gap analysis; records are never validated
/// against it.
pub const MASTER_INVENTORY: [(Location, &[&str]); 3] = [
    (
        Location::Marina,
        &[
            // Elevators
            "Ripley",
            "París",
            "Torre Marina",
            "Ascensor Panorámico",
            "Cine",
            "Montacargas 14 Norte",
            "Montacargas 15 Norte",
            // Escalators/Other
            "Gimnasio",
            "Sector Patio Comida",
            "Sector Cruz Verde",
        ],
    ),
    (
        Location::Boulevard,
        &[
            // Elevators
            "Torre Boulevard",
            "Estacionamientos Otis",
            "Pasarela Boulevard",
            "Montacarga Boulevard",
            // Escalators/Other
            "Primer Piso",
            "Segundo Piso",
            "Tercer Piso",
            "Pasarelas",
        ],
    ),
    (
        Location::Ama,
        &[
            // Elevators
            "Torre AMA",
            "Ascensores H&M",
            "Estacionamientos Torre Ama",
            "Ascensores Jumbo",
            "Montacargas de AMA",
            // Escalators/Other
            "Rampas",
            "Escaleras Mecánicas",
            "Sector Jumbo",
        ],
    ),
];

pub fn master_inventory_json() -> Value {
    let mut obj = serde_json::Map::new();
    for (loc, items) in MASTER_INVENTORY {
        obj.insert(loc.label().to_string(), json!(items));
    }
    Value::Object(obj)
}

/// "equipment (location - sector) - date" lines describing what is done.
fn maintained_lines(records: &[MaintenanceRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| {
            format!(
                "{} ({} - {}) - {}",
                r.equipment_order,
                r.location.label(),
                r.sector.as_deref().unwrap_or("General"),
                r.date_str()
            )
        })
        .collect()
}

pub fn build_prompt(records: &[MaintenanceRecord]) -> AppResult<String> {
    let done = serde_json::to_string(&maintained_lines(records))?;

    Ok(format!(
        "Actúa como un Supervisor de Mantenimiento experto.\n\
         \n\
         Te estoy enviando una imagen que puede ser:\n\
         1. Una lista o planilla física de equipos.\n\
         2. Un plano del Mall (Marina, Boulevard o Ama).\n\
         3. Una foto de un sector con ascensores/escaleras.\n\
         \n\
         Tu tarea es:\n\
         1. **Identificar** todos los equipos (ascensores/escaleras) que aparecen o se listan en la imagen.\n\
         2. **Comparar** esa lista visual con los registros de mantenimiento YA REALIZADOS este mes (lista provista abajo).\n\
         3. **Generar un reporte** que diga:\n\
            - Qué equipos de la imagen YA tienen mantención (Status: OK ✅).\n\
            - Qué equipos de la imagen FALTAN por mantener (Status: PENDIENTE ⚠️).\n\
         \n\
         Lista de Mantenciones Realizadas (JSON):\n\
         {done}\n\
         \n\
         Formato de respuesta sugerido (Markdown):\n\
         - Resumen General\n\
         - Lista comparativa\n\
         - Alerta de equipos críticos faltantes (si los hay en la imagen)."
    ))
}

/// Markdown comparison report for one inventory photo.
pub fn analyze_equipment_image(
    client: &GenerateClient,
    image_base64: &str,
    mime_type: &str,
    current_records: &[MaintenanceRecord],
) -> AppResult<String> {
    let prompt = build_prompt(current_records)?;
    client.generate(GenerateRequest::text(prompt).with_inline_data(mime_type, image_base64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::equipment::EquipmentType;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn inventory_covers_all_locations() {
        let inv = master_inventory_json();
        for loc in Location::ALL {
            assert!(inv.get(loc.label()).is_some());
        }
    }

    #[test]
    fn maintained_lines_default_sector_to_general() {
        let rec = MaintenanceRecord::new(
            "X".into(),
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            Location::Ama,
            None,
            EquipmentType::Escalator,
            "Rampas".into(),
            None,
            None,
        );
        assert_eq!(maintained_lines(&[rec])[0], "Rampas (Ama - General) - 2024-07-01");
    }
}
