//! Monthly analysis of the filtered record list.

use crate::ai::{GenerateClient, GenerateRequest};
use crate::errors::AppResult;
use crate::models::record::MaintenanceRecord;
use serde::Serialize;

/// Trimmed projection sent to the model; keeps the prompt small.
#[derive(Serialize)]
struct RecordSummary<'a> {
    dia: String,
    hora: String,
    tec: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sector: Option<&'a str>,
    tipo: &'a str,
    id_equipo: &'a str,
}

fn summarize(records: &[MaintenanceRecord]) -> Vec<RecordSummary<'_>> {
    records
        .iter()
        .map(|r| RecordSummary {
            dia: r.date_str(),
            hora: r.time_str(),
            tec: &r.technician,
            sector: r.sector.as_deref(),
            tipo: r.equipment_type.label(),
            id_equipo: &r.equipment_order,
        })
        .collect()
}

pub fn build_prompt(
    records: &[MaintenanceRecord],
    month_label: &str,
    location_label: &str,
) -> AppResult<String> {
    let data = serde_json::to_string(&summarize(records))?;

    Ok(format!(
        "Analiza la siguiente lista de mantenciones realizadas en {location_label} durante {month_label}.\n\
         Responde en formato Markdown, sé breve y profesional.\n\
         \n\
         Tus objetivos:\n\
         1. Resumir la cantidad total de mantenciones por tipo (Ascensor vs Escalera).\n\
         2. Identificar si hay algún técnico que haya realizado la mayoría de los trabajos.\n\
         3. Detectar si algún día específico hubo una carga de trabajo inusualmente alta.\n\
         4. Dar una conclusión breve sobre el estado del mantenimiento este mes.\n\
         \n\
         Datos (JSON):\n\
         {data}"
    ))
}

/// Markdown summary of the month, straight from the model.
pub fn analyze_month(
    client: &GenerateClient,
    records: &[MaintenanceRecord],
    month_label: &str,
    location_label: &str,
) -> AppResult<String> {
    let prompt = build_prompt(records, month_label, location_label)?;
    client.generate(GenerateRequest::text(prompt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::equipment::EquipmentType;
    use crate::models::location::Location;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn prompt_embeds_trimmed_record_json() {
        let rec = MaintenanceRecord::new(
            "José Krause".into(),
            NaiveDate::from_ymd_opt(2024, 7, 9).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            Location::Marina,
            Some("Ripley".into()),
            EquipmentType::Elevator,
            "1, 2".into(),
            Some("nota larga que no debe viajar".into()),
            None,
        );

        let prompt = build_prompt(&[rec], "julio 2024", "Marina").unwrap();
        assert!(prompt.contains("julio 2024"));
        assert!(prompt.contains(r#""dia":"2024-07-09""#));
        assert!(prompt.contains(r#""tec":"José Krause""#));
        // notes and audio stay local
        assert!(!prompt.contains("nota larga"));
    }
}
