//! Voice assistant operations: dictated create/delete commands, spoken
//! yes/no confirmation, and the pending-status consultation.

use crate::ai::inventory::master_inventory_json;
use crate::ai::{GenerateClient, GenerateRequest, parse_json_payload};
use crate::errors::AppResult;
use crate::models::equipment::EquipmentType;
use crate::models::location::Location;
use crate::models::record::MaintenanceRecord;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const AUDIO_MIME: &str = "audio/webm";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoiceIntent {
    Create,
    Delete,
}

/// Partial record fields extracted from the dictation. Everything is
/// optional; the caller applies the documented defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceDraft {
    #[serde(default)]
    pub technician: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub equipment_type: Option<EquipmentType>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default, with = "crate::utils::time::hhmm_opt")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub equipment_order: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VoiceCommand {
    pub intent: VoiceIntent,
    pub data: VoiceDraft,
}

#[derive(Debug, Deserialize)]
struct Confirmation {
    #[serde(default)]
    confirmed: bool,
}

fn command_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "intent": { "type": "STRING", "enum": ["CREATE", "DELETE"] },
            "data": {
                "type": "OBJECT",
                "properties": {
                    "technician": { "type": "STRING" },
                    "location": { "type": "STRING", "enum": ["Marina", "Boulevard", "Ama"] },
                    "sector": { "type": "STRING" },
                    "equipmentType": { "type": "STRING", "enum": ["Ascensor", "Escalera Mecánica"] },
                    "date": { "type": "STRING" },
                    "time": { "type": "STRING" },
                    "equipmentOrder": { "type": "STRING" },
                    "notes": { "type": "STRING" }
                }
            }
        },
        "required": ["intent", "data"]
    })
}

fn command_prompt(today: NaiveDate) -> String {
    format!(
        "Escucha este audio de un técnico de mantenimiento.\n\
         \n\
         Fecha actual: {}\n\
         \n\
         Tu tarea es determinar la INTENCIÓN del usuario:\n\
         1. **CREATE**: Si está dictando una nueva mantención (ej: \"José revisó los ascensores 1 y 2 en el sector norte\").\n\
         2. **DELETE**: Si quiere borrar o eliminar un registro (ej: \"Borra la mantención de la Torre Marina\", \"Me equivoqué, elimina lo de hoy\").\n\
         \n\
         Extrae los datos en JSON.\n\
         \n\
         Reglas para DELETE:\n\
         - Necesitamos saber QUÉ borrar. Extrae 'equipmentOrder', 'date' y 'location' para poder encontrar el registro.\n\
         - Si dice \"hoy\", usa la fecha actual.\n\
         \n\
         Reglas para CREATE:\n\
         - Ubicación: 'Marina', 'Boulevard', 'Ama'.\n\
         - Sector: Intenta mapear a estos valores si suena parecido:\n\
             - Marina: Ripley, París, Panorámico, Cine, Torre Marina, Montacargas, Gimnasio, Patio Comida, Cruz Verde.\n\
             - Boulevard: Torre, Estacionamientos, Pasarela, Montacarga, Pisos (1,2,3).\n\
             - Ama: Torre, H&M, Jumbo, Rampas, Escaleras.\n\
           Si no, usa texto libre.\n\
         - Tipo: 'Ascensor', 'Escalera Mecánica'.\n\
         - Técnico: Mapea a uno de estos nombres oficiales si suena similar:\n\
            - Cristian Guerrero\n\
            - Diego Vargas\n\
            - Francisca Chimuelo\n\
            - Italo Sanhueza\n\
            - Javier Silva\n\
            - Jonathan Labbé (o \"Jonathan Lave\")\n\
            - Jorge Letelier\n\
            - José Krause\n\
            - Julio Pérez\n\
            - Víctor González\n\
            - Víctor Jaramillo\n\
         - Equipo: Identificador o número. SOPORTA MÚLTIPLES NÚMEROS (ej: \"1, 2, 3\").\n\
           Si el usuario dice \"Ascensor 1 y 2\", equipmentOrder debe ser \"1, 2\".",
        today.format("%Y-%m-%d")
    )
}

/// Intent plus extracted fields for one dictated command.
pub fn process_voice_command(
    client: &GenerateClient,
    audio_base64: &str,
    today: NaiveDate,
) -> AppResult<VoiceCommand> {
    let text = client.generate(
        GenerateRequest::text(command_prompt(today))
            .with_inline_data(AUDIO_MIME, audio_base64)
            .with_response_schema(command_schema()),
    )?;

    parse_json_payload(&text)
}

/// Spoken yes/no gate for the dangerous path (deleting a record).
pub fn check_voice_confirmation(client: &GenerateClient, audio_base64: &str) -> AppResult<bool> {
    let prompt = "Escucha el audio. El usuario debe CONFIRMAR o CANCELAR una acción peligrosa (borrar).\n\
                  - Si dice \"Sí\", \"Confirmo\", \"Bórralo\", \"Dale\", \"Correcto\": Retorna TRUE.\n\
                  - Si dice \"No\", \"Cancela\", \"Espera\", \"Me equivoqué\", \"No lo borres\": Retorna FALSE.\n\
                  \n\
                  Retorna JSON: { \"confirmed\": boolean }";

    let schema = json!({
        "type": "OBJECT",
        "properties": { "confirmed": { "type": "BOOLEAN" } }
    });

    let text = client.generate(
        GenerateRequest::text(prompt)
            .with_inline_data(AUDIO_MIME, audio_base64)
            .with_response_schema(schema),
    )?;

    let confirmation: Confirmation = parse_json_payload(&text)?;
    Ok(confirmation.confirmed)
}

/// Spoken-style plain-text answer about what is still pending this month.
pub fn consult_pending_status(
    client: &GenerateClient,
    audio_base64: &str,
    current_records: &[MaintenanceRecord],
) -> AppResult<String> {
    #[derive(Serialize)]
    struct DoneEntry<'a> {
        loc: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        sec: Option<&'a str>,
        eq: &'a str,
    }

    let done: Vec<DoneEntry<'_>> = current_records
        .iter()
        .map(|r| DoneEntry {
            loc: r.location.label(),
            sec: r.sector.as_deref(),
            eq: &r.equipment_order,
        })
        .collect();

    let prompt = format!(
        "Eres un asistente de voz para una empresa de mantenimiento.\n\
         \n\
         CONTEXTO (Inventario Total de Equipos):\n\
         {}\n\
         \n\
         MANTENCIONES REALIZADAS ESTE MES (Lo que ya se hizo):\n\
         {}\n\
         \n\
         INSTRUCCIÓN:\n\
         1. Escucha la pregunta del usuario en el audio.\n\
         2. Si pregunta \"¿Qué falta?\" o por una ubicación específica (ej: \"¿Qué falta en Ama?\"), compara el Inventario Total con las Mantenciones Realizadas.\n\
         3. Responde de forma **hablada y natural** (como si fueras una persona).\n\
         4. Sé conciso. No listes todo si falta mucho, resume (ej: \"Faltan 3 equipos en Ama: la Torre y dos ascensores\"). Si falta poco, nómbralos.\n\
         5. Si todo está listo, felicita al equipo.\n\
         \n\
         Tu respuesta será leída en voz alta, así que no uses Markdown ni símbolos complejos, solo texto plano en español.",
        master_inventory_json(),
        serde_json::to_string(&done)?
    );

    client.generate(GenerateRequest::text(prompt).with_inline_data(AUDIO_MIME, audio_base64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn parses_create_command() {
        let payload = r#"{
            "intent": "CREATE",
            "data": {
                "technician": "José Krause",
                "location": "Marina",
                "equipmentType": "Ascensor",
                "equipmentOrder": "1, 2",
                "date": "2024-07-09",
                "time": "10:30"
            }
        }"#;
        let cmd: VoiceCommand = parse_json_payload(payload).unwrap();
        assert_eq!(cmd.intent, VoiceIntent::Create);
        assert_eq!(cmd.data.location, Some(Location::Marina));
        assert_eq!(cmd.data.time.unwrap().format("%H:%M").to_string(), "10:30");
    }

    #[test]
    fn parses_delete_command_with_sparse_fields() {
        let payload = r#"{ "intent": "DELETE", "data": { "equipmentOrder": "Torre Marina" } }"#;
        let cmd: VoiceCommand = parse_json_payload(payload).unwrap();
        assert_eq!(cmd.intent, VoiceIntent::Delete);
        assert!(cmd.data.date.is_none());
    }

    #[test]
    fn unknown_intent_is_rejected() {
        let err =
            parse_json_payload::<VoiceCommand>(r#"{ "intent": "UPDATE", "data": {} }"#).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn unknown_location_is_rejected() {
        let err = parse_json_payload::<VoiceCommand>(
            r#"{ "intent": "CREATE", "data": { "location": "Plaza Norte" } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn missing_confirmed_defaults_to_false() {
        let c: Confirmation = parse_json_payload("{}").unwrap();
        assert!(!c.confirmed);
    }

    #[test]
    fn command_prompt_pins_current_date() {
        let p = command_prompt(NaiveDate::from_ymd_opt(2024, 7, 9).unwrap());
        assert!(p.contains("Fecha actual: 2024-07-09"));
    }
}
