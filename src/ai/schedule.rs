//! Shift-schedule extraction from a photographed or scanned work roster.

use crate::ai::{GenerateClient, GenerateRequest, parse_json_payload};
use crate::errors::AppResult;
use crate::models::shift::Shift;

fn build_prompt() -> &'static str {
    "Analiza esta imagen o documento que contiene una planilla de turnos (work schedule).\n\
     \n\
     Objetivo: Extraer Supervisores y Técnicos asignados por fecha, distinguiendo si es turno de DÍA o de NOCHE.\n\
     \n\
     Instrucciones Avanzadas:\n\
     1. Busca fechas (convertir a YYYY-MM-DD).\n\
     2. Busca nombres de personas.\n\
     3. **Roles**: Si dice \"Supervisor\", \"Sup\", \"Encargado\", asígnalo como 'Supervisor'. Si no, 'Técnico'.\n\
     4. **Horario**:\n\
        - Si la planilla tiene columnas o secciones que dicen \"Noche\", \"Night\", \"22:00\", \"Turno B\", marca 'shiftType' como 'Noche'.\n\
        - Si es horario normal, \"Día\", \"Mañana\", marca 'shiftType' como 'Día'.\n\
        - Si es Fin de Semana, asume 'Día' a menos que se especifique lo contrario.\n\
     \n\
     Retorna JSON Array:\n\
     [\n\
       { \"date\": \"2024-12-17\", \"name\": \"Julio Pérez\", \"role\": \"Técnico\", \"shiftType\": \"Noche\" },\n\
       { \"date\": \"2024-12-18\", \"name\": \"Eduardo Leal\", \"role\": \"Supervisor\", \"shiftType\": \"Día\" }\n\
     ]"
}

/// Extracted shift list, strictly validated. The caller merges it into the
/// stored schedule.
pub fn analyze_shift_schedule(
    client: &GenerateClient,
    file_base64: &str,
    mime_type: &str,
) -> AppResult<Vec<Shift>> {
    let text = client.generate(
        GenerateRequest::text(build_prompt())
            .with_inline_data(mime_type, file_base64)
            .expect_json(),
    )?;

    parse_json_payload(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::shift::ShiftType;

    #[test]
    fn parses_the_documented_payload() {
        let payload = r#"[
            { "date": "2024-12-17", "name": "Julio Pérez", "role": "Técnico", "shiftType": "Noche" },
            { "date": "2024-12-18", "name": "Eduardo Leal", "role": "Supervisor", "shiftType": "Día" }
        ]"#;
        let shifts: Vec<Shift> = parse_json_payload(payload).unwrap();
        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts[0].shift_type, Some(ShiftType::Night));
    }

    #[test]
    fn wrong_shape_is_a_typed_error() {
        let err = parse_json_payload::<Vec<Shift>>(r#"{"shifts": []}"#).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }
}
