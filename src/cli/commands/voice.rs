use crate::ai::GenerateClient;
use crate::ai::voice::{
    VoiceDraft, VoiceIntent, check_voice_confirmation, consult_pending_status,
    process_voice_command,
};
use crate::cli::commands::{filtered_view, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::{DeleteLogic, resolve_voice_target};
use crate::errors::{AppError, AppResult};
use crate::models::equipment::EquipmentType;
use crate::models::location::Location;
use crate::models::record::MaintenanceRecord;
use crate::store::pool::StorePool;
use crate::store::records;
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::{date, media};
use chrono::NaiveTime;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Voice {
        audio,
        consult,
        confirm_audio,
        yes,
    } = cmd
    {
        let pool = open_store(cfg)?;
        let payload = media::to_base64(Path::new(audio))?;

        if *consult {
            return consult_mode(&pool, cfg, &payload);
        }

        let client = GenerateClient::from_config(cfg)?;

        let command = match process_voice_command(&client, &payload, date::today()) {
            Ok(command) => command,
            Err(e) => {
                // unusable extraction is reported, never retried
                warning(format!("No pude entender los detalles. ({e})"));
                return Ok(());
            }
        };

        match command.intent {
            VoiceIntent::Create => create_from_draft(&pool, command.data, &payload),
            VoiceIntent::Delete => {
                delete_from_draft(&pool, &client, command.data, confirm_audio.as_deref(), *yes)
            }
        }?;
    }
    Ok(())
}

/// Spoken-style answer about pending equipment, against the current month's
/// records (all locations).
fn consult_mode(pool: &StorePool, cfg: &Config, payload: &str) -> AppResult<()> {
    let (_, current) = filtered_view(pool, None, None, None)?;

    let result = GenerateClient::from_config(cfg)
        .and_then(|client| consult_pending_status(&client, payload, &current));

    let text = match result {
        Ok(text) => text,
        Err(AppError::MissingApiKey) => "Error de conexión con la IA.".to_string(),
        Err(_) => "Hubo un error al consultar el estado.".to_string(),
    };

    println!("{text}");
    Ok(())
}

/// CREATE intent: the documented defaults fill whatever the dictation missed
/// and the command audio itself becomes the record's audio note.
fn create_from_draft(pool: &StorePool, draft: VoiceDraft, audio_base64: &str) -> AppResult<()> {
    let record = MaintenanceRecord::new(
        draft.technician.unwrap_or_else(|| "Desconocido".to_string()),
        draft.date.unwrap_or_else(date::today),
        draft
            .time
            .unwrap_or_else(|| NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
        draft.location.unwrap_or(Location::Marina),
        draft.sector,
        draft.equipment_type.unwrap_or(EquipmentType::Elevator),
        draft
            .equipment_order
            .unwrap_or_else(|| "General".to_string()),
        Some(
            draft
                .notes
                .unwrap_or_else(|| "Generado por Asistente de Voz".to_string()),
        ),
        Some(format!("data:audio/webm;base64,{audio_base64}")),
    );

    records::create(pool, record.clone())?;

    success("¡Entendido! Registro creado.");
    println!("  Técnico: {}", record.technician);
    println!("  Equipo:  {} {}", record.equipment_type.label(), record.equipment_order);
    println!("  Fecha:   {} {}", record.date_str(), record.time_str());
    println!("  Lugar:   {}", record.location.label());
    Ok(())
}

/// DELETE intent: resolve by (date, equipment fragment), first match wins;
/// the deletion is gated on a confirmation.
fn delete_from_draft(
    pool: &StorePool,
    client: &GenerateClient,
    draft: VoiceDraft,
    confirm_audio: Option<&str>,
    yes: bool,
) -> AppResult<()> {
    let target_date = draft.date.unwrap_or_else(date::today);
    let fragment = draft.equipment_order.unwrap_or_default();

    let all = records::get_all(pool)?;
    let Some(target) = resolve_voice_target(&all, target_date, &fragment) else {
        warning("No se encontró el registro a eliminar.");
        return Ok(());
    };
    let id = target.id.clone();

    info(format!(
        "Registro encontrado: {} {} — {} ({})",
        target.equipment_type.label(),
        target.equipment_order,
        target.location.label(),
        target.date_str()
    ));

    let confirmed = if let Some(file) = confirm_audio {
        // spoken yes/no; any failure counts as "no"
        media::to_base64(Path::new(file))
            .and_then(|b64| check_voice_confirmation(client, &b64))
            .unwrap_or(false)
    } else if yes {
        true
    } else {
        confirm("¿Eliminar este registro? Esta acción es irreversible.")
    };

    if confirmed {
        DeleteLogic::apply(pool, &id)?;
        success("Registro eliminado.");
    } else {
        info("Operación cancelada.");
    }
    Ok(())
}
