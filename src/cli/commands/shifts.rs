use crate::ai::schedule::analyze_shift_schedule;
use crate::ai::GenerateClient;
use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::shifts::on_duty;
use crate::errors::{AppError, AppResult};
use crate::models::shift::{Shift, ShiftRole, ShiftType};
use crate::store::shifts;
use crate::ui::messages::{error, success, warning};
use crate::utils::table::Table;
use crate::utils::{date, media};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shifts {
        list,
        now,
        load,
        date: date_arg,
        name,
        role,
        shift_type,
        location,
    } = cmd
    {
        let pool = open_store(cfg)?;

        if let Some(file) = load {
            return load_from_schedule(&pool, cfg, file);
        }

        if let Some(name) = name {
            let d = match date_arg {
                Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => date::today(),
            };
            let shift = Shift {
                date: d,
                name: name.clone(),
                role: match role.as_deref() {
                    Some(r) if r.eq_ignore_ascii_case("supervisor") => Some(ShiftRole::Supervisor),
                    Some(_) => Some(ShiftRole::Technician),
                    None => None,
                },
                shift_type: match shift_type.as_deref() {
                    Some(t) if t.eq_ignore_ascii_case("noche") => Some(ShiftType::Night),
                    Some(_) => Some(ShiftType::Day),
                    None => None,
                },
                location: location.clone(),
            };

            let merged = shifts::save_shifts(&pool, vec![shift])?;
            success(format!("Shift saved. {} assignments stored.", merged.len()));
            return Ok(());
        }

        if *now {
            let all = shifts::get_all(&pool)?;
            let (period, active) = on_duty(&all, chrono::Local::now().naive_local());

            if active.is_empty() {
                println!("Turno {}: nobody assigned for today.", period.label());
            } else {
                println!("Turno {}:", period.label());
                for s in active {
                    println!(
                        "  {} — {}{}",
                        s.name,
                        s.role.map(|r| r.label()).unwrap_or("En Turno"),
                        s.location.map(|l| format!(" ({l})")).unwrap_or_default(),
                    );
                }
            }
            return Ok(());
        }

        // default (and --list): dump the stored schedule
        let _ = list;
        let mut all = shifts::get_all(&pool)?;
        if all.is_empty() {
            println!("No shift assignments stored.");
            return Ok(());
        }
        all.sort_by_key(|s| s.date);

        let mut table = Table::new(vec!["Fecha", "Nombre", "Rol", "Turno", "Ubicación"]);
        for s in &all {
            table.add_row(vec![
                s.date.format("%Y-%m-%d").to_string(),
                s.name.clone(),
                s.role.map(|r| r.label().to_string()).unwrap_or_else(|| "-".into()),
                s.shift_type
                    .map(|t| t.label().to_string())
                    .unwrap_or_else(|| "-".into()),
                s.location.clone().unwrap_or_else(|| "-".into()),
            ]);
        }
        println!("{}", table.render());
    }
    Ok(())
}

/// AI extraction from a photographed or scanned roster. Extraction failures
/// surface as an empty result, never as a hard error.
fn load_from_schedule(
    pool: &crate::store::pool::StorePool,
    cfg: &Config,
    file: &str,
) -> AppResult<()> {
    let path = Path::new(file);
    let payload = media::to_base64(path)?;
    let mime = media::guess_mime(path);

    let extracted = match GenerateClient::from_config(cfg)
        .and_then(|client| analyze_shift_schedule(&client, &payload, mime))
    {
        Ok(shifts) => shifts,
        Err(e) => {
            error(format!("Schedule analysis failed: {e}"));
            Vec::new()
        }
    };

    if extracted.is_empty() {
        warning("No se detectaron turnos en la planilla.");
        return Ok(());
    }

    let count = extracted.len();
    let merged = shifts::save_shifts(pool, extracted)?;
    success(format!(
        "{count} shifts extracted, {} assignments stored.",
        merged.len()
    ));
    Ok(())
}
