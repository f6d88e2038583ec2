use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::equipment::EquipmentType;
use crate::models::location::Location;
use crate::ui::messages::success;
use crate::utils::{date, media, time};
use std::path::Path;

/// Record one maintenance event from the command line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        technician,
        time: time_arg,
        location,
        sector,
        equipment_type,
        equipment_order,
        notes,
        audio,
    } = cmd
    {
        //
        // 1. Date (default: today) and time (default: now)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };
        let t = match time_arg {
            Some(s) => time::parse_time(s).ok_or_else(|| AppError::InvalidTime(s.clone()))?,
            None => time::now(),
        };

        //
        // 2. Location (default from config)
        //
        let loc_code = location.as_deref().unwrap_or(&cfg.default_location);
        let loc = Location::from_code(loc_code)
            .ok_or_else(|| AppError::InvalidLocation(loc_code.to_string()))?;

        //
        // 3. Equipment type
        //
        let eq_type = EquipmentType::from_code(equipment_type)
            .ok_or_else(|| AppError::InvalidEquipmentType(equipment_type.clone()))?;

        //
        // 4. Optional audio note, embedded as data URI
        //
        let audio_note = match audio {
            Some(file) => Some(media::to_data_uri(Path::new(file))?),
            None => None,
        };

        //
        // 5. Open store and execute logic
        //
        let pool = open_store(cfg)?;

        let record = AddLogic::apply(
            &pool,
            technician.clone(),
            d,
            t,
            loc,
            sector.clone(),
            eq_type,
            equipment_order.clone(),
            notes.clone(),
            audio_note,
        )?;

        success(format!(
            "Recorded {} {} at {} ({}) — id {}",
            record.equipment_type.label(),
            record.equipment_order,
            record.location.label(),
            record.date_str(),
            record.id
        ));
    }

    Ok(())
}
