use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EditPatch};
use crate::errors::{AppError, AppResult};
use crate::models::equipment::EquipmentType;
use crate::models::location::Location;
use crate::ui::messages::success;
use crate::utils::{date, media, time};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        technician,
        date: date_arg,
        time: time_arg,
        location,
        sector,
        equipment_type,
        equipment_order,
        notes,
        audio,
    } = cmd
    {
        let patch = EditPatch {
            technician: technician.clone(),
            date: match date_arg {
                Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
                None => None,
            },
            time: match time_arg {
                Some(s) => Some(time::parse_time(s).ok_or_else(|| AppError::InvalidTime(s.clone()))?),
                None => None,
            },
            location: match location {
                Some(s) => Some(
                    Location::from_code(s).ok_or_else(|| AppError::InvalidLocation(s.clone()))?,
                ),
                None => None,
            },
            sector: sector.clone(),
            equipment_type: match equipment_type {
                Some(s) => Some(
                    EquipmentType::from_code(s)
                        .ok_or_else(|| AppError::InvalidEquipmentType(s.clone()))?,
                ),
                None => None,
            },
            equipment_order: equipment_order.clone(),
            notes: notes.clone(),
            audio_note: match audio {
                Some(file) => Some(media::to_data_uri(Path::new(file))?),
                None => None,
            },
        };

        let pool = open_store(cfg)?;
        let record = EditLogic::apply(&pool, id, patch)?;

        success(format!("Record {} updated.", record.id));
    }

    Ok(())
}
