use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::records;
use crate::ui::messages::{confirm, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let pool = open_store(cfg)?;

        let Some(record) = records::get_all(&pool)?.into_iter().find(|r| r.id == *id) else {
            warning(format!("No record found with id {id}. Nothing deleted."));
            return Ok(());
        };

        let prompt = format!(
            "Delete {} {} at {} on {}? This action is irreversible.",
            record.equipment_type.label(),
            record.equipment_order,
            record.location.label(),
            record.date_str()
        );

        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        DeleteLogic::apply(&pool, id)?;
        success(format!("Record {id} has been deleted."));
    }

    Ok(())
}
