use crate::cli::commands::{filtered_view, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        location,
        search,
        force,
    } = cmd
    {
        let pool = open_store(cfg)?;
        let (state, records) =
            filtered_view(&pool, month.clone(), location.clone(), search.clone())?;

        ExportLogic::export(records, &state, format.clone(), file.clone(), *force)?;
    }
    Ok(())
}
