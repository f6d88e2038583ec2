use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::kv;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Theme { value } = cmd {
        let pool = open_store(cfg)?;

        match value.as_deref() {
            None => println!("{}", kv::get_theme(&pool)?),
            Some(v @ ("dark" | "light")) => {
                kv::set_theme(&pool, v)?;
                success(format!("Theme set to {v}."));
            }
            Some(other) => {
                return Err(AppError::Other(format!(
                    "Unknown theme '{other}' (expected dark or light)"
                )));
            }
        }
    }
    Ok(())
}
