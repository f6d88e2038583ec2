use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::load_log;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let pool = open_store(cfg)?;
        for (date, operation, target, message) in load_log(&pool)? {
            println!("{date} | {operation:<11} | {target} | {message}");
        }
    }
    Ok(())
}
