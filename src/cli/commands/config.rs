use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::process::Command as Process;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                info(format!("Configuration file: {}", path.display()));
                println!("{}", fs::read_to_string(&path)?);
            } else {
                warning("No configuration file found. Run `mantlog init` first.");
            }
            return Ok(());
        }

        if *edit_config {
            return open_in_editor(editor.as_deref());
        }

        info("Nothing to do. Use --print or --edit.");
    }
    Ok(())
}

fn open_in_editor(editor: Option<&str>) -> AppResult<()> {
    let path = Config::config_file();
    if !path.exists() {
        warning("No configuration file found. Run `mantlog init` first.");
        return Ok(());
    }

    let editor = editor
        .map(String::from)
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let status = Process::new(&editor).arg(&path).status()?;
    if !status.success() {
        return Err(AppError::Config(format!("editor '{editor}' exited with an error")));
    }
    Ok(())
}
