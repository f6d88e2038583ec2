use crate::ai::analyze::analyze_month;
use crate::ai::GenerateClient;
use crate::cli::commands::{filtered_view, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        month,
        location,
        search,
    } = cmd
    {
        let pool = open_store(cfg)?;
        let (state, records) =
            filtered_view(&pool, month.clone(), location.clone(), search.clone())?;

        if records.is_empty() {
            warning("No hay datos para analizar en este mes.");
            return Ok(());
        }

        info(format!(
            "Analizando {} registros de {}...",
            records.len(),
            state.month_label()
        ));

        let result = GenerateClient::from_config(cfg).and_then(|client| {
            analyze_month(&client, &records, &state.month_label(), state.location.label())
        });

        // network/parse failures become an apology, never a crash
        let text = match result {
            Ok(text) => text,
            Err(AppError::MissingApiKey) => "Error: API Key no encontrada.".to_string(),
            Err(_) => "Ocurrió un error al analizar los datos con Gemini.".to_string(),
        };

        println!("\n{text}");
    }
    Ok(())
}
