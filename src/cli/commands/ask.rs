use crate::ai::assistant::ask_assistant;
use crate::ai::GenerateClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ask { question } = cmd {
        let result =
            GenerateClient::from_config(cfg).and_then(|client| ask_assistant(&client, question));

        let text = match result {
            Ok(text) => text,
            Err(AppError::MissingApiKey) => {
                "Error: No se pudo conectar con el servicio de IA.".to_string()
            }
            Err(_) => "Hubo un error al procesar tu pregunta.".to_string(),
        };

        println!("{text}");
    }
    Ok(())
}
