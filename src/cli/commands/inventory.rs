use crate::ai::inventory::analyze_equipment_image;
use crate::ai::GenerateClient;
use crate::cli::commands::{filtered_view, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::media;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Inventory {
        image,
        month,
        location,
        search,
    } = cmd
    {
        let pool = open_store(cfg)?;
        let (_, records) = filtered_view(&pool, month.clone(), location.clone(), search.clone())?;

        let path = Path::new(image);
        let payload = media::to_base64(path)?;
        let mime = media::guess_mime(path);

        info("Comparando la imagen con las mantenciones del mes...");

        let result = GenerateClient::from_config(cfg)
            .and_then(|client| analyze_equipment_image(&client, &payload, mime, &records));

        let text = match result {
            Ok(text) => text,
            Err(AppError::MissingApiKey) => "Error: API Key no encontrada.".to_string(),
            Err(_) => {
                "Hubo un error al procesar la imagen. Asegúrate de que sea clara.".to_string()
            }
        };

        println!("\n{text}");
    }
    Ok(())
}
