use crate::cli::commands::{filtered_view, open_store};
use crate::cli::parser::{Commands, ShareVia};
use crate::config::Config;
use crate::core::filter::stats;
use crate::core::share::{mailto_link, whatsapp_link};
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Share {
        via,
        month,
        location,
        search,
    } = cmd
    {
        let pool = open_store(cfg)?;
        let (state, records) =
            filtered_view(&pool, month.clone(), location.clone(), search.clone())?;

        if records.is_empty() {
            warning("No hay registros para compartir.");
            return Ok(());
        }

        let s = stats(&records);
        let link = match via {
            ShareVia::Whatsapp => whatsapp_link(&state, &s),
            ShareVia::Email => mailto_link(&state, &s),
        };

        info("Open this link to share the summary:");
        println!("{link}");
    }
    Ok(())
}
