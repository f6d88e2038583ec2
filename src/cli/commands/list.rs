use crate::cli::commands::{filtered_view, open_store, use_color};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{self, stats};
use crate::errors::AppResult;
use crate::models::equipment::EquipmentType;
use crate::models::record::MaintenanceRecord;
use crate::utils::table::Table;
use ansi_term::Style;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        month,
        location,
        search,
    } = cmd
    {
        let pool = open_store(cfg)?;
        let color = use_color(&pool);
        let (state, mut records) = filtered_view(&pool, month.clone(), location.clone(), search.clone())?;

        if records.is_empty() {
            println!(
                "No records for {} at {}.",
                state.month_label(),
                state.location.label()
            );
            return Ok(());
        }

        filter::sort_by_timestamp(&mut records);
        let s = stats(&records);

        println!(
            "{} — {}  |  Ascensores: {}  Escaleras: {}  Total: {}\n",
            state.month_label(),
            state.location.label(),
            s.elevators,
            s.escalators,
            s.total
        );

        print_section(EquipmentType::Elevator, "ASCENSORES", &records, color);
        print_section(EquipmentType::Escalator, "ESCALERAS MECÁNICAS", &records, color);
    }
    Ok(())
}

fn print_section(
    kind: EquipmentType,
    title: &str,
    records: &[MaintenanceRecord],
    color: bool,
) {
    let subset: Vec<&MaintenanceRecord> =
        records.iter().filter(|r| r.equipment_type == kind).collect();
    if subset.is_empty() {
        return;
    }

    if color {
        println!("{}", Style::new().bold().paint(title));
    } else {
        println!("{title}");
    }

    let mut table = Table::new(vec![
        "Fecha", "Hora", "Ubicación", "Sector", "Equipo", "Técnico", "Notas", "Audio",
    ]);

    for r in subset {
        table.add_row(vec![
            r.date_str(),
            r.time_str(),
            r.location.label().to_string(),
            r.sector.clone().unwrap_or_else(|| "-".into()),
            r.equipment_order.clone(),
            r.technician.clone(),
            shorten(r.notes.as_deref().unwrap_or("-"), 40),
            if r.audio_note.is_some() { "🎤".into() } else { "".into() },
        ]);
    }

    println!("{}", table.render());
}

/// First wrapped line, with an ellipsis when the text continues.
fn shorten(text: &str, width: usize) -> String {
    let lines = textwrap::wrap(text, width);
    match lines.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [first, ..] => format!("{first}…"),
    }
}
