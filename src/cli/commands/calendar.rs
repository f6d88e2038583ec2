use crate::cli::commands::{filtered_view, open_store, use_color};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{build_month_grid, records_for_day};
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::utils::date;
use ansi_term::Style;

const CELL_W: usize = 10;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        month,
        location,
        search,
        day,
    } = cmd
    {
        let pool = open_store(cfg)?;
        let color = use_color(&pool);
        let (state, records) = filtered_view(&pool, month.clone(), location.clone(), search.clone())?;

        if let Some(day_str) = day {
            let d = date::parse_date(day_str)
                .ok_or_else(|| AppError::InvalidDate(day_str.clone()))?;
            return print_day_detail(&records, d);
        }

        let grid = build_month_grid(&state.month, &records)?;

        println!("{}\n", title(&state.month_label(), color));

        // weekday header
        let header: String = date::WEEKDAYS_ES
            .iter()
            .map(|w| format!("{:<width$}", w, width = CELL_W))
            .collect();
        println!("{}", header.trim_end());

        for week in &grid.weeks {
            let mut day_line = String::new();
            let mut badge_line = String::new();

            for cell in week {
                match cell {
                    Some(c) => {
                        day_line.push_str(&format!(
                            "{:<width$}",
                            c.date.format("%d").to_string(),
                            width = CELL_W
                        ));
                        badge_line.push_str(&badges(&c.counts, color));
                    }
                    None => {
                        day_line.push_str(&" ".repeat(CELL_W));
                        badge_line.push_str(&" ".repeat(CELL_W));
                    }
                }
            }

            println!("{}", day_line.trim_end());
            if !badge_line.trim().is_empty() {
                println!("{}", badge_line.trim_end());
            }
        }

        println!("\n{}", legend(color));
    }
    Ok(())
}

fn title(label: &str, color: bool) -> String {
    if color {
        Style::new().bold().paint(label).to_string()
    } else {
        label.to_string()
    }
}

/// "M2 B1" style markers, one letter+count per location with records.
fn badges(counts: &[(Location, usize)], color: bool) -> String {
    let mut plain_width = 0;
    let mut out = String::new();

    for (i, (loc, n)) in counts.iter().enumerate() {
        if i > 0 {
            out.push(' ');
            plain_width += 1;
        }
        let tag = format!("{}{}", &loc.label()[..1], n);
        plain_width += tag.len();
        if color {
            out.push_str(&loc.colour().paint(tag).to_string());
        } else {
            out.push_str(&tag);
        }
    }

    // pad to the fixed cell width using the uncolored length
    out.push_str(&" ".repeat(CELL_W.saturating_sub(plain_width)));
    out
}

fn legend(color: bool) -> String {
    Location::ALL
        .iter()
        .map(|loc| {
            let tag = format!("{} = {}", &loc.label()[..1], loc.label());
            if color {
                loc.colour().paint(tag).to_string()
            } else {
                tag
            }
        })
        .collect::<Vec<_>>()
        .join("   ")
}

fn print_day_detail(
    records: &[crate::models::record::MaintenanceRecord],
    day: chrono::NaiveDate,
) -> AppResult<()> {
    let day_records = records_for_day(records, day);

    if day_records.is_empty() {
        println!("No records for {day}.");
        return Ok(());
    }

    println!("=== {day} ===");
    for r in &day_records {
        println!(
            "- {} | {} {} | {}{} | {}{}",
            r.time_str(),
            r.equipment_type.label(),
            r.equipment_order,
            r.location.label(),
            r.sector
                .as_deref()
                .map(|s| format!(" / {s}"))
                .unwrap_or_default(),
            r.technician,
            if r.audio_note.is_some() { " 🎤" } else { "" },
        );
        if let Some(notes) = &r.notes {
            println!("    {notes}");
        }
    }
    Ok(())
}
