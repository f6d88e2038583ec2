use crate::core::filter::{self, ViewState};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::{RecordExport, get_headers, records_to_pdf_table};
use crate::export::pdf::PdfManager;
use crate::models::record::MaintenanceRecord;
use crate::ui::messages::warning;
use std::path::PathBuf;

/// High-level export of a filtered record snapshot. Pure function of the
/// snapshot and the view state; never touches the store.
pub struct ExportLogic;

impl ExportLogic {
    /// Returns the written path, or None when the snapshot was empty.
    pub fn export(
        mut records: Vec<MaintenanceRecord>,
        state: &ViewState,
        format: ExportFormat,
        file: Option<String>,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        if records.is_empty() {
            warning("No hay registros para exportar en este mes.");
            return Ok(None);
        }

        filter::sort_by_timestamp(&mut records);

        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(default_file_name(&format, state)),
        };
        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => {
                let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();
                export_csv(&rows, &path)?;
            }
            ExportFormat::Json => {
                let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();
                export_json(&rows, &path)?;
            }
            ExportFormat::Pdf => {
                let stats = filter::stats(&records);
                let rows = records_to_pdf_table(&records);
                let generated = chrono::Local::now().format("%d-%m-%Y").to_string();

                let mut pdf = PdfManager::new();
                pdf.write_report(
                    &state.month_label(),
                    state.location.label(),
                    &stats,
                    &get_headers(),
                    &rows,
                    &generated,
                );
                pdf.save(&path)?;
                crate::export::notify_export_success("PDF", &path);
            }
        }

        Ok(Some(path))
    }
}

/// `mantenciones_<YYYY-MM>.csv` / `.json`;
/// `Reporte_Mantencion_<month label>_<timestamp>.pdf`.
fn default_file_name(format: &ExportFormat, state: &ViewState) -> String {
    match format {
        ExportFormat::Csv | ExportFormat::Json => {
            format!("mantenciones_{}.{}", state.month, format.as_str())
        }
        ExportFormat::Pdf => format!(
            "Reporte_Mantencion_{}_{}.pdf",
            state.month_label().replace(' ', "_"),
            chrono::Local::now().timestamp_millis()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::LocationFilter;

    #[test]
    fn default_names_follow_the_documented_patterns() {
        let state = ViewState {
            month: "2024-07".into(),
            location: LocationFilter::All,
            search: String::new(),
        };

        assert_eq!(
            default_file_name(&ExportFormat::Csv, &state),
            "mantenciones_2024-07.csv"
        );
        let pdf = default_file_name(&ExportFormat::Pdf, &state);
        assert!(pdf.starts_with("Reporte_Mantencion_julio_2024_"));
        assert!(pdf.ends_with(".pdf"));
    }
}
