//! Prefilled share links (WhatsApp web link, mailto). Fire and forget: the
//! caller prints the URL, nothing confirms delivery.

use crate::core::filter::{Stats, ViewState};
use urlencoding::encode;

pub fn whatsapp_link(state: &ViewState, stats: &Stats) -> String {
    let location = match state.location.label() {
        "Todas las Ubicaciones" => "Todas",
        l => l,
    };

    let text = format!(
        "*Reporte de Mantenciones - {}*\n\n\
         📍 Ubicación: {}\n\
         🛗 Ascensores: {}\n\
         🪜 Escaleras: {}\n\
         ✅ Total Registros: {}\n\n\
         Enviado desde Gestor de Mantenciones.",
        state.month, location, stats.elevators, stats.escalators, stats.total
    );

    format!("https://wa.me/?text={}", encode(&text))
}

pub fn mailto_link(state: &ViewState, stats: &Stats) -> String {
    let location = match state.location.label() {
        "Todas las Ubicaciones" => "Todas",
        l => l,
    };

    let subject = format!("Reporte de Mantenciones {}", state.month);
    let body = format!(
        "Adjunto resumen de mantenciones para el mes {}.\n\n\
         Ubicación: {}\n\
         Total Registros: {}",
        state.month, location, stats.total
    );

    format!("mailto:?subject={}&body={}", encode(&subject), encode(&body))
}
