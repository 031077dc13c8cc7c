//! Handler für Anzeige-Einstellungen: Modus, Format, Gewichte, Flächengröße.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{AdjacencyFormat, GraphMode};

/// Setzt den Graph-Modus (voller Reset).
pub fn set_mode(state: &mut AppState, mode: GraphMode) {
    use_cases::graph::set_mode(state, mode);
}

/// Setzt das Export-Format und berechnet den Adjazenz-Text neu.
pub fn set_format(state: &mut AppState, format: AdjacencyFormat) {
    state.format = format;
    state.refresh_adjacency();
    log::info!("Adjazenz-Format: {}", format.label());
}

/// Schaltet die Anzeige der Kantengewichte.
pub fn set_show_weights(state: &mut AppState, visible: bool) {
    state.show_weights = visible;
    log::debug!("Gewichts-Anzeige: {}", visible);
}

/// Übernimmt die neue Größe der Zeichenfläche.
pub fn set_surface_size(state: &mut AppState, size: glam::Vec2) {
    state.graph.set_surface_size(size);
}
