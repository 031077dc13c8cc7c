//! Handler für Undo.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
///
/// Nur ein tatsächlich ausgeführtes Undo setzt den Interaktionszustand auf
/// `Idle`; bei leerer History bleiben Pending-Vertex und Kontextmenü erhalten.
pub fn undo(state: &mut AppState) {
    let Some(prev) = state.history.pop_undo() else {
        log::debug!("Undo: nichts zu tun");
        return;
    };

    state.reset_interaction();
    prev.apply_to(state);
    state.refresh_adjacency();
    log::info!("Undo ausgeführt");
}
