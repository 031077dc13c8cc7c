//! Use-Case: Vertex ziehen.
//!
//! Der Snapshot entsteht einmal beim Drag-Start, damit der ganze Drag
//! ein einziger Undo-Schritt ist.

use crate::app::AppState;
use crate::shared::InteractionState;

/// Beginnt einen Drag auf `vertex` (nur aus `Idle`).
pub fn begin_drag(state: &mut AppState, vertex: usize) {
    if state.interaction != InteractionState::Idle {
        log::debug!("Drag-Start im Zustand {:?} ignoriert", state.interaction);
        return;
    }
    if state.graph.vertex(vertex).is_none() {
        log::warn!("Drag-Start: Vertex {} existiert nicht", vertex);
        return;
    }

    state.record_undo_snapshot();
    state.interaction = InteractionState::Dragging { vertex };
    log::debug!("Drag von Vertex {} begonnen", vertex);
}

/// Verschiebt den gezogenen Vertex, geklemmt auf die Zeichenfläche.
pub fn drag_to(state: &mut AppState, pos: glam::Vec2) {
    let Some(vertex) = state.interaction.dragged_vertex() else {
        return;
    };

    if let Err(e) = state.graph.move_vertex(vertex, pos) {
        log::warn!("Drag abgebrochen: {}", e);
        state.reset_interaction();
    }
}

/// Beendet den Drag; der Export wird mit der Endposition nicht neu berechnet,
/// da Positionen nicht in die Adjazenz eingehen.
pub fn end_drag(state: &mut AppState) {
    if let Some(vertex) = state.interaction.dragged_vertex() {
        if let Some(v) = state.graph.vertex(vertex) {
            log::info!(
                "Vertex {} nach ({:.1}, {:.1}) verschoben",
                vertex,
                v.x(),
                v.y()
            );
        }
        state.reset_interaction();
    }
}
