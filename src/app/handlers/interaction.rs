//! Handler für Vertex-Auswahl, Drag und Kontextmenü.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::ContextTarget;

/// Verarbeitet einen Primärklick auf einen Vertex.
pub fn pick_vertex(state: &mut AppState, vertex: usize) {
    use_cases::interaction::pick_vertex(state, vertex);
}

/// Beginnt einen Drag (Snapshot).
pub fn begin_drag(state: &mut AppState, vertex: usize) {
    use_cases::interaction::begin_drag(state, vertex);
}

/// Verschiebt den gezogenen Vertex.
pub fn drag_to(state: &mut AppState, pos: glam::Vec2) {
    use_cases::interaction::drag_to(state, pos);
}

/// Beendet den Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::interaction::end_drag(state);
}

/// Öffnet das Kontextmenü.
pub fn open_context_menu(state: &mut AppState, target: ContextTarget, anchor: glam::Vec2) {
    use_cases::interaction::open_context_menu(state, target, anchor);
}

/// Schließt das Kontextmenü.
pub fn dismiss_context_menu(state: &mut AppState) {
    use_cases::interaction::dismiss_context_menu(state);
}
