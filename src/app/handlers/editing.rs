//! Handler für Vertex/Edge-Editing.

use crate::app::use_cases;
use crate::app::{AppState, EditorHost};

/// Fügt einen neuen Vertex an der übergebenen Flächenposition hinzu.
pub fn add_vertex(state: &mut AppState, pos: glam::Vec2) {
    use_cases::editing::add_vertex_at_position(state, pos);
}

/// Erstellt eine Kante zwischen zwei Vertices und beendet die Auswahl.
///
/// Auch ein abgelehntes Duplikat führt zurück nach `Idle`.
pub fn add_edge(state: &mut AppState, from: usize, to: usize) {
    use_cases::editing::add_edge(state, from, to);
    state.reset_interaction();
}

/// Löscht das Ziel des offenen Kontextmenüs.
pub fn delete_context_target(state: &mut AppState) {
    use_cases::editing::delete_context_target(state);
}

/// Setzt das Gewicht der Kante im offenen Kontextmenü per Zahleneingabe.
pub fn set_weight_of_context_target(state: &mut AppState, host: &mut dyn EditorHost) {
    use_cases::editing::set_weight_of_context_target(state, host);
}

/// Leert den Graph (nicht rückgängig machbar).
pub fn clear_graph(state: &mut AppState) {
    use_cases::graph::clear_graph(state);
}
