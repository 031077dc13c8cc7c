//! Use-Case: Neuen Vertex an einer Flächenposition hinzufügen.

use crate::app::AppState;

/// Fügt einen neuen Vertex an der gegebenen Position hinzu.
///
/// Die Position wird nicht geklemmt; der Interaktionszustand bleibt erhalten.
pub fn add_vertex_at_position(state: &mut AppState, pos: glam::Vec2) {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let vertex = state.graph.add_vertex(pos);
    state.refresh_adjacency();

    log::info!(
        "Vertex {} an Position ({:.1}, {:.1}) hinzugefügt",
        vertex.id,
        vertex.x(),
        vertex.y()
    );
}
