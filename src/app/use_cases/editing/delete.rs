//! Use-Case: Ziel des Kontextmenüs löschen.

use crate::app::AppState;
use crate::shared::ContextTarget;

/// Löscht den Vertex (inkl. inzidenter Kanten, mit Neunummerierung) oder die
/// Kante, auf die das offene Kontextmenü zeigt. Danach ist der Zustand `Idle`.
pub fn delete_context_target(state: &mut AppState) {
    let Some(target) = state.interaction.context_target() else {
        log::debug!("Löschen: kein Kontextmenü offen");
        return;
    };

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let result = match target {
        ContextTarget::Vertex(id) => state.graph.remove_vertex(id).map(|vertex| {
            log::info!("Vertex {} gelöscht, IDs neu nummeriert", vertex.id);
        }),
        ContextTarget::Edge { from, to } => state.graph.remove_edge(from, to).map(|edge| {
            log::info!("Kante {}→{} gelöscht", edge.from, edge.to);
        }),
    };

    if let Err(e) = result {
        state.history.pop_undo();
        log::warn!("Löschen fehlgeschlagen: {}", e);
    } else {
        state.refresh_adjacency();
    }
    state.reset_interaction();
}
