//! Use-Case: Kanten erstellen.

use crate::app::AppState;
use crate::core::GraphError;

/// Erstellt eine Kante `from→to` mit dem konfigurierten Standard-Gewicht.
///
/// Duplikate (im Sinne des Modus) werden still verworfen: kein Snapshot,
/// Modell unverändert. Gibt `true` zurück, wenn die Kante angelegt wurde.
pub fn add_edge(state: &mut AppState, from: usize, to: usize) -> bool {
    if state.graph.vertex(from).is_none() || state.graph.vertex(to).is_none() {
        log::warn!(
            "Kante nicht möglich: Vertex {} oder {} existiert nicht",
            from,
            to
        );
        return false;
    }

    // Duplikat-Check vor dem Snapshot, damit kein leerer Undo-Schritt entsteht
    if state.graph.has_edge_between(from, to) {
        log::debug!("{}", GraphError::DuplicateEdge { from, to });
        return false;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let weight = state.options.default_edge_weight;
    match state.graph.add_weighted_edge(from, to, weight) {
        Ok(edge) => {
            state.refresh_adjacency();
            log::info!(
                "Kante {}→{} (Gewicht {}) erstellt",
                edge.from,
                edge.to,
                edge.weight
            );
            true
        }
        Err(e) => {
            // Snapshot wieder verwerfen, das Modell ist unverändert
            state.history.pop_undo();
            log::warn!("Kante {}→{} abgelehnt: {}", from, to, e);
            false
        }
    }
}
