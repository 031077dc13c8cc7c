//! Use-Case: Kantengewicht über den Zahlen-Dialog des Hosts setzen.

use crate::app::{AppState, EditorHost};
use crate::core::parse_weight;
use crate::shared::ContextTarget;

/// Fragt beim Host ein neues Gewicht für die Kante im offenen Kontextmenü ab.
///
/// - Vertex-Ziel oder kein Menü: No-op
/// - Abbruch der Eingabe: Modell unverändert, Zustand `Idle`
/// - Ungültige Eingabe: Validierungsmeldung an den Host, Modell unverändert
/// - Gültige Eingabe: Snapshot, dann Gewicht setzen
pub fn set_weight_of_context_target(state: &mut AppState, host: &mut dyn EditorHost) {
    let Some(ContextTarget::Edge { from, to }) = state.interaction.context_target() else {
        log::debug!("Gewicht setzen: kein Kanten-Ziel im Kontextmenü");
        return;
    };

    let Some(current) = state
        .graph
        .find_edge(from, to)
        .and_then(|index| state.graph.edge(index))
        .map(|edge| edge.weight)
    else {
        log::warn!("Gewicht setzen: Kante {}→{} existiert nicht mehr", from, to);
        state.reset_interaction();
        return;
    };

    let answer = host.prompt_number(current);
    state.reset_interaction();

    let Some(input) = answer else {
        log::debug!("Gewicht setzen für {}→{} abgebrochen", from, to);
        return;
    };

    let weight = match parse_weight(&input) {
        Ok(weight) => weight,
        Err(e) => {
            let message = e.to_string();
            log::warn!("Gewicht für {}→{} abgelehnt: {}", from, to, message);
            host.report_validation(&message);
            state.last_validation_message = Some(message);
            return;
        }
    };

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    if let Err(e) = state.graph.set_edge_weight(from, to, weight) {
        state.history.pop_undo();
        log::warn!("Gewicht setzen fehlgeschlagen: {}", e);
        return;
    }
    state.last_validation_message = None;
    state.refresh_adjacency();
    log::info!("Gewicht von {}→{} auf {} gesetzt", from, to, weight);
}
