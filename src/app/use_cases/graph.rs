//! Use-Cases für Graph-weite Resets: Leeren und Modus-Wechsel.
//!
//! Beide verwerfen die History vollständig und sind nicht rückgängig machbar.

use crate::app::AppState;
use crate::core::GraphMode;

/// Leert Vertices, Edges und History; Interaktionszustand wird `Idle`.
pub fn clear_graph(state: &mut AppState) {
    state.graph.clear();
    state.history.clear();
    state.reset_interaction();
    state.refresh_adjacency();
    log::info!("Graph geleert");
}

/// Wechselt den Graph-Modus mit vollständigem Reset.
pub fn set_mode(state: &mut AppState, mode: GraphMode) {
    state.graph.set_mode(mode);
    clear_graph(state);
    log::info!("Graph-Modus: {}", mode.label());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::InteractionState;
    use glam::Vec2;

    fn populated_state() -> AppState {
        let mut state = AppState::new();
        state.graph.add_vertex(Vec2::new(50.0, 50.0));
        state.graph.add_vertex(Vec2::new(150.0, 50.0));
        state.record_undo_snapshot();
        state.graph.add_edge(0, 1).expect("0-1");
        state.interaction = InteractionState::EdgePending { source: 1 };
        state
    }

    #[test]
    fn clear_empties_model_and_history() {
        let mut state = populated_state();

        clear_graph(&mut state);

        assert!(state.graph.is_empty());
        assert!(!state.can_undo());
        assert_eq!(state.interaction, InteractionState::Idle);
        assert_eq!(state.adjacency_text, "[\n\n]");
    }

    #[test]
    fn mode_change_is_a_full_reset() {
        let mut state = populated_state();

        set_mode(&mut state, GraphMode::Directed);

        assert_eq!(state.graph.mode(), GraphMode::Directed);
        assert!(state.graph.is_empty());
        assert!(!state.can_undo());
    }
}
