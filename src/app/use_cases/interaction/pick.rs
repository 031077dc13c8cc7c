//! Use-Case: Vertex per Primärklick anwählen.

use crate::app::use_cases::editing::add_edge;
use crate::app::AppState;
use crate::shared::InteractionState;

/// Verarbeitet einen Primärklick auf `vertex`.
///
/// - `Idle`: Vertex wird Startpunkt (`EdgePending`)
/// - `EdgePending` auf demselben Vertex: Auswahl aufheben
/// - `EdgePending` auf anderem Vertex: Kante versuchen, danach `Idle`
pub fn pick_vertex(state: &mut AppState, vertex: usize) {
    match state.interaction {
        InteractionState::Idle => {
            state.interaction = InteractionState::EdgePending { source: vertex };
            log::info!("Startknoten {} gewählt", vertex);
        }
        InteractionState::EdgePending { source } if source == vertex => {
            state.reset_interaction();
            log::debug!("Startknoten {} abgewählt", vertex);
        }
        InteractionState::EdgePending { source } => {
            add_edge(state, source, vertex);
            state.reset_interaction();
        }
        other => {
            log::debug!("Vertex-Klick im Zustand {:?} ignoriert", other);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn state_with_vertices(count: usize) -> AppState {
        let mut state = AppState::new();
        for i in 0..count {
            state.graph.add_vertex(Vec2::new(50.0 + i as f32 * 100.0, 50.0));
        }
        state
    }

    #[test]
    fn first_pick_sets_pending_and_second_on_same_clears() {
        let mut state = state_with_vertices(2);

        pick_vertex(&mut state, 0);
        assert_eq!(state.interaction, InteractionState::EdgePending { source: 0 });

        pick_vertex(&mut state, 0);
        assert_eq!(state.interaction, InteractionState::Idle);
        assert_eq!(state.graph.edge_count(), 0);
    }

    #[test]
    fn pick_on_other_vertex_connects_and_returns_idle() {
        let mut state = state_with_vertices(2);

        pick_vertex(&mut state, 1);
        pick_vertex(&mut state, 0);

        assert_eq!(state.interaction, InteractionState::Idle);
        assert_eq!(state.graph.find_edge(1, 0), Some(0));
    }

    #[test]
    fn duplicate_still_returns_idle() {
        let mut state = state_with_vertices(2);
        state.graph.add_edge(0, 1).expect("0-1");

        pick_vertex(&mut state, 1);
        pick_vertex(&mut state, 0);

        assert_eq!(state.interaction, InteractionState::Idle);
        assert_eq!(state.graph.edge_count(), 1);
        assert!(!state.can_undo());
    }
}
