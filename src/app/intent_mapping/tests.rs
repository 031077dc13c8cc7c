use crate::app::{AppCommand, AppIntent, AppState};
use crate::shared::{ContextTarget, InteractionState};
use glam::Vec2;

use super::map_intent_to_commands;

fn state_with_edge() -> AppState {
    let mut state = AppState::new();
    state.graph.add_vertex(Vec2::new(100.0, 100.0));
    state.graph.add_vertex(Vec2::new(300.0, 100.0));
    state.graph.add_edge(0, 1).expect("Kante 0-1");
    state
}

#[test]
fn undo_requested_maps_to_undo() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::UndoRequested);

    assert_eq!(commands, vec![AppCommand::Undo]);
}

#[test]
fn pointer_down_on_vertex_starts_drag_only_when_idle() {
    let mut state = state_with_edge();
    let pos = Vec2::new(105.0, 95.0);

    let commands = map_intent_to_commands(&state, AppIntent::PointerDown { pos });
    assert_eq!(commands, vec![AppCommand::BeginDrag { vertex: 0 }]);

    state.interaction = InteractionState::EdgePending { source: 1 };
    let commands = map_intent_to_commands(&state, AppIntent::PointerDown { pos });
    assert!(commands.is_empty(), "Drag im EdgePending-Zustand gesperrt");
}

#[test]
fn pointer_down_on_empty_space_is_ignored() {
    let state = state_with_edge();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDown {
            pos: Vec2::new(500.0, 500.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn pointer_moves_only_map_while_dragging() {
    let mut state = state_with_edge();
    let pos = Vec2::new(150.0, 150.0);

    assert!(map_intent_to_commands(&state, AppIntent::PointerMoved { pos }).is_empty());
    assert!(map_intent_to_commands(&state, AppIntent::PointerUp).is_empty());

    state.interaction = InteractionState::Dragging { vertex: 0 };
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::PointerMoved { pos }),
        vec![AppCommand::DragTo { pos }]
    );
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::PointerUp),
        vec![AppCommand::EndDrag]
    );
}

#[test]
fn primary_click_with_open_menu_dismisses_first() {
    let mut state = state_with_edge();
    state.interaction = InteractionState::ContextMenuOpen {
        target: ContextTarget::Vertex(0),
        anchor: Vec2::new(100.0, 100.0),
        resume_pending: None,
    };

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PrimaryClick {
            pos: Vec2::new(300.0, 100.0),
        },
    );

    assert_eq!(
        commands,
        vec![
            AppCommand::DismissContextMenu,
            AppCommand::PickVertex { vertex: 1 }
        ]
    );
}

#[test]
fn double_click_on_vertex_is_ignored() {
    let state = state_with_edge();

    let on_vertex = map_intent_to_commands(
        &state,
        AppIntent::DoubleClick {
            pos: Vec2::new(100.0, 100.0),
        },
    );
    let on_empty = map_intent_to_commands(
        &state,
        AppIntent::DoubleClick {
            pos: Vec2::new(200.0, 300.0),
        },
    );

    assert!(on_vertex.is_empty());
    assert_eq!(
        on_empty,
        vec![AppCommand::AddVertex {
            pos: Vec2::new(200.0, 300.0)
        }]
    );
}

#[test]
fn context_click_resolves_vertex_before_edge() {
    let state = state_with_edge();

    let on_vertex = map_intent_to_commands(
        &state,
        AppIntent::ContextClick {
            pos: Vec2::new(115.0, 100.0),
        },
    );
    let on_edge = map_intent_to_commands(
        &state,
        AppIntent::ContextClick {
            pos: Vec2::new(200.0, 103.0),
        },
    );
    let on_empty = map_intent_to_commands(
        &state,
        AppIntent::ContextClick {
            pos: Vec2::new(200.0, 300.0),
        },
    );

    assert!(matches!(
        on_vertex.as_slice(),
        [AppCommand::OpenContextMenu {
            target: ContextTarget::Vertex(0),
            ..
        }]
    ));
    assert!(matches!(
        on_edge.as_slice(),
        [AppCommand::OpenContextMenu {
            target: ContextTarget::Edge { from: 0, to: 1 },
            ..
        }]
    ));
    assert!(on_empty.is_empty());
}

#[test]
fn context_click_is_ignored_while_dragging() {
    let mut state = state_with_edge();
    state.interaction = InteractionState::Dragging { vertex: 0 };

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ContextClick {
            pos: Vec2::new(300.0, 100.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn click_on_other_vertex_while_pending_maps_to_add_edge() {
    let mut state = state_with_edge();
    state.interaction = InteractionState::EdgePending { source: 1 };

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PrimaryClick {
            pos: Vec2::new(100.0, 100.0),
        },
    );
    assert_eq!(commands, vec![AppCommand::AddEdge { from: 1, to: 0 }]);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PrimaryClick {
            pos: Vec2::new(300.0, 100.0),
        },
    );
    assert_eq!(commands, vec![AppCommand::PickVertex { vertex: 1 }]);
}

#[test]
fn click_with_menu_over_pending_vertex_completes_edge() {
    let mut state = state_with_edge();
    state.interaction = InteractionState::ContextMenuOpen {
        target: ContextTarget::Vertex(1),
        anchor: Vec2::new(300.0, 100.0),
        resume_pending: Some(0),
    };

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PrimaryClick {
            pos: Vec2::new(300.0, 100.0),
        },
    );

    assert_eq!(
        commands,
        vec![
            AppCommand::DismissContextMenu,
            AppCommand::AddEdge { from: 0, to: 1 }
        ]
    );
}
