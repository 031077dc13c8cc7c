//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier fällt die Entscheidung, welches Ziel eine Zeigerposition trifft;
//! die Use-Cases prüfen danach nur noch den Interaktionszustand.

use super::{AppCommand, AppIntent, AppState};
use crate::core::HitTarget;
use crate::shared::{ContextTarget, InteractionState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let menu_open = matches!(state.interaction, InteractionState::ContextMenuOpen { .. });
    let dragging = state.interaction.is_dragging();

    match intent {
        AppIntent::PointerDown { pos } => {
            if state.interaction != InteractionState::Idle {
                return Vec::new();
            }
            state
                .graph
                .vertex_at(pos)
                .map(|vertex| vec![AppCommand::BeginDrag { vertex }])
                .unwrap_or_default()
        }
        AppIntent::PointerMoved { pos } if dragging => vec![AppCommand::DragTo { pos }],
        AppIntent::PointerMoved { .. } => Vec::new(),
        AppIntent::PointerUp if dragging => vec![AppCommand::EndDrag],
        AppIntent::PointerUp => Vec::new(),
        AppIntent::PrimaryClick { pos } => {
            if dragging {
                return Vec::new();
            }
            let mut commands = Vec::new();
            if menu_open {
                commands.push(AppCommand::DismissContextMenu);
            }
            let Some(vertex) = state.graph.vertex_at(pos) else {
                return commands;
            };
            // Zustand nach evtl. Menü-Schließen entscheidet über Kante oder Auswahl
            match state.interaction.after_menu_dismissed() {
                InteractionState::EdgePending { source } if source != vertex => {
                    commands.push(AppCommand::AddEdge {
                        from: source,
                        to: vertex,
                    });
                }
                _ => commands.push(AppCommand::PickVertex { vertex }),
            }
            commands
        }
        AppIntent::DoubleClick { pos } => {
            if dragging || state.graph.vertex_at(pos).is_some() {
                return Vec::new();
            }
            let mut commands = Vec::new();
            if menu_open {
                commands.push(AppCommand::DismissContextMenu);
            }
            commands.push(AppCommand::AddVertex { pos });
            commands
        }
        AppIntent::ContextClick { pos } => {
            if dragging {
                return Vec::new();
            }
            let target = match state.graph.hit_test(pos, state.options.edge_hit_threshold) {
                Some(HitTarget::Vertex(id)) => ContextTarget::Vertex(id),
                Some(HitTarget::Edge(index)) => match state.graph.edge(index) {
                    Some(edge) => ContextTarget::Edge {
                        from: edge.from,
                        to: edge.to,
                    },
                    None => return Vec::new(),
                },
                None => return Vec::new(),
            };
            vec![AppCommand::OpenContextMenu {
                target,
                anchor: pos,
            }]
        }
        AppIntent::DismissMenuRequested if menu_open => vec![AppCommand::DismissContextMenu],
        AppIntent::DismissMenuRequested => Vec::new(),
        AppIntent::DeleteRequested => vec![AppCommand::DeleteContextTarget],
        AppIntent::SetWeightRequested => vec![AppCommand::SetWeightOfContextTarget],
        AppIntent::ModeChanged { mode } => vec![AppCommand::SetMode { mode }],
        AppIntent::FormatChanged { format } => vec![AppCommand::SetFormat { format }],
        AppIntent::ClearRequested => vec![AppCommand::ClearGraph],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::WeightDisplayToggled { visible } => {
            vec![AppCommand::SetShowWeights { visible }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetSurfaceSize { size }],
    }
}

#[cfg(test)]
mod tests;
