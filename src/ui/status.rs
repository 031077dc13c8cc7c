//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::shared::InteractionState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Vertices: {} | Edges: {} | Modus: {}",
                state.vertex_count(),
                state.edge_count(),
                state.graph.mode().label()
            ));

            ui.separator();

            let hint = match state.interaction {
                InteractionState::Idle => "Doppelklick: Vertex | Klick: Kante beginnen".to_string(),
                InteractionState::EdgePending { source } => {
                    format!("Kante von {}: Ziel-Vertex anklicken", source)
                }
                InteractionState::Dragging { vertex } => format!("Verschiebe Vertex {}", vertex),
                InteractionState::ContextMenuOpen { .. } => "Kontextmenü offen".to_string(),
            };
            ui.label(hint);

            if let Some(command) = state.command_log.last_edit() {
                ui.separator();
                ui.label(format!("Letzte Änderung: {}", command.describe()));
            }

            if let Some(message) = &state.last_validation_message {
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(200, 60, 60), message);
            }
        });
    });
}
