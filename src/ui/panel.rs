//! Seitenpanel: Modus, Format, Gewichts-Anzeige, Undo/Clear und Adjazenz-Text.

use crate::app::{AppIntent, AppState};
use crate::core::{AdjacencyFormat, GraphMode};

/// Rendert das Seitenpanel und gibt erzeugte Events zurück.
pub fn render_side_panel(
    ctx: &egui::Context,
    state: &AppState,
    adjacency_text: &str,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("graph_panel")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.heading("Graph");
            ui.separator();

            // ── Modus ──
            ui.label("Modus:");
            let mut mode = state.graph.mode();
            ui.horizontal(|ui| {
                for option in [GraphMode::Undirected, GraphMode::Directed] {
                    ui.radio_value(&mut mode, option, option.label());
                }
            });
            if mode != state.graph.mode() {
                events.push(AppIntent::ModeChanged { mode });
            }

            // ── Format ──
            ui.label("Darstellung:");
            let mut format = state.format;
            ui.horizontal(|ui| {
                for option in [AdjacencyFormat::Matrix, AdjacencyFormat::List] {
                    ui.radio_value(&mut format, option, option.label());
                }
            });
            if format != state.format {
                events.push(AppIntent::FormatChanged { format });
            }

            let mut show_weights = state.show_weights;
            if ui.checkbox(&mut show_weights, "Gewichte anzeigen").changed() {
                events.push(AppIntent::WeightDisplayToggled {
                    visible: show_weights,
                });
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new("↶ Undo"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                }
                if ui.button("Leeren").clicked() {
                    events.push(AppIntent::ClearRequested);
                }
            });

            ui.separator();
            ui.label("Adjazenz:");
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add(egui::Label::new(
                        egui::RichText::new(adjacency_text).monospace(),
                    ));
                });
        });

    events
}
