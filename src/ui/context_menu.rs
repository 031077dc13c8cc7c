//! Kontextmenü für Vertices und Kanten an der Rechtsklick-Position.

use super::weight_dialog::WeightDialogState;
use crate::app::AppIntent;
use crate::shared::{ContextTarget, InteractionState, RenderScene};

/// Zeigt das Kontextmenü, solange die Szene `ContextMenuOpen` meldet.
///
/// „Gewicht setzen…“ öffnet zuerst den Gewichts-Dialog; der Intent folgt
/// erst, wenn der Dialog beantwortet ist. Ein Klick außerhalb von Menü und
/// Zeichenfläche (z.B. ins Seitenpanel) schließt das Menü; Klicks auf die
/// Fläche liefert bereits die Canvas-Eingabe.
pub fn show_context_menu(
    ctx: &egui::Context,
    scene: &RenderScene,
    canvas_rect: egui::Rect,
    dialog: &mut WeightDialogState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let InteractionState::ContextMenuOpen { target, anchor, .. } = scene.interaction else {
        return events;
    };
    if dialog.visible {
        return events;
    }

    let current_weight = match target {
        ContextTarget::Edge { from, to } => scene
            .edges
            .iter()
            .find(|e| e.matches(from, to))
            .map(|e| e.weight),
        ContextTarget::Vertex(_) => None,
    };

    let area = egui::Area::new(egui::Id::new("graph_context_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(canvas_rect.min + egui::vec2(anchor.x, anchor.y))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                if ui.button("🗑 Löschen").clicked() {
                    events.push(AppIntent::DeleteRequested);
                }
                if let Some(weight) = current_weight {
                    if ui.button("⚖ Gewicht setzen…").clicked() {
                        dialog.open(weight);
                    }
                }
            });
        });

    let dismiss = !dialog.visible
        && ctx.input(|i| {
            i.pointer.any_click()
                && i.pointer
                    .interact_pos()
                    .is_some_and(|pos| is_outside_click(pos, area.response.rect, canvas_rect))
        });
    if dismiss {
        events.push(AppIntent::DismissMenuRequested);
    }

    events
}

/// Klick weder im Menü noch auf der Zeichenfläche
fn is_outside_click(pos: egui::Pos2, menu_rect: egui::Rect, canvas_rect: egui::Rect) -> bool {
    !menu_rect.contains(pos) && !canvas_rect.contains(pos)
}
