//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;
use crate::shared::InteractionState;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    interaction: &InteractionState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_z_pressed, key_escape_pressed, key_del_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Delete),
        )
    });

    // Undo (Cmd/Ctrl + Z)
    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    // Escape/Delete wirken nur auf ein offenes Kontextmenü
    if matches!(interaction, InteractionState::ContextMenuOpen { .. }) {
        if key_escape_pressed {
            events.push(AppIntent::DismissMenuRequested);
        } else if key_del_pressed {
            events.push(AppIntent::DeleteRequested);
        }
    }

    events
}
