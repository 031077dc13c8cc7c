//! Use-Case: Kontextmenü öffnen und schließen.

use crate::app::AppState;
use crate::shared::{ContextTarget, InteractionState};

/// Öffnet das Kontextmenü für `target` an `anchor`.
///
/// Ein ausstehender Kanten-Startpunkt wird gemerkt und beim Schließen
/// wiederhergestellt. Während eines Drags passiert nichts.
pub fn open_context_menu(state: &mut AppState, target: ContextTarget, anchor: glam::Vec2) {
    if state.interaction.is_dragging() {
        log::debug!("Kontextmenü während Drag ignoriert");
        return;
    }

    let resume_pending = state.interaction.after_menu_dismissed().pending_vertex();
    state.interaction = InteractionState::ContextMenuOpen {
        target,
        anchor,
        resume_pending,
    };
    log::debug!("Kontextmenü für {:?} geöffnet", target);
}

/// Schließt das Kontextmenü und kehrt zum vorherigen Zustand zurück.
pub fn dismiss_context_menu(state: &mut AppState) {
    state.interaction = state.interaction.after_menu_dismissed();
}
