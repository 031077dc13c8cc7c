//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        vertices: state.graph.vertices().to_vec(),
        edges: state.graph.edges().to_vec(),
        mode: state.graph.mode(),
        interaction: state.interaction,
        show_weights: state.show_weights,
        can_undo: state.can_undo(),
        surface_size: state.graph.surface_size(),
        options: state.options.clone(),
    }
}
