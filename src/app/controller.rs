//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState, EditorHost};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Nach allen Commands wird die Szene an den Host gegeben und ein neu
    /// berechneter Adjazenz-Text ausgeliefert.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        intent: AppIntent,
        host: &mut dyn EditorHost,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command, host)?;
        }

        self.flush_to_host(state, host);
        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
        host: &mut dyn EditorHost,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::AddVertex { pos } => handlers::editing::add_vertex(state, pos),
            AppCommand::PickVertex { vertex } => {
                handlers::interaction::pick_vertex(state, vertex)
            }
            AppCommand::AddEdge { from, to } => handlers::editing::add_edge(state, from, to),
            AppCommand::DeleteContextTarget => handlers::editing::delete_context_target(state),
            AppCommand::SetWeightOfContextTarget => {
                handlers::editing::set_weight_of_context_target(state, host)
            }

            // === Drag ===
            AppCommand::BeginDrag { vertex } => handlers::interaction::begin_drag(state, vertex),
            AppCommand::DragTo { pos } => handlers::interaction::drag_to(state, pos),
            AppCommand::EndDrag => handlers::interaction::end_drag(state),

            // === Kontextmenü ===
            AppCommand::OpenContextMenu { target, anchor } => {
                handlers::interaction::open_context_menu(state, target, anchor)
            }
            AppCommand::DismissContextMenu => handlers::interaction::dismiss_context_menu(state),

            // === Ansicht & Konfiguration ===
            AppCommand::SetMode { mode } => handlers::view::set_mode(state, mode),
            AppCommand::SetFormat { format } => handlers::view::set_format(state, format),
            AppCommand::SetShowWeights { visible } => {
                handlers::view::set_show_weights(state, visible)
            }
            AppCommand::SetSurfaceSize { size } => handlers::view::set_surface_size(state, size),

            // === Graph & History ===
            AppCommand::ClearGraph => handlers::editing::clear_graph(state),
            AppCommand::Undo => handlers::history::undo(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }

    /// Gibt Szene und ggf. neuen Adjazenz-Text an den Host.
    pub fn flush_to_host(&self, state: &mut AppState, host: &mut dyn EditorHost) {
        if std::mem::take(&mut state.adjacency_pending) {
            host.show_adjacency(&state.adjacency_text);
        }
        let scene = self.build_render_scene(state);
        host.render(&scene);
    }
}
