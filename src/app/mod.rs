//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
pub mod host;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Graph, Interaktion, Anzeige).
pub mod state;
pub mod use_cases;

pub use crate::core::{AdjacencyFormat, Graph, GraphMode};
pub use crate::shared::{ContextTarget, InteractionState};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::EditHistory;
pub use host::{EditorHost, NullHost};
pub use render_scene::build as build_render_scene;
pub use state::AppState;
