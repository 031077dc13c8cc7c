//! UI-Komponenten: Zeichenfläche, Seitenpanel, Kontextmenü, Dialoge.

pub mod canvas;
mod context_menu;
pub mod host;
mod keyboard;
/// Seitenpanel mit Modus, Format, Undo und Adjazenz-Text
pub mod panel;
pub mod status;
pub mod weight_dialog;

pub use canvas::{paint_scene, CanvasInput};
pub use context_menu::show_context_menu;
pub use host::UiHost;
pub use panel::render_side_panel;
pub use status::render_status_bar;
pub use weight_dialog::{show_validation_message, show_weight_dialog, WeightDialogState};
