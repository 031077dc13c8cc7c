//! Use-Case-Funktionen der Interaktions-State-Machine.
//!
//! - `pick` — Primärklick auf einen Vertex (Kanten-Start/-Ende)
//! - `drag` — Vertex ziehen (ein Undo-Schritt pro Drag)
//! - `context_menu` — Kontextmenü öffnen/schließen

mod context_menu;
mod drag;
mod pick;

pub use context_menu::{dismiss_context_menu, open_context_menu};
pub use drag::{begin_drag, drag_to, end_drag};
pub use pick::pick_vertex;
