//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod interaction;
pub mod options;
mod render_scene;

pub use interaction::{ContextTarget, InteractionState};
pub use options::EditorOptions;
pub use options::{EDGE_HIT_THRESHOLD, VERTEX_RADIUS};
pub use render_scene::RenderScene;
