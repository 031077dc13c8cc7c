//! Use-Case-Funktionen für Vertex/Edge-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_vertex` — Neuen Vertex hinzufügen
//! - `connect` — Kanten erstellen
//! - `delete` — Kontextmenü-Ziel löschen (Vertex oder Kante)
//! - `set_weight` — Kantengewicht per Zahleneingabe setzen

mod add_vertex;
mod connect;
mod delete;
mod set_weight;

pub use add_vertex::add_vertex_at_position;
pub use connect::add_edge;
pub use delete::delete_context_target;
pub use set_weight::set_weight_of_context_target;
