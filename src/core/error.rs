//! Fehlerarten der Graph-Mutationen.
//!
//! Alle Fehler sind recoverable: sie werden im Use-Case abgefangen und geloggt.

use thiserror::Error;

/// Fehler bei einer Mutation des Graph-Modells
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Kante existiert bereits (im Sinne des aktuellen Modus)
    #[error("Kante {from}→{to} existiert bereits")]
    DuplicateEdge { from: usize, to: usize },
    /// Gewicht ist nicht numerisch, nicht endlich oder ≤ 0
    #[error("ungültiges Kantengewicht: {input}")]
    InvalidWeight { input: String },
    /// Vertex-ID liegt außerhalb der Vertex-Sequenz
    #[error("Vertex {id} existiert nicht")]
    UnknownVertex { id: usize },
    /// Keine gespeicherte Kante mit exakt dieser Orientierung
    #[error("Kante {from}→{to} existiert nicht")]
    UnknownEdge { from: usize, to: usize },
    /// Kante referenziert einen nicht existierenden Vertex (Invariantenverletzung)
    #[error("Kante {from}→{to} referenziert Vertex außerhalb von 0..{vertex_count}")]
    OutOfBoundsReference {
        from: usize,
        to: usize,
        vertex_count: usize,
    },
}
