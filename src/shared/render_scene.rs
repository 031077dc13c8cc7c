//! Render-Szene als expliziter Übergabevertrag zwischen App und Presentation-Adapter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::EditorOptions;
use super::InteractionState;
use crate::core::{Edge, GraphMode, Vertex};
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Alle Vertices in ID-Reihenfolge (Kopie)
    pub vertices: Vec<Vertex>,
    /// Alle Edges in Speicherreihenfolge (Kopie)
    pub edges: Vec<Edge>,
    /// Graph-Modus (Pfeile nur im gerichteten Modus)
    pub mode: GraphMode,
    /// Interaktionszustand (Hervorhebung, Kontextmenü)
    pub interaction: InteractionState,
    /// Kantengewichte anzeigen
    pub show_weights: bool,
    /// Ob ein Undo-Schritt verfügbar ist
    pub can_undo: bool,
    /// Größe der Zeichenfläche
    pub surface_size: Vec2,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob der Vertex als ausstehender Startpunkt hervorgehoben wird.
    pub fn is_pending(&self, vertex_id: usize) -> bool {
        self.interaction.pending_vertex() == Some(vertex_id)
    }

    /// Liefert die Endpunkte einer Kante, falls beide existieren.
    pub fn edge_endpoints(&self, edge: &Edge) -> Option<(Vec2, Vec2)> {
        let from = self.vertices.get(edge.from)?;
        let to = self.vertices.get(edge.to)?;
        Some((from.position, to.position))
    }
}
