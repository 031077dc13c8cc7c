//! Application State — zentrale Datenhaltung.

use super::history::{EditHistory, Snapshot};
use super::CommandLog;
use crate::core::{AdjacencyFormat, Graph};
use crate::shared::{EditorOptions, InteractionState};
use glam::Vec2;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Das Graph-Modell (einziger Eigentümer von Vertices und Edges)
    pub graph: Graph,
    /// Transienter Interaktionszustand (Pending, Drag, Kontextmenü)
    pub interaction: InteractionState,
    /// Format des Adjazenz-Exports
    pub format: AdjacencyFormat,
    /// Kantengewichte anzeigen
    pub show_weights: bool,
    /// Lineare Undo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Start-Modus)
    pub options: EditorOptions,
    /// Zuletzt berechneter Adjazenz-Text
    pub adjacency_text: String,
    /// Der Adjazenz-Text wurde neu berechnet und noch nicht an den Host gemeldet
    pub adjacency_pending: bool,
    /// Letzte Validierungsmeldung (für die Statusleiste)
    pub last_validation_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State aus geladenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let mut graph = Graph::new(options.default_mode);
        graph.set_vertex_radius(options.vertex_radius);
        graph.set_surface_size(Vec2::from_array(options.surface_size));

        let format = options.default_format;
        let adjacency_text = graph.export(format);

        Self {
            graph,
            interaction: InteractionState::Idle,
            format,
            show_weights: options.show_weights,
            history: EditHistory::new(),
            command_log: CommandLog::new(),
            options,
            adjacency_text,
            adjacency_pending: true,
            last_validation_message: None,
        }
    }

    /// Gibt die Anzahl der Vertices zurück (für UI-Anzeige)
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Gibt die Anzahl der Edges zurück (für UI-Anzeige)
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Berechnet den Adjazenz-Text neu und merkt ihn zur Auslieferung vor.
    pub fn refresh_adjacency(&mut self) {
        self.adjacency_text = self.graph.export(self.format);
        self.adjacency_pending = true;
    }

    /// Setzt den Interaktionszustand auf `Idle` zurück.
    pub fn reset_interaction(&mut self) {
        self.interaction = InteractionState::Idle;
    }
}
