use crate::core::GraphSnapshot;

/// Snapshot reduziert auf die für Undo relevanten Teile.
///
/// Hält eine Tiefenkopie von Vertices und Edges; der Interaktionszustand
/// wird nicht gesichert, da Undo ihn ohnehin zurücksetzt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    /// Graph-Inhalt zum Zeitpunkt des Snapshots
    pub graph: GraphSnapshot,
}

impl Snapshot {
    /// Erstellt einen Snapshot vom aktuellen Live-Modell.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            graph: state.graph.snapshot(),
        }
    }

    /// Stellt den Snapshot als Live-Modell wieder her.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.graph.restore(self.graph);
    }
}

/// Lineare Undo-History mit Snapshotting (ohne Redo, ohne Tiefenbegrenzung).
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
}

impl EditHistory {
    /// Erstellt eine leere History.
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
        }
    }

    /// Legt einen vorab gebauten Snapshot ab. Die Annahme eines fertigen
    /// Snapshots vermeidet gleichzeitige Borrows auf den ganzen `AppState`.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        self.undo_stack.push(snap);
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Anzahl gespeicherter Undo-Schritte
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Gibt `true` zurück, wenn keine Undo-Schritte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// Entnimmt den obersten Snapshot (Aufrufer wendet ihn an).
    pub fn pop_undo(&mut self) -> Option<Snapshot> {
        self.undo_stack.pop()
    }

    /// Verwirft alle Snapshots (Reset/Clear, nicht rückgängig machbar).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
    }
}
