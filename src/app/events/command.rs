use crate::core::{AdjacencyFormat, GraphMode};
use crate::shared::ContextTarget;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Editing ===
    /// Neuen Vertex an Flächenposition hinzufügen
    AddVertex { pos: Vec2 },
    /// Vertex per Primärklick anwählen (Start- oder Endpunkt einer Kante)
    PickVertex { vertex: usize },
    /// Kante zwischen zwei Vertices erstellen
    AddEdge { from: usize, to: usize },
    /// Ziel des offenen Kontextmenüs löschen
    DeleteContextTarget,
    /// Gewicht der Kante im offenen Kontextmenü abfragen und setzen
    SetWeightOfContextTarget,

    // === Drag ===
    /// Drag eines Vertex beginnen (Snapshot)
    BeginDrag { vertex: usize },
    /// Gezogenen Vertex an Position verschieben
    DragTo { pos: Vec2 },
    /// Drag beenden
    EndDrag,

    // === Kontextmenü ===
    /// Kontextmenü für ein Ziel öffnen
    OpenContextMenu { target: ContextTarget, anchor: Vec2 },
    /// Kontextmenü schließen und vorherigen Zustand wiederherstellen
    DismissContextMenu,

    // === Ansicht & Konfiguration ===
    /// Graph-Modus setzen (voller Reset)
    SetMode { mode: GraphMode },
    /// Export-Format setzen
    SetFormat { format: AdjacencyFormat },
    /// Gewichts-Anzeige setzen
    SetShowWeights { visible: bool },
    /// Größe der Zeichenfläche setzen
    SetSurfaceSize { size: Vec2 },

    // === Graph & History ===
    /// Graph leeren (nicht rückgängig machbar)
    ClearGraph,
    /// Letzten Snapshot wiederherstellen
    Undo,
}

impl AppCommand {
    /// Gibt `true` zurück, wenn der Command das Graph-Modell verändern kann.
    pub fn is_model_edit(&self) -> bool {
        matches!(
            self,
            Self::AddVertex { .. }
                | Self::AddEdge { .. }
                | Self::DeleteContextTarget
                | Self::SetWeightOfContextTarget
                | Self::BeginDrag { .. }
                | Self::SetMode { .. }
                | Self::ClearGraph
                | Self::Undo
        )
    }

    /// Kurzbeschreibung für die Status-Bar
    pub fn describe(&self) -> String {
        match self {
            Self::AddVertex { pos } => format!("Vertex bei ({:.0}, {:.0})", pos.x, pos.y),
            Self::PickVertex { vertex } => format!("Vertex {} gewählt", vertex),
            Self::AddEdge { from, to } => format!("Kante {}→{}", from, to),
            Self::DeleteContextTarget => "Löschen".to_string(),
            Self::SetWeightOfContextTarget => "Gewicht setzen".to_string(),
            Self::BeginDrag { vertex } => format!("Vertex {} verschoben", vertex),
            Self::DragTo { .. } | Self::EndDrag => "Verschieben".to_string(),
            Self::OpenContextMenu { .. } | Self::DismissContextMenu => "Kontextmenü".to_string(),
            Self::SetMode { mode } => format!("Modus {}", mode.label()),
            Self::SetFormat { format } => format!("Format {}", format.label()),
            Self::SetShowWeights { visible } => {
                format!("Gewichte {}", if *visible { "an" } else { "aus" })
            }
            Self::SetSurfaceSize { .. } => "Flächengröße".to_string(),
            Self::ClearGraph => "Graph geleert".to_string(),
            Self::Undo => "Undo".to_string(),
        }
    }
}
