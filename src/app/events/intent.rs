use crate::core::{AdjacencyFormat, GraphMode};
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Alle Positionen sind Flächen-Koordinaten in Pixeln.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primärtaste gedrückt (möglicher Drag-Start)
    PointerDown { pos: Vec2 },
    /// Zeiger bewegt (nur während eines Drags relevant)
    PointerMoved { pos: Vec2 },
    /// Primärtaste losgelassen
    PointerUp,
    /// Einfacher Klick mit der Primärtaste
    PrimaryClick { pos: Vec2 },
    /// Doppelklick mit der Primärtaste
    DoubleClick { pos: Vec2 },
    /// Rechtsklick (Kontextmenü)
    ContextClick { pos: Vec2 },
    /// Kontextmenü schließen ohne Aktion
    DismissMenuRequested,
    /// Kontextmenü: Ziel löschen
    DeleteRequested,
    /// Kontextmenü: Gewicht der Kante setzen
    SetWeightRequested,
    /// Graph-Modus gewechselt (voller Reset)
    ModeChanged { mode: GraphMode },
    /// Export-Format gewechselt
    FormatChanged { format: AdjacencyFormat },
    /// Graph leeren
    ClearRequested,
    /// Letzten Schritt rückgängig machen
    UndoRequested,
    /// Gewichts-Anzeige umschalten
    WeightDisplayToggled { visible: bool },
    /// Größe der Zeichenfläche hat sich geändert
    ViewportResized { size: Vec2 },
}
