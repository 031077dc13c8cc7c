//! Schnittstelle zu den externen Kollaborateuren des Editors.
//!
//! Der Controller ruft den Host synchron auf; der Host darf das Modell nicht
//! mutieren, sondern nur darstellen und Eingaben einsammeln.

use crate::shared::RenderScene;

/// Ausgehende Kollaborateure: Darstellung, Zahleneingabe, Adjazenz-Anzeige.
pub trait EditorHost {
    /// Zeichnet die aktuelle Szene (nach Mutationen, Drag-Ticks und Zustandswechseln).
    fn render(&mut self, scene: &RenderScene);

    /// Fragt synchron eine Zahl ab, vorbelegt mit `current`.
    ///
    /// `None` bedeutet Abbruch. Der Rohtext wird vom Aufrufer validiert.
    fn prompt_number(&mut self, current: f64) -> Option<String>;

    /// Empfängt den neu berechneten Adjazenz-Text.
    fn show_adjacency(&mut self, text: &str);

    /// Meldet eine fehlgeschlagene Eingabe-Validierung an den Benutzer.
    fn report_validation(&mut self, message: &str);
}

/// Host ohne Ausgabe, der jede Zahlenabfrage abbricht.
///
/// Für Headless-Betrieb und Benchmarks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl EditorHost for NullHost {
    fn render(&mut self, _scene: &RenderScene) {}

    fn prompt_number(&mut self, _current: f64) -> Option<String> {
        None
    }

    fn show_adjacency(&mut self, _text: &str) {}

    fn report_validation(&mut self, _message: &str) {}
}
