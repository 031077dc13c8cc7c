//! egui-Implementierung der Host-Schnittstelle.

use super::weight_dialog::WeightDialogState;
use crate::app::EditorHost;
use crate::shared::RenderScene;

/// Sammelt Szene, Adjazenz-Text und Meldungen für den nächsten Frame.
#[derive(Default)]
pub struct UiHost {
    scene: Option<RenderScene>,
    adjacency_text: String,
    /// Offene Validierungsmeldung (modal bis bestätigt)
    pub validation_message: Option<String>,
    /// Gewichts-Dialog mit gepufferter Antwort
    pub weight_dialog: WeightDialogState,
}

impl UiHost {
    /// Erstellt einen leeren Host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zuletzt gerenderte Szene
    pub fn scene(&self) -> Option<&RenderScene> {
        self.scene.as_ref()
    }

    /// Zuletzt empfangener Adjazenz-Text
    pub fn adjacency_text(&self) -> &str {
        &self.adjacency_text
    }
}

impl EditorHost for UiHost {
    fn render(&mut self, scene: &RenderScene) {
        self.scene = Some(scene.clone());
    }

    fn prompt_number(&mut self, current: f64) -> Option<String> {
        let answer = self.weight_dialog.take_answer();
        if answer.is_none() {
            log::debug!("Gewichts-Eingabe abgebrochen (aktuell {})", current);
        }
        answer
    }

    fn show_adjacency(&mut self, text: &str) {
        self.adjacency_text = text.to_string();
    }

    fn report_validation(&mut self, message: &str) {
        self.validation_message = Some(message.to_string());
    }
}
