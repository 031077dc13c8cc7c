//! Dialoge für Kantengewicht-Eingabe und Validierungsmeldungen.

use crate::app::AppIntent;

/// Zustand des Gewichts-Dialogs
///
/// Puffert die Antwort, bis der Controller sie über
/// `EditorHost::prompt_number` synchron abholt.
#[derive(Debug, Default)]
pub struct WeightDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Eingabetext (vorbelegt mit dem aktuellen Gewicht)
    pub input: String,
    answer: Option<String>,
}

impl WeightDialogState {
    /// Erstellt einen geschlossenen Dialog-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Öffnet den Dialog mit dem aktuellen Gewicht als Vorbelegung.
    pub fn open(&mut self, current: f64) {
        self.visible = true;
        self.input = current.to_string();
        self.answer = None;
    }

    /// Übernimmt den Eingabetext als Antwort und schließt den Dialog.
    pub fn confirm(&mut self) {
        self.answer = Some(self.input.clone());
        self.visible = false;
    }

    /// Verwirft die Eingabe und schließt den Dialog.
    pub fn cancel(&mut self) {
        self.answer = None;
        self.visible = false;
    }

    /// Holt die gepufferte Antwort ab (`None` = abgebrochen).
    pub fn take_answer(&mut self) -> Option<String> {
        self.answer.take()
    }
}

/// Zeigt den Gewichts-Dialog als modales Fenster.
///
/// OK und Abbrechen senden beide `SetWeightRequested`; der Controller
/// unterscheidet über die gepufferte Antwort.
pub fn show_weight_dialog(ctx: &egui::Context, dialog: &mut WeightDialogState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !dialog.visible {
        return events;
    }

    egui::Window::new("Kantengewicht")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Neues Gewicht (> 0):");
            let response = ui.text_edit_singleline(&mut dialog.input);
            response.request_focus();

            let (enter, escape) = ui.input(|i| {
                (
                    i.key_pressed(egui::Key::Enter),
                    i.key_pressed(egui::Key::Escape),
                )
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || enter {
                    dialog.confirm();
                    events.push(AppIntent::SetWeightRequested);
                } else if ui.button("Abbrechen").clicked() || escape {
                    dialog.cancel();
                    events.push(AppIntent::SetWeightRequested);
                }
            });
        });

    events
}

/// Zeigt eine Validierungsmeldung, bis sie bestätigt wird.
pub fn show_validation_message(ctx: &egui::Context, message: &mut Option<String>) {
    let Some(text) = message.as_deref() else {
        return;
    };

    let mut acknowledged = false;
    egui::Window::new("Ungültige Eingabe")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(text);
                ui.label("Bitte eine positive Zahl eingeben.");
                ui.add_space(6.0);
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });
        });

    if acknowledged {
        *message = None;
    }
}
