//! Graph Adjacency Editor.
//!
//! Interaktiver Editor für gewichtete Graphen mit live synchronisierter
//! Adjazenzmatrix bzw. Adjazenzliste. egui + eframe (glow).

use eframe::egui;
use graph_adjacency_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Graph Adjacency Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 680.0])
                .with_title("Graph Adjacency Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Graph Adjacency Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    host: ui::UiHost,
    canvas: ui::CanvasInput,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(editor_options);
        let controller = AppController::new();
        let mut host = ui::UiHost::new();
        controller.flush_to_host(&mut state, &mut host);

        Self {
            state,
            controller,
            host,
            canvas: ui::CanvasInput::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        if has_meaningful_events {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_side_panel(
            ctx,
            &self.state,
            self.host.adjacency_text(),
        ));

        let dialog_open =
            self.host.weight_dialog.visible || self.host.validation_message.is_some();
        let mut canvas_rect = egui::Rect::NOTHING;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                canvas_rect = rect;

                if !dialog_open {
                    events.extend(self.canvas.collect_canvas_intents(
                        ui,
                        &response,
                        self.host.scene(),
                    ));
                }

                if let Some(scene) = self.host.scene() {
                    ui::paint_scene(ui.painter(), rect, scene);
                }
            });

        // Kontextmenü liegt über der Zeichenfläche, Anker in Flächen-Koordinaten
        if let Some(scene) = self.host.scene().cloned() {
            events.extend(ui::show_context_menu(
                ctx,
                &scene,
                canvas_rect,
                &mut self.host.weight_dialog,
            ));
        }
        events.extend(ui::show_weight_dialog(ctx, &mut self.host.weight_dialog));
        ui::show_validation_message(ctx, &mut self.host.validation_message);

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) =
                self.controller
                    .handle_intent(&mut self.state, event, &mut self.host)
            {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
