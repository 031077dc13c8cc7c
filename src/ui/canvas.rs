//! Zeichenfläche: egui-Zeiger-Events → AppIntent und Painting der RenderScene.

use super::keyboard;
use crate::app::AppIntent;
use crate::shared::RenderScene;
use glam::Vec2;

/// Rechteck-Innenabstand der Gewichts-Labels in Pixeln.
const WEIGHT_LABEL_PADDING: f32 = 2.0;
/// Öffnungswinkel der Pfeilspitze (je Seite).
const ARROW_HALF_ANGLE: f32 = std::f32::consts::FRAC_PI_6;

/// Verwaltet den Input-Zustand der Zeichenfläche
#[derive(Default)]
pub struct CanvasInput {
    /// Zuletzt gemeldete Flächengröße (Resize nur bei Änderung melden)
    last_size: Option<Vec2>,
}

impl CanvasInput {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { last_size: None }
    }

    /// Sammelt Zeichenflächen-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// `scene` ist die zuletzt gerenderte Szene (für Kontext-abhängige Tasten).
    pub fn collect_canvas_intents(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        scene: Option<&RenderScene>,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let rect = response.rect;

        let size = Vec2::new(rect.width(), rect.height());
        if self.last_size != Some(size) {
            self.last_size = Some(size);
            events.push(AppIntent::ViewportResized { size });
        }

        if let Some(scene) = scene {
            events.extend(keyboard::collect_keyboard_intents(ui, &scene.interaction));
        }

        // press_origin() liefert die exakte Klickposition vor der Drag-Schwelle
        if response.drag_started_by(egui::PointerButton::Primary) {
            if let Some(origin) = ui.input(|i| i.pointer.press_origin()) {
                events.push(AppIntent::PointerDown {
                    pos: to_surface(origin, rect),
                });
            }
        }
        if response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                events.push(AppIntent::PointerMoved {
                    pos: to_surface(pointer_pos, rect),
                });
            }
        }
        if response.drag_stopped_by(egui::PointerButton::Primary) {
            events.push(AppIntent::PointerUp);
        }

        if response.double_clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                events.push(AppIntent::DoubleClick {
                    pos: to_surface(pointer_pos, rect),
                });
            }
        } else if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                events.push(AppIntent::PrimaryClick {
                    pos: to_surface(pointer_pos, rect),
                });
            }
        }

        if response.secondary_clicked() {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                events.push(AppIntent::ContextClick {
                    pos: to_surface(pointer_pos, rect),
                });
            }
        }

        events
    }
}

/// Rechnet eine Bildschirmposition in Flächen-Koordinaten um.
fn to_surface(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y)
}

fn to_screen(pos: Vec2, rect: egui::Rect) -> egui::Pos2 {
    egui::pos2(rect.min.x + pos.x, rect.min.y + pos.y)
}

/// Wandelt eine RGBA-Farbe aus den Optionen in eine egui-Farbe.
pub(crate) fn color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

/// Berechnet die Pfeilspitze einer Kante `from→to`: `[Flügel, Spitze, Flügel]`.
///
/// Die Spitze sitzt auf dem Kreisrand des Ziel-Vertex. `None` für Kanten der Länge 0.
pub fn arrow_head(from: Vec2, to: Vec2, vertex_radius: f32, length: f32) -> Option<[Vec2; 3]> {
    let dir = (to - from).try_normalize()?;
    let tip = to - dir * vertex_radius;
    let back = -dir * length;
    let wing_a = tip + Vec2::from_angle(ARROW_HALF_ANGLE).rotate(back);
    let wing_b = tip + Vec2::from_angle(-ARROW_HALF_ANGLE).rotate(back);
    Some([wing_a, tip, wing_b])
}

/// Formatiert ein Gewicht wie im Adjazenz-Export (`1`, `2.5`).
pub fn weight_label(weight: f64) -> String {
    weight.to_string()
}

/// Zeichnet Kanten (mit Pfeilen und Gewichten) und Vertices der Szene.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let options = &scene.options;
    let edge_stroke = egui::Stroke::new(1.5, color32(options.edge_color));
    let radius = options.vertex_radius;

    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(250));

    for edge in &scene.edges {
        let Some((from, to)) = scene.edge_endpoints(edge) else {
            continue;
        };
        painter.line_segment([to_screen(from, rect), to_screen(to, rect)], edge_stroke);

        if scene.show_weights {
            let mid = to_screen((from + to) * 0.5, rect);
            let galley = painter.layout_no_wrap(
                weight_label(edge.weight),
                egui::FontId::proportional(options.weight_font_size),
                egui::Color32::BLACK,
            );
            let label_rect = egui::Rect::from_center_size(mid, galley.size())
                .expand(WEIGHT_LABEL_PADDING);
            painter.rect_filled(label_rect, 0.0, egui::Color32::WHITE);
            painter.galley(
                mid - galley.size() * 0.5,
                galley,
                egui::Color32::BLACK,
            );
        }

        if scene.mode.is_directed() {
            if let Some([wing_a, tip, wing_b]) =
                arrow_head(from, to, radius, options.arrow_length)
            {
                let tip = to_screen(tip, rect);
                painter.line_segment([to_screen(wing_a, rect), tip], edge_stroke);
                painter.line_segment([tip, to_screen(wing_b, rect)], edge_stroke);
            }
        }
    }

    let outline = egui::Stroke::new(1.0, color32(options.vertex_outline_color));
    for vertex in &scene.vertices {
        let center = to_screen(vertex.position, rect);
        let fill = if scene.is_pending(vertex.id) {
            color32(options.vertex_pending_color)
        } else {
            color32(options.vertex_color)
        };
        painter.circle(center, radius, fill, outline);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            vertex.id.to_string(),
            egui::FontId::proportional(options.vertex_font_size),
            egui::Color32::BLACK,
        );
    }
}
