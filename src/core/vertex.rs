//! Repräsentiert einen vom Benutzer platzierten Knoten.

use glam::Vec2;

/// Ein Knoten auf der Zeichenfläche
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Dichte ID: entspricht immer der Position in der Vertex-Sequenz
    pub id: usize,
    /// Mittelpunkt in Flächen-Koordinaten (Pixel)
    pub position: Vec2,
}

impl Vertex {
    /// Erstellt einen neuen Vertex
    pub fn new(id: usize, position: Vec2) -> Self {
        Self { id, position }
    }

    /// X-Koordinate des Mittelpunkts
    pub fn x(&self) -> f32 {
        self.position.x
    }

    /// Y-Koordinate des Mittelpunkts
    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Prüft ob `point` innerhalb von `radius` um den Mittelpunkt liegt.
    pub fn contains(&self, point: Vec2, radius: f32) -> bool {
        self.position.distance(point) <= radius
    }
}
