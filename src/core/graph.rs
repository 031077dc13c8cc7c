//! Das zentrale Graph-Modell mit Vertices, Edges und Modus.

use super::adjacency::{export_adjacency, AdjacencyFormat};
use super::edge::is_valid_weight;
use super::geometry::{self, HitTarget};
use super::{Edge, GraphError, GraphMode, Vertex, DEFAULT_EDGE_WEIGHT};
use glam::Vec2;

/// Standard-Größe der Zeichenfläche, bis der Viewport gemeldet wird.
pub const DEFAULT_SURFACE_SIZE: Vec2 = Vec2::new(800.0, 600.0);
/// Standard-Radius eines Vertex in Pixeln.
pub const DEFAULT_VERTEX_RADIUS: f32 = 20.0;

/// Unveränderliche Tiefenkopie von Vertices und Edges für die Undo-History.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphSnapshot {
    /// Vertices zum Zeitpunkt des Snapshots
    pub vertices: Vec<Vertex>,
    /// Edges zum Zeitpunkt des Snapshots
    pub edges: Vec<Edge>,
}

/// Vollständiges Graph-Modell
///
/// Invarianten:
/// - `vertices[i].id == i` für alle `i`
/// - jede Kante referenziert nur IDs `< vertices.len()`
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    mode: GraphMode,
    /// Größe der Zeichenfläche (Clamp-Bereich für Vertex-Positionen)
    surface_size: Vec2,
    /// Vertex-Radius (Clamp-Rand und Hit-Radius)
    vertex_radius: f32,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(GraphMode::default())
    }
}

impl Graph {
    /// Erstellt einen leeren Graph im gegebenen Modus
    pub fn new(mode: GraphMode) -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            mode,
            surface_size: DEFAULT_SURFACE_SIZE,
            vertex_radius: DEFAULT_VERTEX_RADIUS,
        }
    }

    /// Aktueller Modus
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Setzt den Modus. Bestehende Kanten werden nicht uminterpretiert;
    /// der Aufrufer ist für das Zurücksetzen verantwortlich.
    pub fn set_mode(&mut self, mode: GraphMode) {
        self.mode = mode;
    }

    /// Alle Vertices in ID-Reihenfolge
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Alle Edges in Speicherreihenfolge
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Vertex per ID
    pub fn vertex(&self, id: usize) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Kante per Position in der Kanten-Sequenz
    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// Anzahl der Vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Anzahl der Edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Gibt `true` zurück, wenn weder Vertices noch Edges existieren.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// Größe der Zeichenfläche
    pub fn surface_size(&self) -> Vec2 {
        self.surface_size
    }

    /// Setzt die Größe der Zeichenfläche (Viewport-Resize).
    ///
    /// Bestehende Positionen werden nicht nachträglich geklemmt.
    pub fn set_surface_size(&mut self, size: Vec2) {
        self.surface_size = size.max(Vec2::ZERO);
    }

    /// Vertex-Radius in Pixeln
    pub fn vertex_radius(&self) -> f32 {
        self.vertex_radius
    }

    /// Setzt den Vertex-Radius (aus den Optionen).
    pub fn set_vertex_radius(&mut self, radius: f32) {
        self.vertex_radius = radius.max(0.0);
    }

    /// Hängt einen Vertex mit `id = vertex_count()` an.
    pub fn add_vertex(&mut self, position: Vec2) -> Vertex {
        let vertex = Vertex::new(self.vertices.len(), position);
        self.vertices.push(vertex);
        vertex
    }

    /// Mode-abhängiger Duplikat-Check für das Paar `(from, to)`.
    pub fn has_edge_between(&self, from: usize, to: usize) -> bool {
        self.edges.iter().any(|e| e.connects(from, to, self.mode))
    }

    /// Findet die erste Kante mit exakt dieser Orientierung.
    pub fn find_edge(&self, from: usize, to: usize) -> Option<usize> {
        self.edges.iter().position(|e| e.matches(from, to))
    }

    /// Fügt eine Kante mit Standard-Gewicht hinzu.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<Edge, GraphError> {
        self.add_weighted_edge(from, to, DEFAULT_EDGE_WEIGHT)
    }

    /// Fügt eine Kante hinzu.
    ///
    /// Lehnt Duplikate im Sinne des Modus ab; das Modell bleibt dann unverändert.
    pub fn add_weighted_edge(
        &mut self,
        from: usize,
        to: usize,
        weight: f64,
    ) -> Result<Edge, GraphError> {
        self.ensure_vertex(from)?;
        self.ensure_vertex(to)?;
        if !is_valid_weight(weight) {
            return Err(GraphError::InvalidWeight {
                input: weight.to_string(),
            });
        }
        if self.has_edge_between(from, to) {
            return Err(GraphError::DuplicateEdge { from, to });
        }

        let edge = Edge::new(from, to, weight);
        self.edges.push(edge);
        Ok(edge)
    }

    /// Entfernt einen Vertex inklusive aller inzidenten Kanten und nummeriert neu.
    ///
    /// Die Operation arbeitet auf einer Kopie und tauscht erst am Ende ein,
    /// ein teilweise renummerierter Zustand ist daher nie sichtbar.
    pub fn remove_vertex(&mut self, id: usize) -> Result<Vertex, GraphError> {
        self.ensure_vertex(id)?;

        let mut vertices = self.vertices.clone();
        let removed = vertices.remove(id);
        for (index, vertex) in vertices.iter_mut().enumerate() {
            vertex.id = index;
        }

        let edges: Vec<Edge> = self
            .edges
            .iter()
            .filter(|e| !e.touches(id))
            .map(|e| Edge {
                from: if e.from > id { e.from - 1 } else { e.from },
                to: if e.to > id { e.to - 1 } else { e.to },
                weight: e.weight,
            })
            .collect();

        self.vertices = vertices;
        self.edges = edges;
        Ok(removed)
    }

    /// Entfernt die erste gespeicherte Kante mit exakt `(from, to)`.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<Edge, GraphError> {
        let index = self
            .find_edge(from, to)
            .ok_or(GraphError::UnknownEdge { from, to })?;
        Ok(self.edges.remove(index))
    }

    /// Setzt das Gewicht der ersten Kante mit exakt `(from, to)`.
    pub fn set_edge_weight(
        &mut self,
        from: usize,
        to: usize,
        weight: f64,
    ) -> Result<(), GraphError> {
        if !is_valid_weight(weight) {
            return Err(GraphError::InvalidWeight {
                input: weight.to_string(),
            });
        }
        let index = self
            .find_edge(from, to)
            .ok_or(GraphError::UnknownEdge { from, to })?;
        self.edges[index].weight = weight;
        Ok(())
    }

    /// Verschiebt einen Vertex, geklemmt auf die Fläche abzüglich Radius.
    pub fn move_vertex(&mut self, id: usize, position: Vec2) -> Result<Vec2, GraphError> {
        let clamped = self.clamp_to_surface(position);
        let vertex = self
            .vertices
            .get_mut(id)
            .ok_or(GraphError::UnknownVertex { id })?;
        vertex.position = clamped;
        Ok(clamped)
    }

    /// Klemmt eine Position auf `[r, w-r] × [r, h-r]`.
    ///
    /// Ist die Fläche kleiner als `2r`, fällt der Bereich auf `r` zusammen.
    pub fn clamp_to_surface(&self, position: Vec2) -> Vec2 {
        let r = Vec2::splat(self.vertex_radius);
        let max = (self.surface_size - r).max(r);
        position.clamp(r, max)
    }

    /// Leert Vertices und Edges.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    /// Löst eine Flächenposition auf einen Vertex oder eine Kante auf.
    pub fn hit_test(&self, point: Vec2, edge_threshold: f32) -> Option<HitTarget> {
        geometry::hit_test(
            &self.vertices,
            &self.edges,
            point,
            self.vertex_radius,
            edge_threshold,
        )
    }

    /// Erster Vertex, dessen Kreis `point` enthält.
    pub fn vertex_at(&self, point: Vec2) -> Option<usize> {
        geometry::find_vertex_at(&self.vertices, point, self.vertex_radius)
    }

    /// Adjazenz-Export des aktuellen Zustands im gegebenen Format.
    pub fn export(&self, format: AdjacencyFormat) -> String {
        export_adjacency(self.vertices.len(), &self.edges, self.mode, format)
    }

    /// Erstellt eine Tiefenkopie für die History.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
        }
    }

    /// Übernimmt einen Snapshot als Live-Modell.
    pub fn restore(&mut self, snapshot: GraphSnapshot) {
        self.vertices = snapshot.vertices;
        self.edges = snapshot.edges;
        self.drop_dangling_edges();
    }

    /// Entfernt Kanten mit Endpunkten außerhalb der Vertex-Sequenz.
    ///
    /// Darf bei intakten Invarianten nie etwas finden; jeder Fund wird als
    /// Fehler geloggt. Gibt die Anzahl entfernter Kanten zurück.
    pub fn drop_dangling_edges(&mut self) -> usize {
        let vertex_count = self.vertices.len();
        let before = self.edges.len();
        self.edges.retain(|e| {
            let valid = e.from < vertex_count && e.to < vertex_count;
            if !valid {
                log::error!(
                    "{}",
                    GraphError::OutOfBoundsReference {
                        from: e.from,
                        to: e.to,
                        vertex_count,
                    }
                );
            }
            valid
        });
        before - self.edges.len()
    }

    fn ensure_vertex(&self, id: usize) -> Result<(), GraphError> {
        if id < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex { id })
        }
    }
}
