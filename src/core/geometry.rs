//! Rein-mathematische Hit-Tests: Punkt↔Kreis und Punkt↔Strecke.
//!
//! Zustandslos; arbeitet nur auf Slices von Vertices und Edges.

use super::{Edge, Vertex};
use glam::Vec2;

/// Ergebnis eines Hit-Tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Vertex mit dieser ID getroffen
    Vertex(usize),
    /// Kante an dieser Position in der Kanten-Sequenz getroffen
    Edge(usize),
}

/// Kürzester Abstand von `point` zur Strecke `a`–`b`.
///
/// Der Projektionsparameter wird auf `[0, 1]` geklemmt; eine Strecke der
/// Länge 0 degeneriert zum Punktabstand.
pub fn point_segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    let t = if len_sq > 0.0 {
        ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    point.distance(a + ab * t)
}

/// Prüft ob `point` in der um `margin` erweiterten Bounding-Box von `a`–`b` liegt.
pub fn within_expanded_bounds(point: Vec2, a: Vec2, b: Vec2, margin: f32) -> bool {
    let min = a.min(b) - Vec2::splat(margin);
    let max = a.max(b) + Vec2::splat(margin);
    point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
}

/// Erster Vertex (niedrigste ID), dessen Kreis `point` enthält.
pub fn find_vertex_at(vertices: &[Vertex], point: Vec2, radius: f32) -> Option<usize> {
    vertices
        .iter()
        .find(|v| v.contains(point, radius))
        .map(|v| v.id)
}

/// Erste Kante in Speicherreihenfolge, die `point` innerhalb von `threshold` trifft.
///
/// Kanten mit ungültigen Endpunkten werden übersprungen.
pub fn find_edge_at(
    vertices: &[Vertex],
    edges: &[Edge],
    point: Vec2,
    threshold: f32,
) -> Option<usize> {
    edges.iter().position(|edge| {
        let (Some(from), Some(to)) = (vertices.get(edge.from), vertices.get(edge.to)) else {
            return false;
        };
        point_segment_distance(point, from.position, to.position) <= threshold
            && within_expanded_bounds(point, from.position, to.position, threshold)
    })
}

/// Löst `point` auf einen Vertex, eine Kante oder nichts auf.
///
/// Vertices haben Vorrang vor Kanten.
pub fn hit_test(
    vertices: &[Vertex],
    edges: &[Edge],
    point: Vec2,
    vertex_radius: f32,
    edge_threshold: f32,
) -> Option<HitTarget> {
    if let Some(id) = find_vertex_at(vertices, point, vertex_radius) {
        return Some(HitTarget::Vertex(id));
    }
    find_edge_at(vertices, edges, point, edge_threshold).map(HitTarget::Edge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_vertices() -> Vec<Vertex> {
        vec![
            Vertex::new(0, Vec2::new(0.0, 0.0)),
            Vertex::new(1, Vec2::new(100.0, 0.0)),
        ]
    }

    #[test]
    fn distance_uses_perpendicular_inside_segment() {
        let d = point_segment_distance(
            Vec2::new(50.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
        );
        assert_relative_eq!(d, 3.0);
    }

    #[test]
    fn distance_clamps_to_segment_end() {
        let d = point_segment_distance(
            Vec2::new(104.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
        );
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn zero_length_segment_degrades_to_point_distance() {
        let a = Vec2::new(10.0, 10.0);
        let d = point_segment_distance(Vec2::new(13.0, 14.0), a, a);
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn vertex_hit_prefers_lowest_id_on_overlap() {
        let vertices = vec![
            Vertex::new(0, Vec2::new(0.0, 0.0)),
            Vertex::new(1, Vec2::new(5.0, 0.0)),
        ];
        assert_eq!(find_vertex_at(&vertices, Vec2::new(3.0, 0.0), 20.0), Some(0));
    }

    #[test]
    fn edge_hit_respects_threshold() {
        let vertices = two_vertices();
        let edges = vec![Edge::new(0, 1, 1.0)];
        assert_eq!(
            find_edge_at(&vertices, &edges, Vec2::new(50.0, 4.0), 5.0),
            Some(0)
        );
        assert_eq!(find_edge_at(&vertices, &edges, Vec2::new(50.0, 6.0), 5.0), None);
    }

    #[test]
    fn hit_test_prefers_vertex_over_edge() {
        let vertices = two_vertices();
        let edges = vec![Edge::new(0, 1, 1.0)];
        assert_eq!(
            hit_test(&vertices, &edges, Vec2::new(10.0, 0.0), 20.0, 5.0),
            Some(HitTarget::Vertex(0))
        );
        assert_eq!(
            hit_test(&vertices, &edges, Vec2::new(50.0, 1.0), 20.0, 5.0),
            Some(HitTarget::Edge(0))
        );
        assert_eq!(
            hit_test(&vertices, &edges, Vec2::new(50.0, 40.0), 20.0, 5.0),
            None
        );
    }

    #[test]
    fn dangling_edge_is_never_hit() {
        let vertices = two_vertices();
        let edges = vec![Edge::new(0, 7, 1.0)];
        assert_eq!(find_edge_at(&vertices, &edges, Vec2::new(0.0, 0.0), 5.0), None);
    }
}
