//! Core-Domänentypen: Vertices, Edges, Graph, Geometrie und Adjazenz-Export.

pub mod adjacency;
pub mod edge;
pub mod error;
pub mod geometry;
/// Core-Datenmodell des Graph-Editors
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - Graph: Container für alle Vertices und Edges inkl. Modus
/// - Vertex: Einzelner Knoten mit dichter ID und Position
/// - Edge: Gewichtete Verbindung zwischen zwei Vertex-IDs
pub mod graph;
pub mod vertex;

pub use adjacency::{adjacency_list, adjacency_matrix, export_adjacency, AdjacencyFormat};
pub use edge::{is_valid_weight, parse_weight, Edge, GraphMode, DEFAULT_EDGE_WEIGHT};
pub use error::GraphError;
pub use geometry::{hit_test, point_segment_distance, HitTarget};
pub use graph::{Graph, GraphSnapshot};
pub use vertex::Vertex;
