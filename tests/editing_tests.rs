//! Integrationstests für das Graph-Modell:
//! - dichte IDs nach beliebigen Lösch-Sequenzen
//! - Duplikat-Regeln je Modus
//! - Export-Formate über die öffentliche API

use glam::Vec2;
use graph_adjacency_editor::{
    adjacency_list, adjacency_matrix, AdjacencyFormat, Edge, Graph, GraphError, GraphMode,
    HitTarget,
};

fn assert_dense(graph: &Graph) {
    for (index, vertex) in graph.vertices().iter().enumerate() {
        assert_eq!(vertex.id, index, "IDs müssen dicht sein");
    }
    for edge in graph.edges() {
        assert!(
            edge.from < graph.vertex_count() && edge.to < graph.vertex_count(),
            "Kante {:?} zeigt ins Leere",
            edge
        );
    }
}

/// Vollständiger Graph auf `n` Vertices (ungerichtet, ohne Schleifen).
fn complete_graph(n: usize) -> Graph {
    let mut graph = Graph::new(GraphMode::Undirected);
    for i in 0..n {
        graph.add_vertex(Vec2::new(40.0 + i as f32 * 50.0, 40.0 + (i % 3) as f32 * 50.0));
    }
    for a in 0..n {
        for b in (a + 1)..n {
            graph
                .add_weighted_edge(a, b, (a * 10 + b) as f64)
                .expect("Kante im vollständigen Graph");
        }
    }
    graph
}

#[test]
fn test_removal_sequence_keeps_ids_dense_and_weights_attached() {
    let mut graph = complete_graph(6);
    assert_eq!(graph.edge_count(), 15);

    // Vertex 2 weg: alte 3,4,5 werden 2,3,4
    graph.remove_vertex(2).expect("Vertex 2");
    assert_dense(&graph);
    assert_eq!(graph.edge_count(), 10);

    // ehemalige Kante 3–5 (Gewicht 35) ist jetzt 2–4
    let index = graph.find_edge(2, 4).expect("umnummerierte Kante");
    assert_eq!(graph.edges()[index].weight, 35.0);

    while graph.vertex_count() > 0 {
        graph.remove_vertex(0).expect("erster Vertex");
        assert_dense(&graph);
    }
    assert!(graph.is_empty());
}

#[test]
fn test_matrix_matches_list_for_every_pair() {
    let mut graph = complete_graph(4);
    graph.remove_vertex(1).expect("Vertex 1");

    let matrix = adjacency_matrix(graph.vertex_count(), graph.edges(), graph.mode());
    let lists = adjacency_list(graph.vertex_count(), graph.edges(), graph.mode());

    for (i, row) in matrix.iter().enumerate() {
        let from_list: Vec<(usize, f64)> = row
            .iter()
            .enumerate()
            .filter(|(_, w)| **w != 0.0)
            .map(|(j, w)| (j, *w))
            .collect();
        assert_eq!(lists[i], from_list, "Zeile {} weicht ab", i);
        for (j, w) in row.iter().enumerate() {
            assert_eq!(*w, matrix[j][i], "ungerichtete Matrix muss symmetrisch sein");
        }
    }
}

#[test]
fn test_directed_graph_keeps_both_orientations() {
    let mut graph = Graph::new(GraphMode::Directed);
    graph.add_vertex(Vec2::new(50.0, 50.0));
    graph.add_vertex(Vec2::new(150.0, 50.0));

    graph.add_weighted_edge(0, 1, 2.0).expect("0→1");
    graph.add_weighted_edge(1, 0, 3.0).expect("1→0");
    assert_eq!(
        graph.add_edge(0, 1),
        Err(GraphError::DuplicateEdge { from: 0, to: 1 })
    );

    assert_eq!(
        graph.export(AdjacencyFormat::Matrix),
        "[\n    [0, 2],\n    [3, 0]\n]"
    );
    assert_eq!(
        graph.export(AdjacencyFormat::List),
        "[\n    [[1, 2]],\n    [[0, 3]]\n]"
    );
}

#[test]
fn test_hit_test_vertex_wins_over_edge_through_it() {
    let mut graph = Graph::new(GraphMode::Undirected);
    graph.add_vertex(Vec2::new(50.0, 100.0));
    graph.add_vertex(Vec2::new(150.0, 100.0));
    graph.add_vertex(Vec2::new(250.0, 100.0));
    graph.add_edge(0, 2).expect("0–2 läuft durch Vertex 1");

    assert_eq!(
        graph.hit_test(Vec2::new(150.0, 100.0), 5.0),
        Some(HitTarget::Vertex(1))
    );
    assert_eq!(
        graph.hit_test(Vec2::new(200.0, 103.0), 5.0),
        Some(HitTarget::Edge(0))
    );
    assert_eq!(graph.hit_test(Vec2::new(200.0, 140.0), 5.0), None);
}

#[test]
fn test_snapshot_restore_is_independent_of_later_edits() {
    let mut graph = complete_graph(3);
    let snapshot = graph.snapshot();

    graph.remove_vertex(0).expect("Vertex 0");
    graph.set_edge_weight(0, 1, 99.0).expect("Gewicht");

    graph.restore(snapshot);
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(
        graph.edges(),
        &[
            Edge::new(0, 1, 1.0),
            Edge::new(0, 2, 2.0),
            Edge::new(1, 2, 12.0)
        ]
    );
}
