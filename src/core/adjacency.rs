//! Adjazenz-Export: Matrix- oder Listen-Darstellung als Text.
//!
//! Reine Funktionen über `(vertices, edges, mode, format)`. Die Ausgabe ist
//! deterministisch (keine ungeordnete Iteration).

use super::{Edge, GraphMode};
use serde::{Deserialize, Serialize};

/// Darstellungsformat des Adjazenz-Exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyFormat {
    /// n × n Gewichtsmatrix
    #[default]
    Matrix,
    /// Nachbarliste pro Vertex
    List,
}

impl AdjacencyFormat {
    /// Anzeigename für UI und Logs
    pub fn label(self) -> &'static str {
        match self {
            Self::Matrix => "Matrix",
            Self::List => "List",
        }
    }
}

const ROW_INDENT: &str = "    ";

/// Iteriert nur Kanten mit gültigen Endpunkten; alles andere wird als Fehler geloggt.
fn valid_edges(vertex_count: usize, edges: &[Edge]) -> impl Iterator<Item = &Edge> {
    edges.iter().filter(move |e| {
        let valid = e.from < vertex_count && e.to < vertex_count;
        if !valid {
            log::error!(
                "Adjazenz-Export: Kante {}→{} außerhalb von 0..{} übersprungen",
                e.from,
                e.to,
                vertex_count
            );
        }
        valid
    })
}

/// Baut die Gewichtsmatrix. Zelle `[i][j]` ist das Gewicht von `i→j`, sonst 0.
pub fn adjacency_matrix(vertex_count: usize, edges: &[Edge], mode: GraphMode) -> Vec<Vec<f64>> {
    let mut matrix = vec![vec![0.0; vertex_count]; vertex_count];
    for edge in valid_edges(vertex_count, edges) {
        matrix[edge.from][edge.to] = edge.weight;
        if mode == GraphMode::Undirected {
            matrix[edge.to][edge.from] = edge.weight;
        }
    }
    matrix
}

/// Baut die Nachbarlisten, pro Vertex aufsteigend nach Nachbar-ID sortiert.
pub fn adjacency_list(
    vertex_count: usize,
    edges: &[Edge],
    mode: GraphMode,
) -> Vec<Vec<(usize, f64)>> {
    let mut lists = vec![Vec::new(); vertex_count];
    for edge in valid_edges(vertex_count, edges) {
        lists[edge.from].push((edge.to, edge.weight));
        if mode == GraphMode::Undirected {
            lists[edge.to].push((edge.from, edge.weight));
        }
    }
    for list in &mut lists {
        // stabil: parallele Einträge behalten die Speicherreihenfolge
        list.sort_by_key(|&(neighbor, _)| neighbor);
    }
    lists
}

/// Exportiert den Graph als Text im gewünschten Format.
pub fn export_adjacency(
    vertex_count: usize,
    edges: &[Edge],
    mode: GraphMode,
    format: AdjacencyFormat,
) -> String {
    let rows: Vec<String> = match format {
        AdjacencyFormat::Matrix => adjacency_matrix(vertex_count, edges, mode)
            .iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|w| w.to_string()).collect();
                format!("{}[{}]", ROW_INDENT, cells.join(", "))
            })
            .collect(),
        AdjacencyFormat::List => adjacency_list(vertex_count, edges, mode)
            .iter()
            .map(|list| {
                let entries: Vec<String> = list
                    .iter()
                    .map(|(neighbor, weight)| format!("[{neighbor}, {weight}]"))
                    .collect();
                format!("{}[{}]", ROW_INDENT, entries.join(", "))
            })
            .collect(),
    };
    format!("[\n{}\n]", rows.join(",\n"))
}
