//! Graph Adjacency Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditHistory, EditorHost, NullHost,
};
pub use core::{
    adjacency_list, adjacency_matrix, export_adjacency, AdjacencyFormat, Edge, Graph, GraphError,
    GraphMode, GraphSnapshot, HitTarget, Vertex,
};
pub use shared::{ContextTarget, EditorOptions, InteractionState, RenderScene};
