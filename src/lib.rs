//! A small graph over string-labelled vertices, backed by a square 0/1
//! adjacency matrix.
//!
//! [`Graph`] supports vertex and edge insertion and removal, edge and
//! neighbor queries, path validation, and degree computation.  Directed and
//! undirected edges may be mixed; [`Graph::degrees`] classifies the graph by
//! the symmetry of its matrix.
//!
//! ```
//! use matrix_graph::prelude::*;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("A", "B", Undirected);
//! graph.add_edge("B", "C", Undirected);
//! assert_eq!(graph.neighbors("B").collect::<Vec<_>>(), ["A", "C"]);
//! assert!(graph.is_valid_path(&["A", "B", "C"]));
//! assert_eq!(graph.degrees()["B"], Degree::Undirected(2));
//! ```

pub mod adjacency_matrix;
pub mod degree;
pub mod directedness;
pub mod display;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod tracing_support;


pub use adjacency_matrix::AdjacencyMatrix;
pub use degree::{Degree, Degrees, DirectedDegree};
pub use directedness::Directedness;
pub use error::GraphError;
pub use graph::Graph;
