//! Text rendering for graphs.  Everything here borrows a [`Graph`] and only
//! reads from it.

use std::fmt::{self, Display, Formatter};

use crate::graph::Graph;

/// Renders the adjacency matrix as a grid with vertex labels along the top
/// and down the left side.
///
/// ```text
///        A   B
/// ------------------
/// A     | 0   1
/// B     | 1   0
/// ```
pub struct MatrixTable<'g>(pub &'g Graph);

impl Display for MatrixTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        if graph.is_empty() {
            return writeln!(f, "empty graph");
        }

        write!(f, "      ")?;
        for label in graph.vertices() {
            write!(f, "{label:^4}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "------".repeat(graph.vertex_count() + 1))?;

        for (label, row) in graph.vertices().iter().zip(graph.matrix().rows()) {
            write!(f, "{label:<5} |")?;
            for bit in row.iter() {
                write!(f, "{:^4}", u8::from(*bit))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The out-neighbors of one vertex, prepared for printing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NeighborReport<'g> {
    /// The vertex is not in the graph.
    NotFound(String),
    /// The vertex exists but has no outgoing edges.
    NoNeighbors(String),
    Neighbors {
        vertex: String,
        neighbors: Vec<&'g str>,
    },
}

impl<'g> NeighborReport<'g> {
    pub fn new(graph: &'g Graph, vertex: &str) -> Self {
        match graph.try_neighbors(vertex) {
            Err(_) => NeighborReport::NotFound(vertex.to_owned()),
            Ok(neighbors) if neighbors.is_empty() => NeighborReport::NoNeighbors(vertex.to_owned()),
            Ok(neighbors) => NeighborReport::Neighbors {
                vertex: vertex.to_owned(),
                neighbors,
            },
        }
    }
}

impl Display for NeighborReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NeighborReport::NotFound(vertex) => write!(f, "vertex '{vertex}' not found"),
            NeighborReport::NoNeighbors(vertex) => {
                write!(f, "vertex '{vertex}' has no outgoing neighbors")
            }
            NeighborReport::Neighbors { vertex, neighbors } => {
                write!(f, "neighbors of '{vertex}': {}", neighbors.join(", "))
            }
        }
    }
}
