//! [`Graph`] is a mutable graph over string-labelled vertices, stored as a
//! vertex list plus a square [`AdjacencyMatrix`].
//!
//! The vertex list and the matrix are parallel: the vertex at position `i` in
//! [`Graph::vertices`] owns row `i` and column `i` of [`Graph::matrix`].  Only
//! the methods on `Graph` mutate either container, and every mutation keeps
//! the two in step.
//!
//! Operations on absent vertices never fail.  Queries return `false` or an
//! empty result, removals do nothing, and [`Graph::add_edge`] inserts missing
//! endpoints before connecting them.

use derivative::Derivative;

use crate::{
    adjacency_matrix::AdjacencyMatrix,
    degree::{Degree, Degrees, DirectedDegree},
    directedness::Directedness,
    error::GraphError,
    tracing_support::{debug_event, trace_event},
};

/// An adjacency-matrix graph with unique string labels.
///
/// Vertices keep their insertion order, and a vertex's position in that order
/// is its matrix index.  Removing a vertex shifts every later vertex down by
/// one.
#[derive(Clone, Default, PartialEq, Eq, Derivative)]
#[derivative(Debug)]
pub struct Graph {
    vertices: Vec<String>,
    #[derivative(Debug(format_with = "AdjacencyMatrix::format_rows"))]
    matrix: AdjacencyMatrix,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a vertex list and a grid of 0/1 cells, where
    /// `rows[i][j] == 1` means an edge from `vertices[i]` to `vertices[j]`.
    pub fn from_parts<S, R>(
        vertices: impl IntoIterator<Item = S>,
        rows: &[R],
    ) -> Result<Self, GraphError>
    where
        S: Into<String>,
        R: AsRef<[u8]>,
    {
        let vertices: Vec<String> = vertices.into_iter().map(Into::into).collect();
        if let Some(label) = first_duplicate(&vertices) {
            return Err(GraphError::DuplicateVertex(label.clone()));
        }
        if vertices.len() != rows.len() {
            return Err(GraphError::SizeMismatch {
                vertices: vertices.len(),
                rows: rows.len(),
            });
        }
        let matrix = AdjacencyMatrix::try_from_rows(rows)?;
        Ok(Graph { vertices, matrix })
    }

    /// Returns the vertex labels in index order.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Returns the adjacency matrix.  Row and column `i` belong to
    /// `vertices()[i]`.
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if a vertex with the given label exists.
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.index_of(label).is_some()
    }

    /// Returns the matrix index of the vertex with the given label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.vertices.iter().position(|vertex| vertex == label)
    }

    /// Returns the label of the vertex at the given matrix index.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.vertices.get(index).map(String::as_str)
    }

    /// Number of set matrix entries.  An undirected edge between two distinct
    /// vertices counts twice, a self-loop once.
    pub fn entry_count(&self) -> usize {
        self.matrix.entry_count()
    }

    /// Iterates over all set entries as `(from, to)` label pairs, in row-major
    /// order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.matrix
            .iter()
            .map(|(row, col)| (self.vertices[row].as_str(), self.vertices[col].as_str()))
    }

    /// Adds a vertex with the given label, unless one already exists.
    ///
    /// A new vertex gets the next index: every existing row gains a zero
    /// column and an all-zero row is appended.  Returns the vertex's index in
    /// either case.
    pub fn add_vertex(&mut self, label: &str) -> usize {
        if let Some(index) = self.index_of(label) {
            trace_event!(label, index, "vertex already present");
            return index;
        }
        let index = self.matrix.grow();
        self.vertices.push(label.to_owned());
        debug_assert_eq!(self.vertices.len(), self.matrix.size());
        debug_event!(label, index, "added vertex");
        index
    }

    /// Adds an edge from `from` to `to`, and from `to` to `from` as well when
    /// `directedness` is [`Directedness::Undirected`].  Missing endpoints are
    /// added first, `from` before `to`.
    ///
    /// Returns `true` if any matrix entry changed.
    pub fn add_edge(&mut self, from: &str, to: &str, directedness: Directedness) -> bool {
        let source = self.add_vertex(from);
        let target = self.add_vertex(to);
        let mut changed = self.set_entry(source, target, true);
        if directedness.is_undirected() {
            changed |= self.set_entry(target, source, true);
        }
        debug_event!(from, to, ?directedness, changed, "added edge");
        changed
    }

    /// Removes the vertex with the given label along with every edge into or
    /// out of it.  Later vertices shift down one index; the remaining entries
    /// keep their relative order.  Does nothing if the vertex is absent.
    ///
    /// Returns `true` if a vertex was removed.
    pub fn remove_vertex(&mut self, label: &str) -> bool {
        let Some(index) = self.index_of(label) else {
            trace_event!(label, "vertex to remove is absent");
            return false;
        };
        let removed = self.matrix.remove_row_and_column(index);
        debug_assert!(removed);
        self.vertices.remove(index);
        debug_event!(label, index, "removed vertex");
        true
    }

    /// Removes the edge from `from` to `to`, and the reverse edge as well when
    /// `directedness` is [`Directedness::Undirected`].  Unlike
    /// [`add_edge`](Self::add_edge), this never adds vertices: if either
    /// endpoint is absent, nothing happens.
    ///
    /// Returns `true` if any matrix entry changed.
    pub fn remove_edge(&mut self, from: &str, to: &str, directedness: Directedness) -> bool {
        let (Some(source), Some(target)) = (self.index_of(from), self.index_of(to)) else {
            trace_event!(from, to, "edge endpoint absent");
            return false;
        };
        let mut changed = self.set_entry(source, target, false);
        if directedness.is_undirected() {
            changed |= self.set_entry(target, source, false);
        }
        debug_event!(from, to, ?directedness, changed, "removed edge");
        changed
    }

    /// Sets an entry whose indices are known to be valid and reports whether
    /// it changed.
    fn set_entry(&mut self, row: usize, col: usize, value: bool) -> bool {
        match self.matrix.set(row, col, value) {
            Some(previous) => previous != value,
            None => unreachable!(
                "entry ({row}, {col}) outside the {0}x{0} matrix",
                self.matrix.size()
            ),
        }
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.matrix = AdjacencyMatrix::new();
        debug_event!("cleared graph");
    }

    /// Returns `true` if there is an edge from `from` to `to`.  Absent
    /// vertices have no edges.
    pub fn edge_exists(&self, from: &str, to: &str) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(source), Some(target)) => self.matrix.get(source, target),
            _ => false,
        }
    }

    /// Iterates over the out-neighbors of `vertex` in vertex index order.
    /// Yields nothing if the vertex is absent.
    pub fn neighbors<'a>(&'a self, vertex: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.index_of(vertex).into_iter().flat_map(move |row| {
            self.matrix
                .entries_in_row(row)
                .map(move |col| self.vertices[col].as_str())
        })
    }

    /// Like [`neighbors`](Self::neighbors), but distinguishes an absent
    /// vertex from one with no outgoing edges.
    pub fn try_neighbors(&self, vertex: &str) -> Result<Vec<&str>, GraphError> {
        if !self.contains_vertex(vertex) {
            return Err(GraphError::VertexNotFound(vertex.to_owned()));
        }
        Ok(self.neighbors(vertex).collect())
    }

    /// Returns `true` if every consecutive pair in `path` is joined by an
    /// edge.  Paths with fewer than two vertices are always valid, even if
    /// their vertex is absent.
    pub fn is_valid_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        path.windows(2)
            .all(|pair| self.edge_exists(pair[0].as_ref(), pair[1].as_ref()))
    }

    /// Returns `true` if the matrix equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        self.matrix.is_symmetric()
    }

    /// Classifies the graph by matrix symmetry.  This is a heuristic: a
    /// directed graph whose edges all happen to come in opposite pairs is
    /// reported as undirected.
    pub fn inferred_directedness(&self) -> Directedness {
        Directedness::from(self.is_symmetric())
    }

    /// Computes the degree of every vertex.
    ///
    /// If the matrix is symmetric, each vertex gets a single
    /// [`Degree::Undirected`] equal to its row sum.  Otherwise each vertex
    /// gets a [`Degree::Directed`] with the row sum as out-degree and the
    /// column sum as in-degree.
    pub fn degrees(&self) -> Degrees {
        let symmetric = self.matrix.is_symmetric();
        let entries = self
            .vertices
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let out_degree = self.matrix.row_sum(index);
                let degree = if symmetric {
                    Degree::Undirected(out_degree)
                } else {
                    DirectedDegree::new(out_degree, self.matrix.col_sum(index)).into()
                };
                (label.clone(), degree)
            })
            .collect();
        Degrees::from_entries(entries)
    }

    /// Verifies that the matrix side equals the vertex count and that no
    /// label repeats.
    pub fn check_consistency(&self) -> Result<(), GraphError> {
        if self.vertices.len() != self.matrix.size() {
            return Err(GraphError::SizeMismatch {
                vertices: self.vertices.len(),
                rows: self.matrix.size(),
            });
        }
        match first_duplicate(&self.vertices) {
            Some(label) => Err(GraphError::DuplicateVertex(label.clone())),
            None => Ok(()),
        }
    }
}

fn first_duplicate(labels: &[String]) -> Option<&String> {
    labels
        .iter()
        .enumerate()
        .find(|(i, label)| labels[..*i].contains(label))
        .map(|(_, label)| label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Directedness::{Directed, Undirected};

    fn sample_undirected() -> Graph {
        let mut graph = Graph::new();
        for label in ["A", "B", "C", "D"] {
            graph.add_vertex(label);
        }
        graph.add_edge("A", "B", Undirected);
        graph.add_edge("B", "C", Undirected);
        graph.add_edge("A", "C", Undirected);
        graph.add_edge("C", "D", Undirected);
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.matrix().size(), 0);
        assert!(graph.is_symmetric());
        assert!(graph.degrees().is_empty());
    }

    #[test]
    fn test_add_vertex_assigns_indices() {
        let mut graph = Graph::new();
        assert_eq!(graph.add_vertex("A"), 0);
        assert_eq!(graph.add_vertex("B"), 1);
        assert_eq!(graph.add_vertex("A"), 0);
        assert_eq!(graph.vertices(), ["A", "B"]);
        assert_eq!(graph.matrix().to_rows(), vec![vec![0, 0], vec![0, 0]]);
    }

    #[test]
    fn test_label_agrees_with_index_of() {
        let mut graph = sample_undirected();
        for (index, vertex) in graph.vertices().iter().enumerate() {
            assert_eq!(graph.label(index), Some(vertex.as_str()));
            assert_eq!(graph.index_of(vertex), Some(index));
        }
        assert_eq!(graph.label(4), None);
        graph.remove_vertex("B");
        assert_eq!(graph.label(1), Some("C"));
        assert_eq!(graph.index_of("C"), Some(1));
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut once = Graph::new();
        once.add_edge("A", "B", Directed);
        once.add_vertex("C");
        let mut twice = once.clone();
        twice.add_vertex("C");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_add_edge_inserts_missing_vertices_in_order() {
        let mut graph = Graph::new();
        graph.add_vertex("B");
        assert!(graph.add_edge("A", "C", Directed));
        assert_eq!(graph.vertices(), ["B", "A", "C"]);
        assert!(graph.edge_exists("A", "C"));
        assert!(!graph.edge_exists("C", "A"));
    }

    #[test]
    fn test_add_edge_reports_change() {
        let mut graph = Graph::new();
        assert!(graph.add_edge("A", "B", Directed));
        assert!(!graph.add_edge("A", "B", Directed));
        // The reverse entry is still new.
        assert!(graph.add_edge("A", "B", Undirected));
        assert!(!graph.add_edge("B", "A", Undirected));
    }

    #[test]
    fn test_self_loop() {
        let mut graph = Graph::new();
        graph.add_edge("A", "A", Undirected);
        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.edge_exists("A", "A"));
        assert_eq!(graph.neighbors("A").collect::<Vec<_>>(), vec!["A"]);
        assert_eq!(graph.degrees()["A"], Degree::Undirected(1));
    }

    #[test]
    fn test_remove_edge_undirected() {
        let mut graph = sample_undirected();
        assert!(graph.remove_edge("A", "C", Undirected));
        assert!(!graph.edge_exists("A", "C"));
        assert!(!graph.edge_exists("C", "A"));
        assert!(!graph.remove_edge("A", "C", Undirected));
    }

    #[test]
    fn test_remove_edge_directed_leaves_reverse() {
        let mut graph = sample_undirected();
        assert!(graph.remove_edge("A", "C", Directed));
        assert!(!graph.edge_exists("A", "C"));
        assert!(graph.edge_exists("C", "A"));
        assert!(!graph.is_symmetric());
    }

    #[test]
    fn test_remove_edge_absent_vertex_is_noop() {
        let mut graph = sample_undirected();
        let before = graph.clone();
        assert!(!graph.remove_edge("A", "Q", Undirected));
        assert!(!graph.remove_edge("Q", "A", Directed));
        assert_eq!(graph, before);
        assert!(!graph.contains_vertex("Q"));
    }

    #[test]
    fn test_remove_vertex_shifts_indices() {
        let mut graph = sample_undirected();
        assert!(graph.remove_vertex("B"));
        assert_eq!(graph.vertices(), ["A", "C", "D"]);
        assert_eq!(graph.index_of("C"), Some(1));
        assert_eq!(
            graph.matrix().to_rows(),
            vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]
        );
        assert!(!graph.edge_exists("A", "B"));
        assert_eq!(graph.neighbors("C").collect::<Vec<_>>(), vec!["A", "D"]);
    }

    #[test]
    fn test_remove_vertex_absent_is_noop() {
        let mut graph = sample_undirected();
        let before = graph.clone();
        assert!(!graph.remove_vertex("Q"));
        assert_eq!(graph, before);
    }

    #[test]
    fn test_neighbors() {
        let graph = sample_undirected();
        assert_eq!(graph.neighbors("C").collect::<Vec<_>>(), vec!["A", "B", "D"]);
        assert_eq!(graph.neighbors("D").collect::<Vec<_>>(), vec!["C"]);
        assert_eq!(graph.neighbors("Q").count(), 0);
    }

    #[test]
    fn test_neighbors_directed_are_outgoing_only() {
        let mut graph = Graph::new();
        graph.add_edge("X", "Y", Directed);
        graph.add_edge("Z", "X", Directed);
        assert_eq!(graph.neighbors("X").collect::<Vec<_>>(), vec!["Y"]);
        assert_eq!(graph.neighbors("Y").count(), 0);
    }

    #[test]
    fn test_try_neighbors() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", Directed);
        assert_eq!(graph.try_neighbors("A"), Ok(vec!["B"]));
        assert_eq!(graph.try_neighbors("B"), Ok(vec![]));
        assert_eq!(
            graph.try_neighbors("Q"),
            Err(GraphError::VertexNotFound("Q".to_string()))
        );
    }

    #[test]
    fn test_is_valid_path() {
        let graph = sample_undirected();
        assert!(graph.is_valid_path(&["A", "B", "C", "D"]));
        assert!(!graph.is_valid_path(&["A", "D"]));
        assert!(graph.is_valid_path(&["D", "C", "A", "B"]));
        assert!(!graph.is_valid_path(&["A", "Q"]));
        assert!(graph.is_valid_path::<&str>(&[]));
        assert!(graph.is_valid_path(&["Q"]));
        assert!(graph.is_valid_path(&[String::from("A"), String::from("B")]));
    }

    #[test]
    fn test_degrees_undirected() {
        let degrees = sample_undirected().degrees();
        assert!(!degrees.is_directed());
        let expected = [("A", 2), ("B", 2), ("C", 3), ("D", 1)];
        assert_eq!(
            degrees.iter().collect::<Vec<_>>(),
            expected
                .iter()
                .map(|&(label, degree)| (label, Degree::Undirected(degree)))
                .collect::<Vec<_>>()
        );
        assert_eq!(degrees.sum(), 8);
    }

    #[test]
    fn test_degrees_directed() {
        let mut graph = Graph::new();
        graph.add_edge("X", "Y", Directed);
        graph.add_edge("Y", "Z", Directed);
        graph.add_edge("X", "Z", Directed);
        assert!(!graph.is_symmetric());
        assert_eq!(graph.inferred_directedness(), Directed);
        let degrees = graph.degrees();
        assert_eq!(degrees["X"], DirectedDegree::new(2, 0).into());
        assert_eq!(degrees["Y"], DirectedDegree::new(1, 1).into());
        assert_eq!(degrees["Z"], DirectedDegree::new(0, 2).into());
    }

    #[test]
    fn test_symmetric_directed_edges_read_as_undirected() {
        let mut graph = Graph::new();
        graph.add_edge("X", "Y", Directed);
        graph.add_edge("Y", "X", Directed);
        assert_eq!(graph.inferred_directedness(), Undirected);
        assert_eq!(graph.degrees()["X"], Degree::Undirected(1));
    }

    #[test]
    fn test_edges() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", Directed);
        graph.add_edge("B", "A", Directed);
        graph.add_edge("B", "C", Directed);
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![("A", "B"), ("B", "A"), ("B", "C")]
        );
        assert_eq!(graph.entry_count(), 3);
    }

    #[test]
    fn test_clear() {
        let mut graph = sample_undirected();
        graph.clear();
        assert_eq!(graph, Graph::new());
    }

    #[test]
    fn test_from_parts() {
        let graph = Graph::from_parts(["A", "B"], &[[0, 1], [0, 0]]).unwrap();
        assert!(graph.edge_exists("A", "B"));
        assert!(!graph.edge_exists("B", "A"));
        assert_eq!(graph.check_consistency(), Ok(()));
    }

    #[test]
    fn test_from_parts_errors() {
        assert_eq!(
            Graph::from_parts(["A", "A"], &[[0, 0], [0, 0]]),
            Err(GraphError::DuplicateVertex("A".to_string()))
        );
        assert_eq!(
            Graph::from_parts(["A", "B", "C"], &[[0, 0], [0, 0]]),
            Err(GraphError::SizeMismatch {
                vertices: 3,
                rows: 2
            })
        );
        assert_eq!(
            Graph::from_parts(["A"], &[[3]]),
            Err(GraphError::InvalidCell {
                row: 0,
                col: 0,
                value: 3
            })
        );
    }

    #[test]
    fn test_debug_shows_rows() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", Directed);
        assert_eq!(
            format!("{graph:?}"),
            r#"Graph { vertices: ["A", "B"], matrix: [01, 00] }"#
        );
    }
}
