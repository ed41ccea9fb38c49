/// Errors reported by the checked graph operations.
///
/// The core mutation and query methods on [`Graph`](crate::Graph) never fail:
/// absent vertices are no-ops or empty results.  These errors come only from
/// building a graph out of existing parts, from consistency checks, and from
/// lookups that must tell "not found" apart from "empty".
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// No vertex has the given label.
    #[error("vertex '{0}' not found")]
    VertexNotFound(String),
    /// The same label appears more than once in the vertex list.
    #[error("duplicate vertex label '{0}'")]
    DuplicateVertex(String),
    /// The number of vertices differs from the number of matrix rows.
    #[error("{vertices} vertices but {rows} matrix rows")]
    SizeMismatch { vertices: usize, rows: usize },
    /// A matrix row does not have one cell per row.
    #[error("matrix row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A matrix cell holds something other than 0 or 1.
    #[error("matrix cell ({row}, {col}) is {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
}
