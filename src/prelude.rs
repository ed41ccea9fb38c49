pub use crate::degree::{Degree, Degrees, DirectedDegree};
pub use crate::directedness::Directedness::{self, Directed, Undirected};
pub use crate::display::{MatrixTable, NeighborReport};
pub use crate::error::GraphError;
pub use crate::graph::Graph;
