//! Degree information computed by [`Graph::degrees`](crate::Graph::degrees).
//!
//! The result is plain data so that presentation code can render or export it
//! however it likes.  With the `serde` feature, [`Degrees`] serializes as a
//! label-keyed map in vertex order; undirected degrees become integers and
//! directed ones become `{"out": .., "in": .., "total": ..}` objects.

use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// In/out degree of a vertex in a graph whose matrix is not symmetric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DirectedDegree {
    /// Number of outgoing edges (row sum).
    #[cfg_attr(feature = "serde", serde(rename = "out"))]
    pub out_degree: usize,
    /// Number of incoming edges (column sum).
    #[cfg_attr(feature = "serde", serde(rename = "in"))]
    pub in_degree: usize,
    /// `out_degree + in_degree`.
    pub total: usize,
}

impl DirectedDegree {
    /// Builds a degree with `total` set to the sum of both directions.
    pub fn new(out_degree: usize, in_degree: usize) -> Self {
        DirectedDegree {
            out_degree,
            in_degree,
            total: out_degree + in_degree,
        }
    }
}

/// Degree of a single vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum Degree {
    /// The matrix is symmetric, so in-degree equals out-degree and a single
    /// row sum describes the vertex.
    Undirected(usize),
    Directed(DirectedDegree),
}

impl Degree {
    /// The single degree for undirected graphs, or `out + in` for directed
    /// ones.
    pub fn total(&self) -> usize {
        match self {
            Degree::Undirected(degree) => *degree,
            Degree::Directed(degree) => degree.total,
        }
    }

    pub fn as_undirected(&self) -> Option<usize> {
        match self {
            Degree::Undirected(degree) => Some(*degree),
            Degree::Directed(_) => None,
        }
    }

    pub fn as_directed(&self) -> Option<DirectedDegree> {
        match self {
            Degree::Undirected(_) => None,
            Degree::Directed(degree) => Some(*degree),
        }
    }
}

impl From<DirectedDegree> for Degree {
    fn from(degree: DirectedDegree) -> Self {
        Degree::Directed(degree)
    }
}

/// Degrees of every vertex, keyed by label, in vertex index order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Degrees {
    entries: Vec<(String, Degree)>,
}

impl Degrees {
    pub(crate) fn from_entries(entries: Vec<(String, Degree)>) -> Self {
        Degrees { entries }
    }

    /// Returns the degree of the vertex with the given label, if present.
    pub fn get(&self, label: &str) -> Option<Degree> {
        self.entries
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, degree)| *degree)
    }

    /// Iterates over `(label, degree)` pairs in vertex index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Degree)> + '_ {
        self.entries
            .iter()
            .map(|(label, degree)| (label.as_str(), *degree))
    }

    /// Number of vertices with a degree entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` if the degrees were computed for a non-symmetric matrix.  An
    /// empty result reports `false`.
    pub fn is_directed(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, degree)| matches!(degree, Degree::Directed(_)))
    }

    /// Sum of [`Degree::total`] over all vertices.
    pub fn sum(&self) -> usize {
        self.entries.iter().map(|(_, degree)| degree.total()).sum()
    }
}

impl Index<&str> for Degrees {
    type Output = Degree;

    /// Panics if there is no vertex with the given label.
    fn index(&self, label: &str) -> &Degree {
        self.entries
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, degree)| degree)
            .unwrap_or_else(|| panic!("no degree for vertex '{label}'"))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Degrees {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(label, degree)| (label, degree)))
    }
}
