/// Whether an edge operation applies to one direction or to both.
///
/// [`Graph`](crate::Graph) does not store a directedness of its own; each
/// `add_edge`/`remove_edge` call says whether to touch the mirrored entry as
/// well.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Directedness {
    /// Only the `from -> to` entry.
    #[default]
    Directed,
    /// Both the `from -> to` and the `to -> from` entries.
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        self == Directedness::Directed
    }

    pub fn is_undirected(self) -> bool {
        !self.is_directed()
    }
}

impl From<bool> for Directedness {
    /// Converts an `undirected` flag.
    fn from(undirected: bool) -> Self {
        if undirected {
            Directedness::Undirected
        } else {
            Directedness::Directed
        }
    }
}
