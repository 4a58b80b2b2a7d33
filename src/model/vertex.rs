//! Vertex identifier for the weighted digraph.

use serde::{Deserialize, Serialize};

/// Opaque vertex identifier.
///
/// Identifiers are dense: the graph hands them out sequentially from 0 and
/// never reuses or renumbers them, so they double as indices into score
/// vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex(pub u32);

impl Vertex {
    /// The identifier as a score-vector index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
