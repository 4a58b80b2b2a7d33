//! Directed weighted edge between two vertices.

use serde::{Deserialize, Serialize};
use super::Vertex;

/// A directed, weighted arc.
///
/// Both endpoints are stored on the record, so edge lists returned by the
/// graph are self-describing regardless of which adjacency side they came
/// from. Weights are taken as given: zero, negative, and non-finite values
/// are all stored without validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: Vertex,
    pub target: Vertex,
    pub weight: f64,
}

impl Edge {
    pub fn new(source: Vertex, target: Vertex, weight: f64) -> Self {
        Self { source, target, weight }
    }

    /// True when the edge starts and ends on the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
