//! Weighted directed graph with mirrored adjacency.
//!
//! This is the storage half of the crate: vertices are counter-allocated
//! dense identifiers, and every edge is recorded twice, once in the source
//! vertex's outgoing list and once in the target's incoming list, so both
//! `out_edges` and `in_edges` answer in O(degree).
//!
//! ## Limitations
//!
//! - **Append-only**: vertices and edges cannot be removed. Build the graph,
//!   then score it; the scorer takes `&WeightedDiGraph` and assumes the
//!   graph does not change between steps.
//! - **No endpoint validation**: `add_edge` accepts identifiers that were
//!   never allocated. Such edges round-trip through serialization but are
//!   invisible to the scorer, whose iteration space is `0..vertex_count()`.
//! - **First-match `weight()`**: with parallel edges, only the
//!   first-inserted weight for a pair is reachable through the point lookup.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::model::{Edge, Vertex};

/// Inline adjacency capacity. Most vertices in co-occurrence graphs carry a
/// handful of edges; lists longer than this spill to the heap.
const INLINE_EDGES: usize = 4;

type EdgeList = SmallVec<[Edge; INLINE_EDGES]>;

// ============================================================================
// WeightedDiGraph
// ============================================================================

/// A weighted directed graph with O(1) vertex creation and O(degree)
/// neighbor queries in both directions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedDiGraph {
    /// Next identifier to hand out.
    next_vertex: u32,
    /// Anticipated vertex count. Pre-sizes the adjacency maps, never
    /// enforced as a bound.
    capacity_hint: usize,
    /// vertex → outgoing edges, insertion order.
    out_edges: HashMap<Vertex, EdgeList>,
    /// vertex → incoming edges, the exact mirror of `out_edges`.
    in_edges: HashMap<Vertex, EdgeList>,
}

impl WeightedDiGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty graph sized for roughly `capacity_hint` vertices.
    ///
    /// The hint only pre-sizes adjacency storage. Exceeding it costs a few
    /// rehashes, nothing else.
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self {
            next_vertex: 0,
            capacity_hint,
            out_edges: HashMap::with_capacity(capacity_hint),
            in_edges: HashMap::with_capacity(capacity_hint),
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Allocate the next sequential vertex identifier. Always succeeds.
    pub fn add_vertex(&mut self) -> Vertex {
        let v = Vertex(self.next_vertex);
        self.next_vertex += 1;
        v
    }

    /// Add a directed edge `from → to` with the given weight.
    ///
    /// The edge is appended to `from`'s outgoing list and to `to`'s incoming
    /// list in the same call; the two lists never disagree. Self-loops and
    /// parallel edges are stored as-is. Nothing is merged or deduplicated,
    /// and the weight is not validated.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex, weight: f64) {
        let edge = Edge::new(from, to, weight);
        self.out_edges.entry(from).or_default().push(edge);
        self.in_edges.entry(to).or_default().push(edge);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// `v`'s outgoing edges in insertion order. Empty when it has none,
    /// including for identifiers that were never allocated.
    pub fn out_edges(&self, v: Vertex) -> &[Edge] {
        self.out_edges.get(&v).map(|e| e.as_slice()).unwrap_or(&[])
    }

    /// `v`'s incoming edges in insertion order. Empty when it has none.
    pub fn in_edges(&self, v: Vertex) -> &[Edge] {
        self.in_edges.get(&v).map(|e| e.as_slice()).unwrap_or(&[])
    }

    /// Weight of the first-inserted edge `from → to`, or `None` when no such
    /// edge exists.
    ///
    /// Known limitation: when parallel edges connect the same ordered pair,
    /// only the first-inserted weight is reachable here. The scorer does not
    /// use this lookup; every stored edge contributes its own weight there.
    pub fn weight(&self, from: Vertex, to: Vertex) -> Option<f64> {
        self.out_edges(from)
            .iter()
            .find(|e| e.target == to)
            .map(|e| e.weight)
    }

    /// Sum of `v`'s outgoing edge weights; 0.0 when it has none.
    ///
    /// This is the normalization denominator of the relaxation formula. It
    /// is not sanitized: weights that cancel to zero or overflow to infinity
    /// are returned as computed, and the scorer skips such contributors.
    pub fn out_weight_sum(&self, v: Vertex) -> f64 {
        self.out_edges(v).iter().map(|e| e.weight).sum()
    }

    /// Number of allocated vertices.
    pub fn vertex_count(&self) -> usize {
        self.next_vertex as usize
    }

    /// Number of stored edges (parallel edges counted individually).
    pub fn edge_count(&self) -> usize {
        self.out_edges.values().map(|e| e.len()).sum()
    }

    /// True when no vertex has been allocated.
    pub fn is_empty(&self) -> bool {
        self.next_vertex == 0
    }

    /// All allocated vertices in identifier order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        (0..self.next_vertex).map(Vertex)
    }

    /// Every stored edge, ordered by source identifier and then by insertion
    /// order within each source.
    ///
    /// Unlike [`vertices`](Self::vertices), this walks the adjacency map
    /// itself, so edges naming never-allocated identifiers are included and
    /// the result always agrees with [`edge_count`](Self::edge_count).
    pub fn edges(&self) -> Vec<Edge> {
        let mut sources: Vec<Vertex> = self.out_edges.keys().copied().collect();
        sources.sort_unstable_by_key(|v| v.0);
        let mut edges = Vec::with_capacity(self.edge_count());
        for v in sources {
            edges.extend_from_slice(self.out_edges(v));
        }
        edges
    }
}

impl Default for WeightedDiGraph {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
