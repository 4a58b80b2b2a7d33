//! # walkrank — damped random-walk scoring over weighted digraphs
//!
//! A reusable scoring primitive in the TextRank/PageRank family. Callers
//! build a [`WeightedDiGraph`] out of whatever their vertices stand for
//! (co-occurring terms, linked documents, call sites), then either drive
//! [`relax`] one step at a time or let a [`Scorer`] iterate to convergence,
//! and finally order vertices with [`ranked`] or [`top_n`].
//!
//! ## Design Principles
//!
//! 1. **Mirrored adjacency**: every edge is stored in both the source's
//!    outgoing list and the target's incoming list, so the scorer reads a
//!    vertex's predecessors in O(in-degree)
//! 2. **Fresh vectors**: each relaxation step allocates its output, leaving
//!    the previous vector untouched as a snapshot for convergence checks
//! 3. **Disjoint writes**: one unit of work per vertex, each producing a
//!    single output slot, so scoring parallelizes without locks
//!
//! ## Quick Start
//!
//! ```rust
//! use walkrank::{ranked, Scorer, WeightedDiGraph};
//!
//! # fn main() -> walkrank::Result<()> {
//! let mut graph = WeightedDiGraph::new();
//! let hub = graph.add_vertex();
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! graph.add_edge(a, hub, 1.0);
//! graph.add_edge(b, hub, 1.0);
//! graph.add_edge(hub, a, 1.0);
//!
//! let report = Scorer::new().run(&graph)?;
//! assert!(report.converged);
//!
//! let ranking = ranked(&report.scores);
//! assert_eq!(ranking[0].vertex, hub);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Description |
//! |----------|---------|-------------|
//! | `parallel` | yes | Relax all vertices across rayon's thread pool |

// ============================================================================
// Modules
// ============================================================================

pub mod export;
pub mod graph;
pub mod model;
pub mod rank;
pub mod scorer;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Edge, Vertex};

// ============================================================================
// Re-exports: Graph
// ============================================================================

pub use graph::WeightedDiGraph;

// ============================================================================
// Re-exports: Scoring
// ============================================================================

pub use scorer::{divergence, relax, ScoreReport, Scorer};

// ============================================================================
// Re-exports: Ranking
// ============================================================================

pub use rank::{ranked, sort_by_score, top_n, ScoredVertex};

// ============================================================================
// Re-exports: Export
// ============================================================================

pub use export::{export_dot, export_dot_with_scores, from_json, to_json};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("score vector has {got} entries but the graph has {expected} vertices")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("score vectors differ in length: {left} vs {right}")]
    UnequalLengths { left: usize, right: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
