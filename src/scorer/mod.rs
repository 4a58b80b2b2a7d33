//! Iterative damped random-walk scoring.
//!
//! [`relax`] computes one synchronous relaxation step across all vertices:
//!
//! ```text
//! new[j] = (1 - d) + d * Σ over inbound edges (s → j, weight w)
//!            of ( w / out_weight_sum(s) ) * old[s]
//! ```
//!
//! [`divergence`] measures the distance between two score vectors so callers
//! can decide when to stop; [`Scorer`] packages the usual
//! iterate-until-converged loop around both.
//!
//! With the default `parallel` feature each step fans out over rayon's pool,
//! one unit of work per vertex. Every unit reads only the graph and the old
//! vector and produces exactly one slot of the fresh output, so there is no
//! locking anywhere; the step joins fully before returning.

pub mod runner;

pub use runner::{ScoreReport, Scorer};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::graph::WeightedDiGraph;
use crate::model::Vertex;
use crate::{Error, Result};

// ============================================================================
// Relaxation step
// ============================================================================

/// Compute one relaxation step, returning a freshly allocated score vector.
///
/// `old` must have exactly one entry per allocated vertex. The call does not
/// return until every output slot has been computed, so each step is a full
/// barrier. `damping` is accepted as given; values outside `[0, 1]` simply
/// change the arithmetic.
pub fn relax(graph: &WeightedDiGraph, damping: f64, old: &[f64]) -> Result<Vec<f64>> {
    let n = graph.vertex_count();
    if old.len() != n {
        return Err(Error::ShapeMismatch { expected: n, got: old.len() });
    }

    // One denominator per potential contributor, computed once per step.
    // The graph is immutable for the duration of the call, so this cannot
    // go stale.
    let out_sums: Vec<f64> = (0..n)
        .map(|v| graph.out_weight_sum(Vertex(v as u32)))
        .collect();

    #[cfg(feature = "parallel")]
    let new = (0..n)
        .into_par_iter()
        .map(|j| relax_vertex(graph, &out_sums, damping, old, j))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let new = (0..n)
        .map(|j| relax_vertex(graph, &out_sums, damping, old, j))
        .collect();

    Ok(new)
}

/// Next score for vertex `j`.
///
/// The out-weight sum is always taken from the contributing vertex itself,
/// never from the edge's position in the inbound list, and each inbound edge
/// contributes its own stored weight, so parallel edges count individually.
/// Contributors with a zero or non-finite denominator are skipped, as are
/// identifiers outside the allocated range.
fn relax_vertex(
    graph: &WeightedDiGraph,
    out_sums: &[f64],
    damping: f64,
    old: &[f64],
    j: usize,
) -> f64 {
    let mut walk = 0.0;
    for edge in graph.in_edges(Vertex(j as u32)) {
        let s = edge.source.index();
        let denom = match out_sums.get(s) {
            Some(&sum) => sum,
            None => continue,
        };
        if denom == 0.0 || !denom.is_finite() {
            continue;
        }
        walk += edge.weight / denom * old[s];
    }
    (1.0 - damping) + damping * walk
}

// ============================================================================
// Convergence metric
// ============================================================================

/// Sum of squared elementwise differences between two score vectors.
///
/// Zero iff the vectors are identical; symmetric in its arguments. Callers
/// compare it against their own threshold to decide when to stop iterating.
pub fn divergence(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::UnequalLengths { left: a.len(), right: b.len() });
    }
    Ok(a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum())
}

// ============================================================================
// Tests
// ============================================================================
