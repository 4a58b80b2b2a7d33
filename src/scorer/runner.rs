//! Convergence-driven scoring loop.
//!
//! [`Scorer`] repeats [`relax`](super::relax) from a seed vector until the
//! [`divergence`](super::divergence) between successive vectors falls under
//! a threshold or an iteration cap is hit, and reports how the run ended.

use serde::{Deserialize, Serialize};

use super::{divergence, relax};
use crate::graph::WeightedDiGraph;
use crate::model::Vertex;
use crate::rank::{self, ScoredVertex};
use crate::{Error, Result};

// ============================================================================
// Scorer
// ============================================================================

/// Iterated relaxation with a convergence threshold and an iteration cap.
///
/// The defaults (damping 0.85, at most 100 iterations, threshold 1e-6) are
/// the conventional TextRank settings; override them with the `with_*`
/// builders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scorer {
    /// Damping factor `d` in the relaxation formula.
    pub damping: f64,
    /// Upper bound on relaxation steps.
    pub max_iterations: usize,
    /// Run ends once the divergence between successive vectors is at or
    /// under this value.
    pub threshold: f64,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl Scorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run from the uniform all-1.0 seed.
    pub fn run(&self, graph: &WeightedDiGraph) -> Result<ScoreReport> {
        self.run_from(graph, vec![1.0; graph.vertex_count()])
    }

    /// Run from a caller-provided seed, one entry per allocated vertex.
    pub fn run_from(&self, graph: &WeightedDiGraph, initial: Vec<f64>) -> Result<ScoreReport> {
        let n = graph.vertex_count();
        if initial.len() != n {
            return Err(Error::ShapeMismatch {
                expected: n,
                got: initial.len(),
            });
        }
        if n == 0 {
            return Ok(ScoreReport {
                scores: initial,
                iterations: 0,
                divergence: 0.0,
                converged: true,
            });
        }

        let mut scores = initial;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;
            let next = relax(graph, self.damping, &scores)?;
            delta = divergence(&scores, &next)?;
            scores = next;
            tracing::trace!(iteration = iterations, divergence = delta, "relaxation step");
        }

        let converged = delta <= self.threshold;
        tracing::debug!(iterations, divergence = delta, converged, "scoring finished");

        Ok(ScoreReport {
            scores,
            iterations,
            divergence: delta,
            converged,
        })
    }
}

// ============================================================================
// ScoreReport
// ============================================================================

/// Outcome of a scoring run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Final scores, indexed by vertex identifier.
    pub scores: Vec<f64>,
    /// Relaxation steps performed.
    pub iterations: usize,
    /// Divergence between the last two score vectors.
    pub divergence: f64,
    /// Whether `divergence` ended at or under the scorer's threshold.
    pub converged: bool,
}

impl ScoreReport {
    /// Score for one vertex, 0.0 outside the allocated range.
    pub fn score(&self, vertex: Vertex) -> f64 {
        self.scores.get(vertex.index()).copied().unwrap_or(0.0)
    }

    /// The `n` highest-scoring vertices, best first.
    pub fn top_n(&self, n: usize) -> Vec<ScoredVertex> {
        rank::top_n(&self.scores, n)
    }
}

// ============================================================================
// Tests
// ============================================================================
