//! Ranking — turn a score vector into a best-first ordering.

use serde::{Deserialize, Serialize};

use crate::model::Vertex;

/// A vertex paired with its score, the unit of ranked output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredVertex {
    pub vertex: Vertex,
    pub score: f64,
}

/// Sort pairs in place by score, highest first.
///
/// The sort is stable, so equal scores keep their input order. NaN scores
/// take a deterministic position via IEEE total ordering instead of
/// panicking.
pub fn sort_by_score(pairs: &mut [ScoredVertex]) {
    pairs.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Pair every index with its score and sort descending.
pub fn ranked(scores: &[f64]) -> Vec<ScoredVertex> {
    let mut pairs: Vec<ScoredVertex> = scores
        .iter()
        .enumerate()
        .map(|(i, &score)| ScoredVertex {
            vertex: Vertex(i as u32),
            score,
        })
        .collect();
    sort_by_score(&mut pairs);
    pairs
}

/// The `n` highest-scoring vertices, best first.
pub fn top_n(scores: &[f64], n: usize) -> Vec<ScoredVertex> {
    let mut pairs = ranked(scores);
    pairs.truncate(n);
    pairs
}
