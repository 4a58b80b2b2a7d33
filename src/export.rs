//! Graph export — Graphviz DOT for inspection, JSON for snapshots.
//!
//! ```text
//! walkrank WeightedDiGraph → export_dot() → digraph { ... }
//!   → pipe into `dot -Tsvg`, or paste into any Graphviz viewer
//! ```
//!
//! The JSON form round-trips through serde, so a snapshot restores the
//! graph bit-for-bit, adjacency order included.

use std::io::Write;

use crate::graph::WeightedDiGraph;
use crate::{Error, Result};

/// Write the graph as a Graphviz `digraph`.
///
/// Allocated vertices appear first in identifier order, then every stored
/// edge ordered by source, each with its weight as the label. Parallel
/// edges produce one line apiece. Edges naming never-allocated identifiers
/// render too; Graphviz declares such nodes implicitly on first use.
pub fn export_dot(graph: &WeightedDiGraph, writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "digraph walkrank {{")?;
    for v in graph.vertices() {
        writeln!(writer, "    v{v};")?;
    }
    for edge in graph.edges() {
        writeln!(
            writer,
            "    v{} -> v{} [label=\"{}\"];",
            edge.source, edge.target, edge.weight
        )?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write the graph as a Graphviz `digraph` with each vertex labelled by
/// its score.
///
/// `scores` must have one entry per allocated vertex, like every vector
/// handed to the scorer. Edges render exactly as in [`export_dot`]; only
/// allocated vertices carry a score label.
pub fn export_dot_with_scores(
    graph: &WeightedDiGraph,
    scores: &[f64],
    writer: &mut dyn Write,
) -> Result<()> {
    let n = graph.vertex_count();
    if scores.len() != n {
        return Err(Error::ShapeMismatch {
            expected: n,
            got: scores.len(),
        });
    }

    writeln!(writer, "digraph walkrank {{")?;
    for v in graph.vertices() {
        writeln!(writer, "    v{v} [label=\"{v}: {:.4}\"];", scores[v.index()])?;
    }
    for edge in graph.edges() {
        writeln!(
            writer,
            "    v{} -> v{} [label=\"{}\"];",
            edge.source, edge.target, edge.weight
        )?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

/// Serialize the graph to a JSON snapshot.
pub fn to_json(graph: &WeightedDiGraph) -> Result<String> {
    Ok(serde_json::to_string(graph)?)
}

/// Restore a graph from a snapshot produced by [`to_json`].
pub fn from_json(json: &str) -> Result<WeightedDiGraph> {
    Ok(serde_json::from_str(json)?)
}
