//! End-to-end scoring tests over whole graphs.
//!
//! Each test builds a small graph with a hand-checkable fixpoint, runs the
//! scorer (or drives `relax` directly), and verifies scores, convergence
//! behavior, and ranking order.

use pretty_assertions::assert_eq;
use walkrank::{divergence, ranked, relax, Scorer, WeightedDiGraph};

// ============================================================================
// Helpers: the standard fixtures.
// ============================================================================

/// a → b → c → a, all weights 1. Perfectly symmetric, so the uniform seed is
/// already the fixpoint.
fn triangle() -> WeightedDiGraph {
    let mut g = WeightedDiGraph::new();
    let a = g.add_vertex();
    let b = g.add_vertex();
    let c = g.add_vertex();
    g.add_edge(a, b, 1.0);
    g.add_edge(b, c, 1.0);
    g.add_edge(c, a, 1.0);
    g
}

/// Four leaves all pointing at vertex 0, which points back at leaf 1.
fn star() -> WeightedDiGraph {
    let mut g = WeightedDiGraph::new();
    let hub = g.add_vertex();
    for _ in 0..4 {
        let leaf = g.add_vertex();
        g.add_edge(leaf, hub, 1.0);
    }
    g.add_edge(hub, walkrank::Vertex(1), 1.0);
    g
}

/// Triangle plus a chord a → c; asymmetric, converges over many steps.
fn chorded_triangle() -> WeightedDiGraph {
    let mut g = triangle();
    g.add_edge(walkrank::Vertex(0), walkrank::Vertex(2), 1.0);
    g
}

// ============================================================================
// 1. Symmetric cycle: uniform seed is the fixpoint
// ============================================================================

#[test]
fn test_uniform_cycle_is_a_fixpoint() {
    let report = Scorer::new().run(&triangle()).unwrap();
    assert!(report.converged);
    assert_eq!(report.iterations, 1, "first step reproduces the seed exactly");
    assert_eq!(report.scores, vec![1.0, 1.0, 1.0]);
    assert_eq!(report.divergence, 0.0);
}

// ============================================================================
// 2. Star: the hub collects the leaves' votes
// ============================================================================

#[test]
fn test_hub_outranks_leaves() {
    let report = Scorer::new().run(&star()).unwrap();
    assert!(report.converged);

    let top = report.top_n(1);
    assert_eq!(top[0].vertex.0, 0, "the hub should rank first");
    for leaf in 1..5u32 {
        assert!(report.scores[0] > report.scores[leaf as usize]);
    }
}

// ============================================================================
// 3. Divergence trends toward zero under repeated relaxation
// ============================================================================

#[test]
fn test_divergence_trends_to_zero() {
    let g = chorded_triangle();
    let mut scores = vec![1.0; 3];
    let mut deltas = Vec::new();

    for _ in 0..100 {
        let next = relax(&g, 0.85, &scores).unwrap();
        deltas.push(divergence(&scores, &next).unwrap());
        scores = next;
    }

    assert!(deltas[0] > 0.0, "the seed is not the fixpoint here");
    assert!(
        deltas.last().unwrap() < &1e-6,
        "divergence should fall under 1e-6 within 100 steps, got {:?}",
        deltas.last()
    );
    // Not required to shrink every single step, but the trend must hold.
    assert!(deltas[deltas.len() - 1] < deltas[0] / 1000.0);
}

// ============================================================================
// 4. Teleport floor: positive weights keep every score at or above 1 - d
// ============================================================================

#[test]
fn test_scores_respect_teleport_floor() {
    let report = Scorer::new().run(&chorded_triangle()).unwrap();
    for &s in &report.scores {
        assert!(s >= 0.15 - 1e-12, "score {s} fell under the teleport share");
        assert!(s.is_finite());
    }
}

// ============================================================================
// 5. Chain with a dangling tail has a closed-form fixpoint
// ============================================================================

#[test]
fn test_dangling_chain_fixpoint() {
    let mut g = WeightedDiGraph::new();
    let a = g.add_vertex();
    let b = g.add_vertex();
    let c = g.add_vertex();
    g.add_edge(a, b, 1.0);
    g.add_edge(b, c, 1.0);
    // c has no outgoing edges; its mass goes nowhere.

    let report = Scorer::new().run(&g).unwrap();
    assert!(report.converged);

    let d = 0.85;
    let expect_a = 1.0 - d;
    let expect_b = (1.0 - d) + d * expect_a;
    let expect_c = (1.0 - d) + d * expect_b;
    assert!((report.scores[a.index()] - expect_a).abs() < 1e-12);
    assert!((report.scores[b.index()] - expect_b).abs() < 1e-12);
    assert!((report.scores[c.index()] - expect_c).abs() < 1e-12);
}

// ============================================================================
// 6. Heavier edges attract more score
// ============================================================================

#[test]
fn test_weight_asymmetry_shifts_rank() {
    let mut g = WeightedDiGraph::new();
    let a = g.add_vertex();
    let b = g.add_vertex();
    let c = g.add_vertex();
    g.add_edge(a, b, 1.0);
    g.add_edge(a, c, 3.0);

    let report = Scorer::new().run(&g).unwrap();
    assert!(report.converged);
    assert!(report.scores[c.index()] > report.scores[b.index()]);

    let order: Vec<u32> = ranked(&report.scores).iter().map(|p| p.vertex.0).collect();
    assert_eq!(order, vec![2, 1, 0]);
}

// ============================================================================
// 7. Report helpers agree with the free functions
// ============================================================================

#[test]
fn test_report_top_n_matches_ranked() {
    let report = Scorer::new().run(&star()).unwrap();
    let from_report = report.top_n(3);
    let from_free: Vec<_> = ranked(&report.scores).into_iter().take(3).collect();
    assert_eq!(from_report, from_free);
}

// ============================================================================
// 8. Any seed reaches the same fixpoint on a strongly connected graph
// ============================================================================

#[test]
fn test_custom_seed_reaches_same_fixpoint() {
    let g = chorded_triangle();
    let scorer = Scorer::new().with_threshold(1e-12).with_max_iterations(500);

    let uniform = scorer.run(&g).unwrap();
    let scaled = scorer.run_from(&g, vec![5.0, 0.0, 2.5]).unwrap();

    assert!(uniform.converged && scaled.converged);
    for (u, s) in uniform.scores.iter().zip(&scaled.scores) {
        assert!((u - s).abs() < 1e-4, "fixpoint should not depend on the seed");
    }
}

// ============================================================================
// 9. Zero damping flattens everything to 1.0
// ============================================================================

#[test]
fn test_zero_damping_flattens_scores() {
    let scorer = Scorer::new().with_damping(0.0);
    let report = scorer.run(&star()).unwrap();
    assert!(report.converged);
    assert_eq!(report.iterations, 1);
    assert_eq!(report.scores, vec![1.0; 5]);
}
