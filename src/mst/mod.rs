//! MST engine: Kruskal's algorithm
//!
//! Sorts edges ascending by weight (stable, so ties keep insertion
//! order) and walks them once: every edge gets exactly one
//! `mst_consider` followed by exactly one `mst_accept` or
//! `mst_reject`, in sorted order.

pub mod union_find;

use crate::error::{AlgovizError, Result};
use crate::graph::{Edge, Graph};
use crate::step::Step;

pub use union_find::UnionFind;

/// Run Kruskal over the graph, returning the full step trace
///
/// The graph model already guarantees positive weights and at most one
/// edge per unordered pair. A graph with no edges yields an empty
/// trace; a graph with no nodes is invalid.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edges().len()))]
pub fn run_mst(graph: &Graph) -> Result<Vec<Step>> {
    if graph.node_count() == 0 {
        return Err(AlgovizError::empty_input("graph"));
    }

    // Stable sort: equal weights keep their insertion order
    let mut sorted_edges: Vec<Edge> = graph.edges().to_vec();
    sorted_edges.sort_by_key(|edge| edge.weight);

    let mut components = UnionFind::new(graph.node_count());
    let mut steps = Vec::with_capacity(sorted_edges.len() * 2);
    let mut accepted = 0usize;

    for edge in &sorted_edges {
        steps.push(Step::MstConsider {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        });
        if components.union(edge.from, edge.to) {
            accepted += 1;
            steps.push(Step::MstAccept {
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
            });
        } else {
            steps.push(Step::MstReject {
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
            });
        }
    }

    tracing::debug!(accepted, considered = sorted_edges.len(), "kruskal complete");
    Ok(steps)
}
