//! Search space abstraction
//!
//! Trait seam between the search algorithms and the structures they
//! run over: the grid exposes 4-directional unit-cost adjacency, the
//! graph exposes weighted adjacency in edge insertion order.

use crate::graph::Graph;
use crate::grid::Grid;

/// Adjacency and heuristics for a searchable structure
pub trait SearchSpace {
    /// Number of addressable nodes; bounds every search loop
    fn node_count(&self) -> usize;

    /// Whether the node can be occupied (false for walls)
    fn is_traversable(&self, node: usize) -> bool;

    /// Traversable neighbors with edge weights, in a fixed
    /// deterministic order
    fn neighbors(&self, node: usize) -> Vec<(usize, u32)>;

    /// Admissible estimate of the remaining cost to `goal`
    fn heuristic(&self, node: usize, goal: usize) -> u32;
}

impl SearchSpace for Grid {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn is_traversable(&self, node: usize) -> bool {
        !self.is_wall(node)
    }

    fn neighbors(&self, node: usize) -> Vec<(usize, u32)> {
        self.neighbors(node).into_iter().map(|n| (n, 1)).collect()
    }

    fn heuristic(&self, node: usize, goal: usize) -> u32 {
        self.manhattan(node, goal)
    }
}

impl SearchSpace for Graph {
    fn node_count(&self) -> usize {
        self.node_count()
    }

    fn is_traversable(&self, _node: usize) -> bool {
        true
    }

    fn neighbors(&self, node: usize) -> Vec<(usize, u32)> {
        self.neighbors(node)
    }

    // No coordinates to estimate from; A* degrades to Dijkstra, which
    // keeps the zero heuristic admissible.
    fn heuristic(&self, _node: usize, _goal: usize) -> u32 {
        0
    }
}
