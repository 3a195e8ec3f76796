//! Search engine: BFS / DFS / Dijkstra / A*
//!
//! Runs one search variant over any [`SearchSpace`] (grid or graph)
//! from a start node to an end node:
//! - BFS for fewest-edge paths over a FIFO frontier
//! - DFS over a LIFO frontier, no shortest-path guarantee
//! - Dijkstra for cheapest paths under positive edge weights
//! - A* with an admissible heuristic and explicit open/closed sets
//!
//! An unreachable end is a normal outcome: the run returns an empty
//! path together with the complete visited order.

mod algos;
pub mod space;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{AlgovizError, Result};

pub use space::SearchSpace;

/// Algorithm selector for the search engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchVariant {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl FromStr for SearchVariant {
    type Err = AlgovizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(SearchVariant::Bfs),
            "dfs" => Ok(SearchVariant::Dfs),
            "dijkstra" => Ok(SearchVariant::Dijkstra),
            "astar" => Ok(SearchVariant::AStar),
            other => Err(AlgovizError::invalid_input(format!(
                "unknown search variant '{}' (expected: bfs, dfs, dijkstra, astar)",
                other
            ))),
        }
    }
}

impl fmt::Display for SearchVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchVariant::Bfs => "bfs",
            SearchVariant::Dfs => "dfs",
            SearchVariant::Dijkstra => "dijkstra",
            SearchVariant::AStar => "astar",
        };
        write!(f, "{}", name)
    }
}

/// Result of a completed search run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Nodes in the order the search settled them
    pub visited_order: Vec<usize>,
    /// Start-to-end node sequence; empty when the end is unreachable
    pub path: Vec<usize>,
}

/// Run a search variant from `start` to `end`
///
/// The space is borrowed immutably; all per-node bookkeeping lives in
/// run-local state, so concurrent runs over the same structure cannot
/// observe each other.
#[tracing::instrument(skip(space), fields(variant = %variant, nodes = space.node_count()))]
pub fn run_search(
    space: &dyn SearchSpace,
    start: usize,
    end: usize,
    variant: SearchVariant,
) -> Result<SearchResult> {
    validate_endpoints(space, start, end)?;

    let mut state = algos::SearchState::new(space.node_count());
    let visited_order = match variant {
        SearchVariant::Bfs => algos::bfs(space, start, end, &mut state),
        SearchVariant::Dfs => algos::dfs(space, start, end, &mut state),
        SearchVariant::Dijkstra => algos::dijkstra(space, start, end, &mut state),
        SearchVariant::AStar => algos::astar(space, start, end, &mut state),
    };
    let path = state.reconstruct_path(start, end);

    tracing::debug!(
        visited = visited_order.len(),
        path_len = path.len(),
        "search complete"
    );

    Ok(SearchResult {
        visited_order,
        path,
    })
}

fn validate_endpoints(space: &dyn SearchSpace, start: usize, end: usize) -> Result<()> {
    if space.node_count() == 0 {
        return Err(AlgovizError::empty_input("search space"));
    }
    if start >= space.node_count() {
        return Err(AlgovizError::out_of_bounds("start", start));
    }
    if end >= space.node_count() {
        return Err(AlgovizError::out_of_bounds("end", end));
    }
    if !space.is_traversable(start) {
        return Err(AlgovizError::invalid_input(format!(
            "start node {} is a wall",
            start
        )));
    }
    Ok(())
}
