//! Instrumented graph walks
//!
//! DFS, BFS, and Dijkstra over the weighted graph model, each emitting
//! the shared step vocabulary instead of a distilled result:
//! - `visit` when a node is extracted from the frontier and processed
//! - `explore_edge` when an edge is followed to expand the frontier
//! - `update_distance` when a Dijkstra relaxation succeeds
//!
//! Dijkstra here settles the whole component reachable from the start;
//! there is no destination node.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{AlgovizError, Result};
use crate::graph::Graph;
use crate::grid::UNREACHED;
use crate::step::Step;

/// Algorithm selector for the walk engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkVariant {
    Dfs,
    Bfs,
    Dijkstra,
}

impl FromStr for WalkVariant {
    type Err = AlgovizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dfs" => Ok(WalkVariant::Dfs),
            "bfs" => Ok(WalkVariant::Bfs),
            "dijkstra" => Ok(WalkVariant::Dijkstra),
            other => Err(AlgovizError::invalid_input(format!(
                "unknown walk variant '{}' (expected: dfs, bfs, dijkstra)",
                other
            ))),
        }
    }
}

impl fmt::Display for WalkVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WalkVariant::Dfs => "dfs",
            WalkVariant::Bfs => "bfs",
            WalkVariant::Dijkstra => "dijkstra",
        };
        write!(f, "{}", name)
    }
}

/// Run an instrumented walk from `start`, returning the step trace
#[tracing::instrument(skip(graph), fields(variant = %variant, nodes = graph.node_count()))]
pub fn run_walk(graph: &Graph, start: usize, variant: WalkVariant) -> Result<Vec<Step>> {
    if graph.node_count() == 0 {
        return Err(AlgovizError::empty_input("graph"));
    }
    if !graph.contains(start) {
        return Err(AlgovizError::out_of_bounds("start", start));
    }

    let steps = match variant {
        WalkVariant::Dfs => dfs_walk(graph, start),
        WalkVariant::Bfs => bfs_walk(graph, start),
        WalkVariant::Dijkstra => dijkstra_walk(graph, start),
    };

    tracing::debug!(steps = steps.len(), "walk complete");
    Ok(steps)
}

/// LIFO stack with a re-visit skip on pop
///
/// Unvisited neighbors are pushed in reverse adjacency order so the
/// first neighbor is popped (and explored) first.
fn dfs_walk(graph: &Graph, start: usize) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut visited = vec![false; graph.node_count()];
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        steps.push(Step::Visit { node: current });

        let mut pending: Vec<usize> = graph
            .neighbors(current)
            .into_iter()
            .map(|(neighbor, _)| neighbor)
            .filter(|&neighbor| !visited[neighbor])
            .collect();
        pending.reverse();
        for neighbor in pending {
            steps.push(Step::ExploreEdge {
                from: current,
                to: neighbor,
            });
            stack.push(neighbor);
        }
    }

    steps
}

/// FIFO queue; neighbors are marked visited at enqueue time
fn bfs_walk(graph: &Graph, start: usize) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        steps.push(Step::Visit { node: current });
        for (neighbor, _) in graph.neighbors(current) {
            if !visited[neighbor] {
                steps.push(Step::ExploreEdge {
                    from: current,
                    to: neighbor,
                });
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    steps
}

/// Full-settle Dijkstra; extraction ties go to the lowest node id
fn dijkstra_walk(graph: &Graph, start: usize) -> Vec<Step> {
    let mut steps = Vec::new();
    let node_count = graph.node_count();
    let mut distance = vec![UNREACHED; node_count];
    let mut visited = vec![false; node_count];

    distance[start] = 0;

    loop {
        let mut current: Option<usize> = None;
        for id in 0..node_count {
            if visited[id] || distance[id] == UNREACHED {
                continue;
            }
            if current.is_none_or(|best| distance[id] < distance[best]) {
                current = Some(id);
            }
        }
        let Some(current) = current else {
            break;
        };

        visited[current] = true;
        steps.push(Step::Visit { node: current });

        for (neighbor, weight) in graph.neighbors(current) {
            if visited[neighbor] {
                continue;
            }
            let new_distance = distance[current].saturating_add(weight);
            if new_distance < distance[neighbor] {
                let old_distance = if distance[neighbor] == UNREACHED {
                    None
                } else {
                    Some(distance[neighbor])
                };
                steps.push(Step::UpdateDistance {
                    from: current,
                    to: neighbor,
                    old_distance,
                    new_distance,
                });
                distance[neighbor] = new_distance;
            }
        }
    }

    steps
}
