//! Step event schema shared by every engine
//!
//! A step is one discrete, replayable state-transition event. Each
//! variant's payload carries explicit indices and identifiers so a
//! replay driver can reproduce the visual transition without
//! re-executing the algorithm, never live loop state.

use serde::Serialize;

/// Which child slot a tree descent entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildSide {
    Left,
    Right,
}

/// One replayable state-transition event
///
/// Sort-related variants snapshot the entire working array (taken
/// before the mutation the step announces), so any single step fully
/// determines render state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// A node was extracted from the frontier and processed
    Visit { node: usize },
    /// Two elements were compared
    Compare {
        array: Vec<i64>,
        comparing: Vec<usize>,
        swapping: Vec<usize>,
        sorted: Vec<usize>,
    },
    /// Two elements exchanged positions
    Swap {
        array: Vec<i64>,
        comparing: Vec<usize>,
        swapping: Vec<usize>,
        sorted: Vec<usize>,
    },
    /// A node's recorded distance was lowered (`None` = unreached)
    UpdateDistance {
        from: usize,
        to: usize,
        old_distance: Option<u32>,
        new_distance: u32,
    },
    /// An edge was followed while expanding the frontier
    ExploreEdge { from: usize, to: usize },
    /// An edge is being examined for MST membership
    MstConsider { from: usize, to: usize, weight: u32 },
    /// The edge joins two components and enters the MST
    MstAccept { from: usize, to: usize, weight: u32 },
    /// The edge would close a cycle and is discarded
    MstReject { from: usize, to: usize, weight: u32 },
    /// Descent from a parent node into one of its children
    TreeMove { from: i64, to: i64, side: ChildSide },
    /// A node's value was emitted by the traversal
    TreeProcess { value: i64 },
    /// Return from a child back to its parent
    TreeReturn { from: i64, to: i64 },
}
