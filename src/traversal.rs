//! Traversal engine: binary tree walks
//!
//! The depth-first variants share one recursive walk and differ only
//! in where `tree_process` is emitted relative to the two child
//! descents. Every descent into an existing child is bracketed by a
//! `tree_move` / `tree_return` pair, and the pairs nest with stack
//! discipline; edge-highlight replay relies on that pairing.
//! Level-order uses a FIFO queue and has no return concept.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{AlgovizError, Result};
use crate::step::{ChildSide, Step};
use crate::tree::{Tree, TreeNode};

/// Order selector for the traversal engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    Inorder,
    Preorder,
    Postorder,
    LevelOrder,
}

impl FromStr for TraversalOrder {
    type Err = AlgovizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "inorder" => Ok(TraversalOrder::Inorder),
            "preorder" => Ok(TraversalOrder::Preorder),
            "postorder" => Ok(TraversalOrder::Postorder),
            "levelorder" => Ok(TraversalOrder::LevelOrder),
            other => Err(AlgovizError::invalid_input(format!(
                "unknown traversal order '{}' (expected: inorder, preorder, postorder, levelorder)",
                other
            ))),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraversalOrder::Inorder => "inorder",
            TraversalOrder::Preorder => "preorder",
            TraversalOrder::Postorder => "postorder",
            TraversalOrder::LevelOrder => "levelorder",
        };
        write!(f, "{}", name)
    }
}

/// Walk the tree in the given order, returning the step trace
#[tracing::instrument(skip(tree), fields(order = %order, nodes = tree.len()))]
pub fn run_traversal(tree: &Tree, order: TraversalOrder) -> Result<Vec<Step>> {
    let root = tree
        .root
        .as_deref()
        .ok_or_else(|| AlgovizError::empty_input("tree"))?;

    let mut steps = Vec::new();
    match order {
        TraversalOrder::LevelOrder => level_order(root, &mut steps),
        depth_first_order => depth_first(root, depth_first_order, &mut steps),
    }

    tracing::debug!(steps = steps.len(), "traversal complete");
    Ok(steps)
}

fn depth_first(node: &TreeNode, order: TraversalOrder, steps: &mut Vec<Step>) {
    if order == TraversalOrder::Preorder {
        steps.push(Step::TreeProcess { value: node.value });
    }

    if let Some(left) = node.left.as_deref() {
        steps.push(Step::TreeMove {
            from: node.value,
            to: left.value,
            side: ChildSide::Left,
        });
        depth_first(left, order, steps);
        steps.push(Step::TreeReturn {
            from: left.value,
            to: node.value,
        });
    }

    if order == TraversalOrder::Inorder {
        steps.push(Step::TreeProcess { value: node.value });
    }

    if let Some(right) = node.right.as_deref() {
        steps.push(Step::TreeMove {
            from: node.value,
            to: right.value,
            side: ChildSide::Right,
        });
        depth_first(right, order, steps);
        steps.push(Step::TreeReturn {
            from: right.value,
            to: node.value,
        });
    }

    if order == TraversalOrder::Postorder {
        steps.push(Step::TreeProcess { value: node.value });
    }
}

fn level_order(root: &TreeNode, steps: &mut Vec<Step>) {
    let mut queue: VecDeque<&TreeNode> = VecDeque::new();
    queue.push_back(root);

    while let Some(node) = queue.pop_front() {
        steps.push(Step::TreeProcess { value: node.value });
        if let Some(left) = node.left.as_deref() {
            steps.push(Step::TreeMove {
                from: node.value,
                to: left.value,
                side: ChildSide::Left,
            });
            queue.push_back(left);
        }
        if let Some(right) = node.right.as_deref() {
            steps.push(Step::TreeMove {
                from: node.value,
                to: right.value,
                side: ChildSide::Right,
            });
            queue.push_back(right);
        }
    }
}

#[cfg(test)]
mod tests;
