use super::*;

fn bst() -> Tree {
    Tree::from_values(&[5, 3, 8, 1, 4])
}

fn process_order(steps: &[Step]) -> Vec<i64> {
    steps
        .iter()
        .filter_map(|s| match s {
            Step::TreeProcess { value } => Some(*value),
            _ => None,
        })
        .collect()
}

#[test]
fn test_order_from_str() {
    assert_eq!(
        "inorder".parse::<TraversalOrder>().unwrap(),
        TraversalOrder::Inorder
    );
    assert_eq!(
        "LevelOrder".parse::<TraversalOrder>().unwrap(),
        TraversalOrder::LevelOrder
    );
    assert!("spiral".parse::<TraversalOrder>().is_err());
    assert_eq!(TraversalOrder::Postorder.to_string(), "postorder");
}

/// Inorder over the BST built from [5, 3, 8, 1, 4] yields sorted order
#[test]
fn test_inorder_bst_process_order() {
    let steps = run_traversal(&bst(), TraversalOrder::Inorder).unwrap();
    assert_eq!(process_order(&steps), vec![1, 3, 4, 5, 8]);
}

#[test]
fn test_preorder_process_order() {
    let steps = run_traversal(&bst(), TraversalOrder::Preorder).unwrap();
    assert_eq!(process_order(&steps), vec![5, 3, 1, 4, 8]);
}

#[test]
fn test_postorder_process_order() {
    let steps = run_traversal(&bst(), TraversalOrder::Postorder).unwrap();
    assert_eq!(process_order(&steps), vec![1, 4, 3, 8, 5]);
}

/// Level order processes level by level and emits no returns
#[test]
fn test_level_order_trace() {
    let steps = run_traversal(&bst(), TraversalOrder::LevelOrder).unwrap();
    assert_eq!(process_order(&steps), vec![5, 3, 8, 1, 4]);
    assert!(steps
        .iter()
        .all(|s| !matches!(s, Step::TreeReturn { .. })));

    assert_eq!(
        steps[..3],
        [
            Step::TreeProcess { value: 5 },
            Step::TreeMove { from: 5, to: 3, side: ChildSide::Left },
            Step::TreeMove { from: 5, to: 8, side: ChildSide::Right },
        ]
    );
}

/// Depth-first move/return pairs nest with stack discipline
#[test]
fn test_move_return_pairs_nest() {
    for order in [
        TraversalOrder::Inorder,
        TraversalOrder::Preorder,
        TraversalOrder::Postorder,
    ] {
        let steps = run_traversal(&bst(), order).unwrap();
        let mut depth = 0i32;
        let mut moves = 0;
        for step in &steps {
            match step {
                Step::TreeMove { .. } => {
                    depth += 1;
                    moves += 1;
                }
                Step::TreeReturn { .. } => {
                    depth -= 1;
                    assert!(depth >= 0, "{} returned above the root", order);
                }
                _ => {}
            }
        }
        assert_eq!(depth, 0, "{} left unbalanced descents", order);
        // One descent per non-root node
        assert_eq!(moves, 4, "{} descent count", order);
    }
}

/// The exact inorder trace brackets each descent with a move/return
/// pair
#[test]
fn test_inorder_full_trace() {
    let tree = Tree::from_values(&[2, 1, 3]);
    let steps = run_traversal(&tree, TraversalOrder::Inorder).unwrap();
    assert_eq!(
        steps,
        vec![
            Step::TreeMove { from: 2, to: 1, side: ChildSide::Left },
            Step::TreeProcess { value: 1 },
            Step::TreeReturn { from: 1, to: 2 },
            Step::TreeProcess { value: 2 },
            Step::TreeMove { from: 2, to: 3, side: ChildSide::Right },
            Step::TreeProcess { value: 3 },
            Step::TreeReturn { from: 3, to: 2 },
        ]
    );
}

#[test]
fn test_single_node_tree() {
    let tree = Tree::from_values(&[42]);
    for order in [
        TraversalOrder::Inorder,
        TraversalOrder::Preorder,
        TraversalOrder::Postorder,
        TraversalOrder::LevelOrder,
    ] {
        let steps = run_traversal(&tree, order).unwrap();
        assert_eq!(steps, vec![Step::TreeProcess { value: 42 }]);
    }
}

#[test]
fn test_empty_tree_is_invalid() {
    assert!(run_traversal(&Tree::new(), TraversalOrder::Inorder).is_err());
}
