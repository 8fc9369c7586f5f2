use super::*;
use crate::binary_tree::BinaryTree;
use alloc::{string::ToString, vec::Vec};

/// Root 1, left child 2, right child 3.
fn three_nodes() -> BinaryTree<u32> {
    let mut left = BinaryTree::<u32>::new();
    left.add(Some(2));
    let mut right = BinaryTree::<u32>::new();
    right.add(Some(3));
    BinaryTree::from_root_and_two_trees(Some(1), Some(left), Some(right))
}

fn collect<'a, I>(cursor: I) -> Vec<Option<u32>>
where I: Iterator<Item = Option<&'a u32>>,
{
    cursor.map(|d| d.copied()).collect()
}

#[test]
fn orders_on_a_full_root() {
    let tree = three_nodes();
    assert_eq!(collect(tree.preorder()), [Some(1), Some(2), Some(3)]);
    assert_eq!(collect(tree.inorder()), [Some(2), Some(1), Some(3)]);
    assert_eq!(collect(tree.postorder()), [Some(2), Some(3), Some(1)]);
}

#[test]
fn orders_on_a_left_chain() {
    let mut tree = BinaryTree::<u32>::new();
    for i in 1..=4 {
        tree.add(Some(i));
    }
    assert_eq!(
        collect(tree.preorder()),
        [Some(4), Some(3), Some(2), Some(1)],
    );
    assert_eq!(
        collect(tree.inorder()),
        [Some(1), Some(2), Some(3), Some(4)],
    );
    assert_eq!(
        collect(tree.postorder()),
        [Some(1), Some(2), Some(3), Some(4)],
    );
}

#[test]
fn orders_on_a_left_child_under_a_right_chain() {
    // Shape: 3 with right child 2, which has left child 1.
    let mut tree = BinaryTree::<u32>::new();
    tree.add(Some(1));
    tree.add(Some(2));
    tree.alternate_add(Some(3));
    assert_eq!(collect(tree.preorder()), [Some(3), Some(2), Some(1)]);
    assert_eq!(collect(tree.inorder()), [Some(3), Some(1), Some(2)]);
    assert_eq!(collect(tree.postorder()), [Some(1), Some(2), Some(3)]);
}

#[test]
fn undecorated_positions_are_produced() {
    let mut tree = BinaryTree::<u32>::new();
    tree.add(None);
    tree.add(Some(1));
    assert_eq!(collect(tree.preorder()), [Some(1), None]);
}

#[test]
fn exhaustion_is_an_error() {
    let empty = BinaryTree::<u32>::new();
    let mut cursor = empty.preorder();
    assert!(!cursor.has_next());
    assert_eq!(cursor.try_next(), Err(TraversalExhaustedError));
    assert_eq!(cursor.next(), None);

    let tree = three_nodes();
    let mut cursor = tree.inorder();
    while cursor.has_next() {
        cursor.try_next().expect("positions were remaining");
    }
    assert_eq!(cursor.try_next(), Err(TraversalExhaustedError));
}

#[test]
fn cursors_are_exact_size() {
    let tree = three_nodes();
    let mut cursor = tree.postorder();
    assert_eq!(cursor.len(), 3);
    assert_eq!(cursor.size_hint(), (3, Some(3)));
    cursor.next();
    assert_eq!(cursor.len(), 2);
    assert_eq!(cursor.by_ref().count(), 2);
    assert_eq!(cursor.len(), 0);
}

#[test]
fn shared_cursors_clone_independently() {
    let tree = three_nodes();
    let mut one = tree.preorder();
    assert_eq!(one.next(), Some(Some(&1)));
    let two = one.clone();
    assert_eq!(collect(one), [Some(2), Some(3)]);
    assert_eq!(collect(two), [Some(2), Some(3)]);
}

#[test]
fn remove_requires_a_fresh_production() {
    let mut tree = three_nodes();
    let mut cursor = tree.preorder_mut();
    assert_eq!(cursor.remove(), Err(RemoveStateError));

    // Root 1 is a branch: removal is consumed but declines.
    cursor.next().expect("positions were remaining");
    assert_eq!(cursor.remove(), Ok(false));
    assert_eq!(cursor.remove(), Err(RemoveStateError));

    // Leaf 2 goes, and the consumed position cannot be removed twice.
    cursor.next().expect("positions were remaining");
    assert_eq!(cursor.remove(), Ok(true));
    assert_eq!(cursor.remove(), Err(RemoveStateError));
    assert_eq!(tree.len(), 2);
}

#[test]
fn preorder_survives_mid_traversal_removal() {
    let mut tree = three_nodes();
    let mut produced = Vec::new();
    let mut cursor = tree.preorder_mut();
    while cursor.has_next() {
        let datum = cursor
            .next()
            .expect("positions were remaining")
            .copied();
        produced.push(datum);
        if datum == Some(2) {
            assert_eq!(cursor.remove(), Ok(true));
        }
    }
    // Removal does not shorten the traversal or derail it.
    assert_eq!(produced, [Some(1), Some(2), Some(3)]);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.to_string(), "( 1 () ( 3 () () ) )");
}

#[test]
fn inorder_survives_mid_traversal_removal() {
    let mut tree = three_nodes();
    let mut produced = Vec::new();
    let mut cursor = tree.inorder_mut();
    while cursor.has_next() {
        let datum = cursor
            .next()
            .expect("positions were remaining")
            .copied();
        produced.push(datum);
        if datum == Some(2) {
            assert_eq!(cursor.remove(), Ok(true));
        }
    }
    assert_eq!(produced, [Some(2), Some(1), Some(3)]);
    assert_eq!(tree.len(), 2);
}

#[test]
fn postorder_peels_the_tree() {
    let mut tree = three_nodes();
    let mut cursor = tree.postorder_mut();
    while cursor.has_next() {
        cursor.next().expect("positions were remaining");
        // Postorder produces children first, so every position is a leaf by
        // the time it comes up.
        assert_eq!(cursor.remove(), Ok(true));
    }
    assert!(tree.is_empty());
}

#[test]
fn error_types_display() {
    assert_eq!(
        TraversalExhaustedError.to_string(),
        "the traversal has no positions remaining",
    );
    assert_eq!(
        RemoveStateError.to_string(),
        "no position has been produced since the last removal",
    );
}
