use super::*;
use crate::collection::{AbsentCollectionError, Collection, UnsupportedOperationError};
use alloc::{string::ToString, vec::Vec};

/// Root 1, left child 2, right child 3.
fn three_nodes() -> BinaryTree<u32> {
    let mut left = BinaryTree::<u32>::new();
    left.add(Some(2));
    let mut right = BinaryTree::<u32>::new();
    right.add(Some(3));
    BinaryTree::from_root_and_two_trees(Some(1), Some(left), Some(right))
}

#[test]
fn empty_tree() {
    let tree = BinaryTree::<u32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.to_string(), "()");
    assert!(!tree.contains(Some(&1)));
    assert!(!tree.contains(None));
}

#[test]
fn add_nests_on_the_left() {
    let mut tree = BinaryTree::<u32>::new();
    assert!(tree.add(Some(1)));
    assert!(tree.add(Some(2)));
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.to_string(), "( 2 ( 1 () () ) () )");

    assert!(tree.remove(Some(&1)));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.to_string(), "( 2 () () )");
}

#[test]
fn alternate_add_nests_on_the_right() {
    let mut tree = BinaryTree::<u32>::new();
    tree.add(Some(1));
    tree.alternate_add(Some(2));
    assert_eq!(tree.to_string(), "( 2 () ( 1 () () ) )");

    // Same preorder stream as the `add` nesting, different shape.
    let preorder: Vec<_> = tree.preorder().map(|d| d.copied()).collect();
    assert_eq!(preorder, [Some(2), Some(1)]);
}

#[test]
fn undecorated_nodes_render_as_empty_string() {
    let mut tree = BinaryTree::<u32>::new();
    tree.add(None);
    tree.add(Some(9));
    assert_eq!(tree.to_string(), "( 9 (  () () ) () )");
}

#[test]
fn factory_builds_both_sides() {
    let tree = three_nodes();
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.to_string(), "( 1 ( 2 () () ) ( 3 () () ) )");
}

#[test]
fn factory_left_graft_matches_add() {
    let mut donor = BinaryTree::<u32>::new();
    donor.add(Some(2));
    donor.add(Some(3));
    let grafted = BinaryTree::from_root_and_two_trees(Some(1), Some(donor), None);

    let mut by_add = BinaryTree::<u32>::new();
    by_add.add(Some(2));
    by_add.add(Some(3));
    by_add.add(Some(1));
    assert_eq!(grafted, by_add);
}

#[test]
fn factory_right_graft_matches_alternate_add() {
    let mut donor = BinaryTree::<u32>::new();
    donor.add(Some(2));
    let grafted = BinaryTree::from_root_and_two_trees(Some(1), None, Some(donor));

    let mut by_add = BinaryTree::<u32>::new();
    by_add.add(Some(2));
    by_add.alternate_add(Some(1));
    assert_eq!(grafted, by_add);
}

#[test]
fn factory_treats_empty_donor_as_absent() {
    let tree = BinaryTree::<u32>::from_root_and_two_trees(
        Some(1),
        Some(BinaryTree::new()),
        Some(BinaryTree::new()),
    );
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.to_string(), "( 1 () () )");
}

#[test]
fn removal_skips_non_leaf_matches() {
    let mut tree = BinaryTree::<u32>::new();
    tree.add(Some(5));
    tree.add(Some(6));
    tree.add(Some(5));

    // Both the root and the deepest node hold 5; only the deepest is a leaf.
    assert!(tree.remove(Some(&5)));
    assert_eq!(tree.to_string(), "( 5 ( 6 () () ) () )");

    // Removing the leaf turned 6 into a leaf, so it is removable now too.
    assert!(tree.remove(Some(&6)));
    assert_eq!(tree.to_string(), "( 5 () () )");
}

#[test]
fn removal_of_branch_only_match_fails() {
    let mut tree = BinaryTree::<u32>::new();
    tree.add(Some(5));
    tree.add(Some(6));
    assert!(!tree.remove(Some(&6)));
    assert_eq!(tree.len(), 2);
}

#[test]
fn removal_of_absent_datum_fails() {
    let mut tree = BinaryTree::<u32>::new();
    tree.add(Some(1));
    assert!(!tree.remove(Some(&9)));
    assert!(!tree.remove(None));
    assert_eq!(tree.len(), 1);
}

#[test]
fn removal_of_sole_node_empties_the_tree() {
    let mut tree = BinaryTree::<u32>::new();
    tree.add(Some(1));
    assert!(tree.remove(Some(&1)));
    assert!(tree.is_empty());
    assert_eq!(tree.to_string(), "()");
}

#[test]
fn removal_matches_undecorated_nodes() {
    let mut tree = BinaryTree::<u32>::new();
    tree.add(None);
    tree.add(Some(1));
    assert!(tree.remove(None));
    assert_eq!(tree.to_string(), "( 1 () () )");
}

#[test]
fn clear_empties_any_shape() {
    let mut tree = BinaryTree::<u32>::new();
    for i in 0..4 {
        tree.add(Some(i));
    }
    tree.alternate_add(Some(4));
    tree.add(Some(5));
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.to_string(), "()");

    // Already-empty clear is a no-op.
    tree.clear();
    assert!(tree.is_empty());
}

#[test]
fn clear_handles_left_children_under_right_chains() {
    // Shape: 3 with right child 2, which has left child 1.
    let mut tree = BinaryTree::<u32>::new();
    tree.add(Some(1));
    tree.add(Some(2));
    tree.alternate_add(Some(3));
    tree.clear();
    assert!(tree.is_empty());
}

#[test]
fn equality_is_structural() {
    let tree = three_nodes();
    assert_eq!(tree, tree.clone());
    assert_eq!(three_nodes(), three_nodes());

    // Same data, mirrored placement at the root.
    let mut one = BinaryTree::<u32>::new();
    one.add(Some(1));
    one.add(Some(2));
    let mut two = BinaryTree::<u32>::new();
    two.add(Some(1));
    two.alternate_add(Some(2));
    assert_ne!(one, two);

    // Different sizes are never equal.
    let mut bigger = one.clone();
    bigger.add(Some(3));
    assert_ne!(one, bigger);
}

#[test]
fn equality_distinguishes_decoration_absence() {
    let mut one = BinaryTree::<u32>::new();
    one.add(Some(1));
    let mut two = BinaryTree::<u32>::new();
    two.add(None);
    assert_ne!(one, two);

    let mut three = BinaryTree::<u32>::new();
    three.add(None);
    assert_eq!(two, three);
}

#[cfg(feature = "std")]
#[test]
fn equal_trees_hash_equal() {
    use core::hash::{Hash, Hasher};
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(tree: &BinaryTree<u32>) -> u64 {
        let mut hasher = DefaultHasher::new();
        tree.hash(&mut hasher);
        hasher.finish()
    }

    assert_eq!(hash_of(&three_nodes()), hash_of(&three_nodes()));

    // A tree built through a different construction path still hashes the
    // same as long as it compares equal.
    let rebuilt = BinaryTree::from_root_and_two_trees(
        Some(1),
        Some(BinaryTree::from_root_and_two_trees(Some(2), None, None)),
        Some(BinaryTree::from_root_and_two_trees(Some(3), None, None)),
    );
    assert_eq!(three_nodes(), rebuilt);
    assert_eq!(hash_of(&three_nodes()), hash_of(&rebuilt));
}

#[cfg(feature = "std")]
#[test]
fn signature_hash_agrees_for_equal_trees() {
    use std::collections::hash_map::RandomState;

    let state = RandomState::new();
    assert_eq!(
        three_nodes().signature_hash(&state),
        three_nodes().signature_hash(&state),
    );

    // The seed survives even for the empty tree.
    assert_eq!(BinaryTree::<u32>::new().signature_hash(&state), 47);
}

#[test]
fn collection_guaranteed_operations_delegate() {
    let mut tree: BinaryTree<u32> = three_nodes();
    assert_eq!(Collection::len(&tree), 3);
    assert!(Collection::contains(&tree, &Some(2)));
    assert!(!Collection::contains(&tree, &None));
    assert!(Collection::remove(&mut tree, &Some(2)));
    assert!(Collection::add(&mut tree, Some(8)));
    Collection::clear(&mut tree);
    assert!(Collection::is_empty(&tree));
}

#[test]
fn collection_contains_all() {
    let tree = three_nodes();
    let present = [Some(1), Some(2), Some(2)];
    assert_eq!(tree.contains_all(Some(&present)), Ok(true));
    let missing = [Some(1), Some(9)];
    assert_eq!(tree.contains_all(Some(&missing)), Ok(false));
    let empty: [Option<u32>; 0] = [];
    assert_eq!(tree.contains_all(Some(&empty)), Ok(true));
    assert_eq!(
        tree.contains_all(None::<&[Option<u32>; 0]>),
        Err(AbsentCollectionError),
    );
}

#[test]
fn collection_bulk_operations_are_permanently_rejected() {
    let mut tree = three_nodes();
    assert_eq!(
        tree.add_all([Some(4)]),
        Err(UnsupportedOperationError::AddAll),
    );
    assert_eq!(
        tree.remove_all(&[Some(1)]),
        Err(UnsupportedOperationError::RemoveAll),
    );
    assert_eq!(
        tree.retain_all(&[Some(1)]),
        Err(UnsupportedOperationError::RetainAll),
    );
    assert_eq!(tree.to_vec(), Err(UnsupportedOperationError::ToVec));
    // Rejection leaves the tree untouched.
    assert_eq!(tree.len(), 3);
}

#[test]
fn sparse_storage_tracks_holes() {
    let mut tree = BinaryTree::<u32>::new();
    tree.add(Some(1));
    tree.add(Some(2));
    tree.add(Some(3));
    assert_eq!(tree.num_holes(), 0);
    assert!(tree.is_dense());

    assert!(tree.remove(Some(&1)));
    assert_eq!(tree.num_holes(), 1);
    assert!(!tree.is_dense());

    // Insertion reuses the hole through the free-list.
    tree.add(Some(4));
    assert_eq!(tree.num_holes(), 0);
    assert!(tree.is_dense());
}

#[test]
fn borrowing_iteration_is_preorder() {
    let tree = three_nodes();
    let via_loop: Vec<_> = (&tree).into_iter().map(|d| d.copied()).collect();
    let via_iter: Vec<_> = tree.iter().map(|d| d.copied()).collect();
    assert_eq!(via_loop, [Some(1), Some(2), Some(3)]);
    assert_eq!(via_loop, via_iter);
}
