//! The decorated binary tree and its node type.
//!
//! Every node of the tree carries an *optional* datum — undecorated nodes are legal, render as an empty string and compare equal only to other undecorated nodes. The tree is not ordered by its data: insertion happens at the root ([`add`] hangs the former tree on the left, [`alternate_add`] on the right, [`from_root_and_two_trees`] grafts two donors under a fresh root), lookup is a linear traversal, and removal only ever detaches leaves, driven through the mutating cursors of the [`traversal`] module.
//!
//! Equality and hashing are structural: two trees are equal when their sizes and both their preorder and inorder datum streams agree. See [`BinaryTree`]'s trait implementations for the exact contracts.
//!
//! # Example
//! ```rust
//! use kindling::BinaryTree;
//!
//! let mut tree = BinaryTree::<i32>::new();
//! tree.add(Some(10));
//! tree.add(Some(20));
//! tree.alternate_add(Some(30));
//! assert_eq!(tree.to_string(), "( 30 () ( 20 ( 10 () () ) () ) )");
//!
//! // Equality is structural, so a tree rebuilt the same way compares equal.
//! let mut rebuilt = BinaryTree::<i32>::new();
//! rebuilt.add(Some(10));
//! rebuilt.add(Some(20));
//! rebuilt.alternate_add(Some(30));
//! assert_eq!(tree, rebuilt);
//! ```
//!
//! [`add`]: struct.BinaryTree.html#method.add " "
//! [`alternate_add`]: struct.BinaryTree.html#method.alternate_add " "
//! [`from_root_and_two_trees`]: struct.BinaryTree.html#method.from_root_and_two_trees " "
//! [`BinaryTree`]: struct.BinaryTree.html " "
//! [`traversal`]: ../traversal/index.html " "

mod base;
mod node;

pub use base::BinaryTree;
pub use node::Node;

#[cfg(test)]
mod tests;

use granite::SparseVec;

/// A binary tree which uses a *sparse* `Vec` as backing storage.
///
/// The default `BinaryTree` type already uses this, so this is only provided for explicitness and consistency.
pub type SparseVecBinaryTree<T> = BinaryTree<T, usize, SparseVec<Node<T, usize>>>;
