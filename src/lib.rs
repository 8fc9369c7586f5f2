//! Implements an arena-allocated *decorated binary tree* — a binary tree whose nodes carry an optional, arbitrarily-typed datum — together with removal-capable traversal cursors.
//!
//! # Overview
//! The tree in this crate is not a search tree: elements are opaque and compared only by equality. What it offers instead is a small set of structural operations with precise contracts:
//!
//! - **Root insertion** — [`add`] pushes a new root whose left subtree is the former tree, [`alternate_add`] does the same on the right, and [`from_root_and_two_trees`] grafts two whole trees under a fresh root.
//! - **Three traversal cursors** — preorder, inorder and postorder, each implemented as an explicit stack machine with no recursion. Shared cursors are plain iterators; mutating cursors additionally support removing the most recently produced node, provided it is a leaf.
//! - **Structural equality and hashing** — two trees are equal when their preorder *and* inorder datum sequences agree, which pins down both shape and content in one linear pass.
//!
//! Nodes use a technique called ["arena-allocated trees"][arena tree blog post]: the tree stores its nodes in a backing storage (a sparse [`Vec`] by default) and links them by storage keys rather than pointers. Parent back-links are plain keys carrying no ownership, so the bidirectional links form no reference cycles and leaf removal is an O(1) slot operation.
//!
//! # Example
//! ```rust
//! use kindling::BinaryTree;
//!
//! // The turbofish picks the element type; the backing storage defaults to
//! // a sparse `Vec`.
//! let mut tree = BinaryTree::<u32>::new();
//!
//! // Root insertion: the new node becomes the root, the former tree becomes
//! // its left subtree.
//! tree.add(Some(1));
//! tree.add(Some(2));
//! assert_eq!(tree.to_string(), "( 2 ( 1 () () ) () )");
//!
//! // Cursors walk the tree iteratively, without recursion.
//! let preorder: Vec<_> = tree.preorder().map(|datum| datum.copied()).collect();
//! assert_eq!(preorder, [Some(2), Some(1)]);
//!
//! // Removal is leaf-only, and here the node holding 1 is a leaf.
//! assert!(tree.remove(Some(&1)));
//! assert_eq!(tree.to_string(), "( 2 () () )");
//! ```
//!
//! # Storage
//! The arena abstraction comes from the [`granite`] crate: any type implementing [`Storage`] (or [`ListStorage`], for list-like collections) can back a tree. The default is [`SparseVec`], a `Vec` which replaces removed elements with holes instead of shifting, so node keys stay stable across removals — the property the mutating cursors rely on. Holes are recycled by later insertions; [`num_holes`] and [`is_dense`] expose the bookkeeping.
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library. Currently this only adds [`Error`] trait implementations for the error types.
//! - `smallvec` — forwards to `granite/smallvec`, adding storage support for [`SmallVec`].
//! - `slab` — forwards to `granite/slab`.
//! - `slotmap` — forwards to `granite/slotmap`.
//! - `union_optimizations` — forwards to `granite/union_optimizations`; requires a nightly compiler.
//!
//! [`add`]: binary_tree/struct.BinaryTree.html#method.add " "
//! [`alternate_add`]: binary_tree/struct.BinaryTree.html#method.alternate_add " "
//! [`from_root_and_two_trees`]: binary_tree/struct.BinaryTree.html#method.from_root_and_two_trees " "
//! [`num_holes`]: binary_tree/struct.BinaryTree.html#method.num_holes " "
//! [`is_dense`]: binary_tree/struct.BinaryTree.html#method.is_dense " "
//! [`granite`]: https://docs.rs/granite " "
//! [`Storage`]: https://docs.rs/granite/*/granite/trait.Storage.html " "
//! [`ListStorage`]: https://docs.rs/granite/*/granite/trait.ListStorage.html " "
//! [`SparseVec`]: https://docs.rs/granite/*/granite/type.SparseVec.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::explicit_iter_loop,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::redundant_closure_for_method_calls,
    clippy::single_match_else,
    clippy::unnested_or_patterns,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod binary_tree;
pub use binary_tree::BinaryTree;

pub mod collection;
#[doc(no_inline)]
pub use collection::Collection;

pub mod traversal;

/// A prelude for using Kindling, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        binary_tree::{BinaryTree, Node as BinaryTreeNode},
        collection::Collection as TreeCollection,
        traversal::{
            InorderCursor, InorderCursorMut, PostorderCursor, PostorderCursorMut, PreorderCursor,
            PreorderCursorMut,
        },
    };
}
