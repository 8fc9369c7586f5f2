//! Cursors which traverse a binary tree in preorder, inorder or postorder without recursion.
//!
//! Each traversal order comes in two flavors:
//! - A *shared* cursor ([`PreorderCursor`], [`InorderCursor`], [`PostorderCursor`]) borrows the tree immutably and implements [`Iterator`] over the visited data. Any number of shared cursors may walk the same tree at once.
//! - A *mutating* cursor ([`PreorderCursorMut`], [`InorderCursorMut`], [`PostorderCursorMut`]) borrows the tree exclusively and adds [`remove`], which detaches the most recently produced node if it is a leaf. The exclusive borrow is the whole concurrency story: while a mutating cursor is alive, no other path can touch the tree, so the only structural mutation a traversal can observe is the one it performed itself.
//!
//! All six cursors snapshot the node count at construction and produce exactly that many positions; removal through the cursor does not change how many positions remain to be visited. The state machines are explicit stacks, faithful to the iterative formulation — the postorder cursor carries a second, parallel stack recording whether each pending ancestor was entered through its left or right child.
//!
//! [`PreorderCursor`]: struct.PreorderCursor.html " "
//! [`InorderCursor`]: struct.InorderCursor.html " "
//! [`PostorderCursor`]: struct.PostorderCursor.html " "
//! [`PreorderCursorMut`]: struct.PreorderCursorMut.html " "
//! [`InorderCursorMut`]: struct.InorderCursorMut.html " "
//! [`PostorderCursorMut`]: struct.PostorderCursorMut.html " "
//! [`Iterator`]: https://doc.rust-lang.org/core/iter/trait.Iterator.html " "
//! [`remove`]: struct.PreorderCursorMut.html#method.remove " "

mod inorder;
mod postorder;
mod preorder;

pub use inorder::{InorderCursor, InorderCursorMut};
pub use postorder::{PostorderCursor, PostorderCursorMut};
pub use preorder::{PreorderCursor, PreorderCursorMut};

#[cfg(test)]
mod tests;

use core::fmt::{self, Display, Formatter};

/// Which child link an ancestor on the postorder stack was entered through.
///
/// Also reused by the tree's grafting machinery to name a child slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Side {
    Left,
    Right,
}

/// The error type returned when a cursor is asked to produce a position past exhaustion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TraversalExhaustedError;
impl Display for TraversalExhaustedError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the traversal has no positions remaining")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for TraversalExhaustedError {}

/// The error type returned when a cursor is asked to remove without a fresh position.
///
/// Produced when `remove` is called before the first `next`, or twice without an intervening `next` — each produced position can be consumed by at most one removal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RemoveStateError;
impl Display for RemoveStateError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("no position has been produced since the last removal")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for RemoveStateError {}
