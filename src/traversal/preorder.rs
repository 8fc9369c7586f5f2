use super::{RemoveStateError, TraversalExhaustedError};
use crate::binary_tree::{BinaryTree, Node};
use alloc::vec::Vec;
use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
};
use granite::{DefaultStorage, Storage};

/// The iterative preorder machine, shared between the two cursor flavors.
///
/// `current` is the position most recently produced; the stack holds ancestors
/// whose right subtree is still owed. `current_removed` records that the
/// current position was detached from the tree, in which case its slot is gone
/// and the machine treats it as childless, which is exactly what a freshly
/// removed leaf is.
#[derive(Clone, Debug)]
struct PreorderState<K>
where K: Clone + Debug + Eq,
{
    current: Option<K>,
    current_removed: bool,
    stack: Vec<K>,
    remaining: usize,
}
impl<K> PreorderState<K>
where K: Clone + Debug + Eq,
{
    fn new<T, S>(tree: &BinaryTree<T, K, S>) -> Self
    where S: Storage<Element = Node<T, K>, Key = K>,
    {
        Self {
            current: None,
            current_removed: false,
            stack: Vec::new(),
            remaining: tree.len(),
        }
    }
    fn advance<T, S>(
        &mut self,
        tree: &BinaryTree<T, K, S>,
    ) -> Result<K, TraversalExhaustedError>
    where S: Storage<Element = Node<T, K>, Key = K>,
    {
        if self.remaining == 0 {
            return Err(TraversalExhaustedError);
        }
        let next = if let Some(current) = &self.current {
            let (left, right) = if self.current_removed {
                (None, None)
            } else {
                let node = tree.node(current);
                (node.left.clone(), node.right.clone())
            };
            if right.is_some() {
                self.stack.push(current.clone());
            }
            if let Some(left) = left {
                left
            } else {
                let owing = self
                    .stack
                    .pop()
                    .expect("positions remaining but nowhere to descend");
                tree.node(&owing)
                    .right
                    .clone()
                    .expect("stack entries always owe a right subtree")
            }
        } else {
            tree.root_key()
                .cloned()
                .expect("positions remaining in an empty tree")
        };
        self.current = Some(next.clone());
        self.current_removed = false;
        self.remaining -= 1;
        Ok(next)
    }
}

/// A shared cursor which walks a binary tree in *preorder*: every node before either of its subtrees, left subtree before right.
///
/// Implements [`Iterator`] over the visited data, so the usual adapters apply. The item type is `Option<&T>` — the inner option is the node's datum, which may be absent.
///
/// Created by the [`preorder`] and [`iter`] methods on [`BinaryTree`].
///
/// [`Iterator`]: https://doc.rust-lang.org/core/iter/trait.Iterator.html " "
/// [`preorder`]: ../binary_tree/struct.BinaryTree.html#method.preorder " "
/// [`iter`]: ../binary_tree/struct.BinaryTree.html#method.iter " "
/// [`BinaryTree`]: ../binary_tree/struct.BinaryTree.html " "
pub struct PreorderCursor<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a BinaryTree<T, K, S>,
    state: PreorderState<K>,
}
impl<'a, T, K, S> PreorderCursor<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    pub(crate) fn new(tree: &'a BinaryTree<T, K, S>) -> Self {
        Self {
            state: PreorderState::new(tree),
            tree,
        }
    }
    /// Returns `true` if the cursor has positions left to produce, `false` otherwise.
    #[inline(always)]
    pub fn has_next(&self) -> bool {
        self.state.remaining > 0
    }
    /// Produces the datum at the next preorder position.
    ///
    /// # Errors
    /// [`TraversalExhaustedError`] if all positions have been produced.
    ///
    /// [`TraversalExhaustedError`]: struct.TraversalExhaustedError.html " "
    #[inline]
    pub fn try_next(&mut self) -> Result<Option<&'a T>, TraversalExhaustedError> {
        let key = self.state.advance(self.tree)?;
        Ok(self.tree.node(&key).datum.as_ref())
    }
}
impl<'a, T, K, S> Iterator for PreorderCursor<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = Option<&'a T>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.state.remaining, Some(self.state.remaining))
    }
}
impl<T, K, S> ExactSizeIterator for PreorderCursor<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, K, S> FusedIterator for PreorderCursor<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, K, S> Clone for PreorderCursor<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            state: self.state.clone(),
        }
    }
}
impl<T, K, S> Debug for PreorderCursor<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreorderCursor")
            .field("remaining", &self.state.remaining)
            .finish()
    }
}

/// A mutating cursor which walks a binary tree in *preorder* and can remove leaves as it goes.
///
/// Unlike the shared [`PreorderCursor`], this type does not implement [`Iterator`] — its `next` borrows the produced datum from the cursor itself, keeping the reference from outliving a subsequent [`remove`].
///
/// Created by the [`preorder_mut`] method on [`BinaryTree`].
///
/// [`PreorderCursor`]: struct.PreorderCursor.html " "
/// [`Iterator`]: https://doc.rust-lang.org/core/iter/trait.Iterator.html " "
/// [`remove`]: #method.remove " "
/// [`preorder_mut`]: ../binary_tree/struct.BinaryTree.html#method.preorder_mut " "
/// [`BinaryTree`]: ../binary_tree/struct.BinaryTree.html " "
pub struct PreorderCursorMut<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a mut BinaryTree<T, K, S>,
    state: PreorderState<K>,
    produced: bool,
}
impl<'a, T, K, S> PreorderCursorMut<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    pub(crate) fn new(tree: &'a mut BinaryTree<T, K, S>) -> Self {
        Self {
            state: PreorderState::new(tree),
            tree,
            produced: false,
        }
    }
    /// Returns `true` if the cursor has positions left to produce, `false` otherwise.
    #[inline(always)]
    pub fn has_next(&self) -> bool {
        self.state.remaining > 0
    }
    /// Produces the datum at the next preorder position.
    ///
    /// # Errors
    /// [`TraversalExhaustedError`] if all positions have been produced. Removal through the cursor does not shorten the traversal.
    ///
    /// [`TraversalExhaustedError`]: struct.TraversalExhaustedError.html " "
    #[allow(clippy::should_implement_trait)] // lending semantics, not an Iterator
    pub fn next(&mut self) -> Result<Option<&T>, TraversalExhaustedError> {
        let key = self.state.advance(self.tree)?;
        self.produced = true;
        Ok(self.tree.node(&key).datum.as_ref())
    }
    /// Removes the most recently produced node from the tree if it is a leaf.
    ///
    /// Returns `true` if the node was removed, `false` if it was left in place because it has at least one child. Either way, the produced position is consumed: calling `remove` again without an intervening `next` is an error.
    ///
    /// # Errors
    /// [`RemoveStateError`] if no position has been produced since the last removal.
    ///
    /// [`RemoveStateError`]: struct.RemoveStateError.html " "
    pub fn remove(&mut self) -> Result<bool, RemoveStateError> {
        if !self.produced {
            return Err(RemoveStateError);
        }
        self.produced = false;
        let key = self
            .state
            .current
            .clone()
            .expect("a position was produced, so the machine has a current key");
        if self.tree.remove_leaf(&key) {
            self.state.current_removed = true;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
impl<T, K, S> Debug for PreorderCursorMut<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreorderCursorMut")
            .field("remaining", &self.state.remaining)
            .field("produced", &self.produced)
            .finish()
    }
}
