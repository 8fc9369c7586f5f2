use super::{RemoveStateError, TraversalExhaustedError};
use crate::binary_tree::{BinaryTree, Node};
use alloc::vec::Vec;
use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
};
use granite::{DefaultStorage, Storage};

/// The iterative inorder machine, shared between the two cursor flavors.
///
/// `cursor` is the descent position, one step ahead of production; `current`
/// is the position most recently produced. The stack holds ancestors pushed
/// on the way down whose own production is pending — when the stack top *is*
/// the cursor, the descent beneath it is finished and it is produced next.
#[derive(Clone, Debug)]
struct InorderState<K>
where K: Clone + Debug + Eq,
{
    current: Option<K>,
    cursor: Option<K>,
    stack: Vec<K>,
    remaining: usize,
}
impl<K> InorderState<K>
where K: Clone + Debug + Eq,
{
    fn new<T, S>(tree: &BinaryTree<T, K, S>) -> Self
    where S: Storage<Element = Node<T, K>, Key = K>,
    {
        Self {
            current: None,
            cursor: tree.root_key().cloned(),
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
        let mut cursor = self
            .cursor
            .clone()
            .expect("positions remaining but no descent position");
        let produced = if self.stack.last() == Some(&cursor) {
            // The left subtree under the stack top is exhausted.
            self.stack
                .pop()
                .expect("the stack top was just inspected")
        } else {
            while let Some(left) = tree.node(&cursor).left.clone() {
                self.stack.push(cursor);
                cursor = left;
            }
            cursor
        };
        if let Some(right) = tree.node(&produced).right.clone() {
            cursor = right;
        } else if let Some(top) = self.stack.last() {
            cursor = top.clone();
        } else {
            cursor = produced.clone();
        }
        self.cursor = Some(cursor);
        self.current = Some(produced.clone());
        self.remaining -= 1;
        Ok(produced)
    }
}

/// A shared cursor which walks a binary tree in *inorder*: left subtree, then the node itself, then the right subtree.
///
/// Implements [`Iterator`] over the visited data, so the usual adapters apply. The item type is `Option<&T>` — the inner option is the node's datum, which may be absent.
///
/// Created by the [`inorder`] method on [`BinaryTree`].
///
/// [`Iterator`]: https://doc.rust-lang.org/core/iter/trait.Iterator.html " "
/// [`inorder`]: ../binary_tree/struct.BinaryTree.html#method.inorder " "
/// [`BinaryTree`]: ../binary_tree/struct.BinaryTree.html " "
pub struct InorderCursor<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a BinaryTree<T, K, S>,
    state: InorderState<K>,
}
impl<'a, T, K, S> InorderCursor<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    pub(crate) fn new(tree: &'a BinaryTree<T, K, S>) -> Self {
        Self {
            state: InorderState::new(tree),
            tree,
        }
    }
    /// Returns `true` if the cursor has positions left to produce, `false` otherwise.
    #[inline(always)]
    pub fn has_next(&self) -> bool {
        self.state.remaining > 0
    }
    /// Produces the datum at the next inorder position.
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
impl<'a, T, K, S> Iterator for InorderCursor<'a, T, K, S>
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
impl<T, K, S> ExactSizeIterator for InorderCursor<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, K, S> FusedIterator for InorderCursor<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, K, S> Clone for InorderCursor<'_, T, K, S>
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
impl<T, K, S> Debug for InorderCursor<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("InorderCursor")
            .field("remaining", &self.state.remaining)
            .finish()
    }
}

/// A mutating cursor which walks a binary tree in *inorder* and can remove leaves as it goes.
///
/// Unlike the shared [`InorderCursor`], this type does not implement [`Iterator`] — its `next` borrows the produced datum from the cursor itself, keeping the reference from outliving a subsequent [`remove`].
///
/// Created by the [`inorder_mut`] method on [`BinaryTree`].
///
/// [`InorderCursor`]: struct.InorderCursor.html " "
/// [`Iterator`]: https://doc.rust-lang.org/core/iter/trait.Iterator.html " "
/// [`remove`]: #method.remove " "
/// [`inorder_mut`]: ../binary_tree/struct.BinaryTree.html#method.inorder_mut " "
/// [`BinaryTree`]: ../binary_tree/struct.BinaryTree.html " "
pub struct InorderCursorMut<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a mut BinaryTree<T, K, S>,
    state: InorderState<K>,
    produced: bool,
}
impl<'a, T, K, S> InorderCursorMut<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    pub(crate) fn new(tree: &'a mut BinaryTree<T, K, S>) -> Self {
        Self {
            state: InorderState::new(tree),
            tree,
            produced: false,
        }
    }
    /// Returns `true` if the cursor has positions left to produce, `false` otherwise.
    #[inline(always)]
    pub fn has_next(&self) -> bool {
        self.state.remaining > 0
    }
    /// Produces the datum at the next inorder position.
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
        Ok(self.tree.remove_leaf(&key))
    }
}
impl<T, K, S> Debug for InorderCursorMut<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("InorderCursorMut")
            .field("remaining", &self.state.remaining)
            .field("produced", &self.produced)
            .finish()
    }
}
