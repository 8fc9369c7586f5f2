use super::{RemoveStateError, Side, TraversalExhaustedError};
use crate::binary_tree::{BinaryTree, Node};
use alloc::vec::Vec;
use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
};
use granite::{DefaultStorage, Storage};

/// The iterative postorder machine, shared between the two cursor flavors.
///
/// Two parallel stacks: `stack` holds the pending ancestors, `dirs` records
/// which child link each of them was entered through. An ancestor entered
/// through its left link whose right child exists is re-marked and probed
/// down the right; otherwise it is produced. The probe always lands on a
/// leaf, so every node is produced strictly after both of its subtrees —
/// the invariant `clear` relies on to peel the whole tree.
#[derive(Clone, Debug)]
struct PostorderState<K>
where K: Clone + Debug + Eq,
{
    current: Option<K>,
    stack: Vec<K>,
    dirs: Vec<Side>,
    remaining: usize,
}
impl<K> PostorderState<K>
where K: Clone + Debug + Eq,
{
    fn new<T, S>(tree: &BinaryTree<T, K, S>) -> Self
    where S: Storage<Element = Node<T, K>, Key = K>,
    {
        Self {
            current: None,
            stack: Vec::new(),
            dirs: Vec::new(),
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
        let top = (self.stack.last().cloned(), self.dirs.last().copied());
        let produced = if let (Some(top), Some(dir)) = top {
            let right = tree.node(&top).right.clone();
            match (dir, right) {
                (Side::Left, Some(right)) => {
                    *self
                        .dirs
                        .last_mut()
                        .expect("the direction stack top was just inspected") = Side::Right;
                    self.probe_down(tree, right)
                }
                _ => {
                    self.stack.pop();
                    self.dirs.pop();
                    top
                }
            }
        } else {
            // Both stacks are empty only before the first production; the
            // tree's own root is produced last and empties them for good.
            let root = tree
                .root_key()
                .cloned()
                .expect("positions remaining in an empty tree");
            self.probe_down(tree, root)
        };
        self.current = Some(produced.clone());
        self.remaining -= 1;
        Ok(produced)
    }
    /// Descends from `node` to the leaf produced soonest beneath it, pushing
    /// everything passed through: left links are exhausted first, and a
    /// single right step is taken whenever no left link remains.
    fn probe_down<T, S>(&mut self, tree: &BinaryTree<T, K, S>, mut node: K) -> K
    where S: Storage<Element = Node<T, K>, Key = K>,
    {
        loop {
            while let Some(left) = tree.node(&node).left.clone() {
                self.stack.push(node);
                self.dirs.push(Side::Left);
                node = left;
            }
            if let Some(right) = tree.node(&node).right.clone() {
                self.stack.push(node);
                self.dirs.push(Side::Right);
                node = right;
            } else {
                break node;
            }
        }
    }
}

/// A shared cursor which walks a binary tree in *postorder*: both subtrees before the node itself, left subtree before right.
///
/// Implements [`Iterator`] over the visited data, so the usual adapters apply. The item type is `Option<&T>` — the inner option is the node's datum, which may be absent.
///
/// Created by the [`postorder`] method on [`BinaryTree`].
///
/// [`Iterator`]: https://doc.rust-lang.org/core/iter/trait.Iterator.html " "
/// [`postorder`]: ../binary_tree/struct.BinaryTree.html#method.postorder " "
/// [`BinaryTree`]: ../binary_tree/struct.BinaryTree.html " "
pub struct PostorderCursor<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a BinaryTree<T, K, S>,
    state: PostorderState<K>,
}
impl<'a, T, K, S> PostorderCursor<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    pub(crate) fn new(tree: &'a BinaryTree<T, K, S>) -> Self {
        Self {
            state: PostorderState::new(tree),
            tree,
        }
    }
    /// Returns `true` if the cursor has positions left to produce, `false` otherwise.
    #[inline(always)]
    pub fn has_next(&self) -> bool {
        self.state.remaining > 0
    }
    /// Produces the datum at the next postorder position.
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
impl<'a, T, K, S> Iterator for PostorderCursor<'a, T, K, S>
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
impl<T, K, S> ExactSizeIterator for PostorderCursor<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, K, S> FusedIterator for PostorderCursor<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, K, S> Clone for PostorderCursor<'_, T, K, S>
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
impl<T, K, S> Debug for PostorderCursor<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostorderCursor")
            .field("remaining", &self.state.remaining)
            .finish()
    }
}

/// A mutating cursor which walks a binary tree in *postorder* and can remove leaves as it goes.
///
/// Postorder produces every node after the whole subtree beneath it, so repeatedly calling `next` and [`remove`] in lockstep peels the tree leaf by leaf until nothing is left — which is exactly how the tree's [`clear`] is implemented.
///
/// Unlike the shared [`PostorderCursor`], this type does not implement [`Iterator`] — its `next` borrows the produced datum from the cursor itself, keeping the reference from outliving a subsequent [`remove`].
///
/// Created by the [`postorder_mut`] method on [`BinaryTree`].
///
/// [`PostorderCursor`]: struct.PostorderCursor.html " "
/// [`Iterator`]: https://doc.rust-lang.org/core/iter/trait.Iterator.html " "
/// [`remove`]: #method.remove " "
/// [`clear`]: ../binary_tree/struct.BinaryTree.html#method.clear " "
/// [`postorder_mut`]: ../binary_tree/struct.BinaryTree.html#method.postorder_mut " "
/// [`BinaryTree`]: ../binary_tree/struct.BinaryTree.html " "
pub struct PostorderCursorMut<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a mut BinaryTree<T, K, S>,
    state: PostorderState<K>,
    produced: bool,
}
impl<'a, T, K, S> PostorderCursorMut<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    pub(crate) fn new(tree: &'a mut BinaryTree<T, K, S>) -> Self {
        Self {
            state: PostorderState::new(tree),
            tree,
            produced: false,
        }
    }
    /// Returns `true` if the cursor has positions left to produce, `false` otherwise.
    #[inline(always)]
    pub fn has_next(&self) -> bool {
        self.state.remaining > 0
    }
    /// Produces the datum at the next postorder position.
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
impl<T, K, S> Debug for PostorderCursorMut<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostorderCursorMut")
            .field("remaining", &self.state.remaining)
            .field("produced", &self.produced)
            .finish()
    }
}
