use super::Node;
use crate::{
    collection::{AbsentCollectionError, Collection, UnsupportedOperationError},
    traversal::{
        InorderCursor, InorderCursorMut, PostorderCursor, PostorderCursorMut, PreorderCursor,
        PreorderCursorMut, Side,
    },
};
use alloc::vec::Vec;
use core::{
    fmt::{self, Debug, Display, Formatter},
    hash::{BuildHasher, Hash, Hasher},
};
use granite::{DefaultStorage, ListStorage, SparseStorage, SparseStorageSlot, Storage};

/// A decorated binary tree.
///
/// See the [module-level documentation] for more.
///
/// # Storage requirements
/// Leaf removal asks the backing storage to drop a single slot and assumes that the keys of all *other* elements stay valid afterwards — the traversal machinery and the parent/child links hold keys across removals. Sparse and slot-based storages satisfy this; a plain shifting `Vec` does not, which is why the default is a [sparse `Vec`][`SparseVec`] and no dense-`Vec` alias is provided.
///
/// [module-level documentation]: index.html " "
/// [`SparseVec`]: https://docs.rs/granite/*/granite/type.SparseVec.html " "
#[derive(Copy, Clone, Debug)]
pub struct BinaryTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    storage: S,
    root: Option<K>,
    len: usize,
}
impl<T, K, S> BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty binary tree.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::BinaryTree;
    /// // The turbofish is needed to state that we are using the default storage method instead
    /// // of asking the compiler to infer it, which would be impossible.
    /// let tree = BinaryTree::<u32>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.to_string(), "()");
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
            len: 0,
        }
    }
    /// Creates an empty binary tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Returns the number of nodes in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }
    /// Returns `true` if the tree contains no nodes, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.len == 0
    }
    /// Returns the amount of nodes the tree can hold without requiring a memory allocation.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    /// Reserves capacity for at least `additional` more nodes to be inserted in the tree.
    #[inline(always)]
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional)
    }
    /// Shrinks the capacity of the storage as much as possible.
    #[inline(always)]
    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }

    /// Adds a node decorated with `datum` to the tree.
    ///
    /// The new node becomes the root; the former tree becomes the *left* subtree of the new root; the right subtree of the new root is empty. Always returns `true` — the signature matches the [`Collection`] contract, which reports whether the collection changed.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::BinaryTree;
    /// let mut tree = BinaryTree::<u32>::new();
    /// assert!(tree.add(Some(1)));
    /// assert!(tree.add(Some(2)));
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.to_string(), "( 2 ( 1 () () ) () )");
    /// ```
    ///
    /// [`Collection`]: ../collection/trait.Collection.html " "
    pub fn add(&mut self, datum: Option<T>) -> bool {
        let old_root = self.root.take();
        let key = self
            .storage
            .add(Node::new(datum, None, old_root.clone(), None));
        if let Some(old_root) = &old_root {
            self.node_mut(old_root).parent = Some(key.clone());
        }
        self.root = Some(key);
        self.len += 1;
        true
    }
    /// Adds a node decorated with `datum` to the tree, mirroring [`add`].
    ///
    /// The new node becomes the root; the left subtree of the new root is empty; the former tree becomes the *right* subtree of the new root. Always returns `true`.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::BinaryTree;
    /// let mut tree = BinaryTree::<u32>::new();
    /// tree.add(Some(1));
    /// tree.alternate_add(Some(2));
    /// assert_eq!(tree.to_string(), "( 2 () ( 1 () () ) )");
    /// ```
    ///
    /// [`add`]: #method.add " "
    pub fn alternate_add(&mut self, datum: Option<T>) -> bool {
        let old_root = self.root.take();
        let key = self
            .storage
            .add(Node::new(datum, None, None, old_root.clone()));
        if let Some(old_root) = &old_root {
            self.node_mut(old_root).parent = Some(key.clone());
        }
        self.root = Some(key);
        self.len += 1;
        true
    }
    /// Builds a tree from a root datum and up to two donor trees.
    ///
    /// The new root is decorated with `datum`; the donors become its left and right subtrees and are consumed in the process. An absent or empty donor leaves the corresponding side empty.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::BinaryTree;
    /// let mut left = BinaryTree::<&str>::new();
    /// left.add(Some("L"));
    /// let mut right = BinaryTree::<&str>::new();
    /// right.add(Some("R"));
    ///
    /// let tree = BinaryTree::from_root_and_two_trees(Some("root"), Some(left), Some(right));
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.to_string(), "( root ( L () () ) ( R () () ) )");
    /// ```
    pub fn from_root_and_two_trees(
        datum: Option<T>,
        left: Option<Self>,
        right: Option<Self>,
    ) -> Self {
        let mut tree = Self::new();
        let root = tree.storage.add(Node::new(datum, None, None, None));
        tree.root = Some(root.clone());
        tree.len = 1;
        if let Some(donor) = left {
            tree.graft(donor, &root, Side::Left);
        }
        if let Some(donor) = right {
            tree.graft(donor, &root, Side::Right);
        }
        tree
    }
    /// Moves every node of `donor` into `self`, hanging the donor's root under `parent_key` on the given side.
    ///
    /// The donor's nodes are hollowed out rather than removed, since removal could perturb the keys of the donor's remaining nodes on some storages; the husk is dropped whole.
    fn graft(&mut self, mut donor: Self, parent_key: &K, side: Side) {
        let donor_root = if let Some(root) = donor.root.take() {
            root
        } else {
            return;
        };
        // Donor key to re-create, its new parent's key, which link to hang off.
        let mut work: Vec<(K, K, Side)> = Vec::new();
        work.push((donor_root, parent_key.clone(), side));
        while let Some((donor_key, parent, side)) = work.pop() {
            let (datum, left, right) = {
                let node = donor.node_mut(&donor_key);
                (node.datum.take(), node.left.take(), node.right.take())
            };
            let key = self
                .storage
                .add(Node::new(datum, Some(parent.clone()), None, None));
            match side {
                Side::Left => self.node_mut(&parent).left = Some(key.clone()),
                Side::Right => self.node_mut(&parent).right = Some(key.clone()),
            }
            self.len += 1;
            if let Some(left) = left {
                work.push((left, key.clone(), Side::Left));
            }
            if let Some(right) = right {
                work.push((right, key, Side::Right));
            }
        }
    }

    /// Returns `true` if the tree contains at least one node whose datum equals `datum`.
    ///
    /// An absent datum matches only nodes decorated with nothing. The scan is a preorder traversal.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::BinaryTree;
    /// let mut tree = BinaryTree::<u32>::new();
    /// tree.add(Some(7));
    /// tree.add(None);
    /// assert!(tree.contains(Some(&7)));
    /// assert!(tree.contains(None));
    /// assert!(!tree.contains(Some(&8)));
    /// ```
    pub fn contains(&self, datum: Option<&T>) -> bool
    where T: PartialEq,
    {
        self.preorder().any(|d| d == datum)
    }
    /// Removes one *leaf* node whose datum equals `datum`, returning `true` if the tree shrank as a result.
    ///
    /// The scan is a preorder traversal which keeps going past matches that are not leaves — only a leaf match is ever detached. Returns `false` if no removable match exists, even when the datum itself is present on a branch.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::BinaryTree;
    /// let mut tree = BinaryTree::<u32>::new();
    /// tree.add(Some(5));
    /// tree.add(Some(6));
    /// tree.add(Some(5));
    ///
    /// // Both the root and the deepest node hold 5, but only the deepest is a leaf.
    /// assert!(tree.remove(Some(&5)));
    /// assert_eq!(tree.to_string(), "( 5 ( 6 () () ) () )");
    /// ```
    pub fn remove(&mut self, datum: Option<&T>) -> bool
    where T: PartialEq,
    {
        let mut cursor = self.preorder_mut();
        while cursor.has_next() {
            let matched = match cursor.next() {
                Ok(d) => d == datum,
                Err(..) => break,
            };
            if matched && matches!(cursor.remove(), Ok(true)) {
                return true;
            }
        }
        false
    }
    /// Removes every node from the tree.
    ///
    /// Driven by a mutating postorder cursor: both subtrees of a node are peeled before the node itself, so every position is a leaf by the time it is produced.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::BinaryTree;
    /// let mut tree = BinaryTree::<u32>::new();
    /// for i in 0..4 {
    ///     tree.add(Some(i));
    /// }
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.to_string(), "()");
    /// ```
    pub fn clear(&mut self) {
        let mut cursor = self.postorder_mut();
        while cursor.has_next() {
            if cursor.next().is_err() {
                break;
            }
            let _ = cursor.remove();
        }
    }

    /// Returns a shared preorder cursor over the tree.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::BinaryTree;
    /// let mut left = BinaryTree::<u32>::new();
    /// left.add(Some(2));
    /// let mut right = BinaryTree::<u32>::new();
    /// right.add(Some(3));
    /// let tree = BinaryTree::from_root_and_two_trees(Some(1), Some(left), Some(right));
    ///
    /// let order: Vec<_> = tree.preorder().map(|datum| datum.copied()).collect();
    /// assert_eq!(order, [Some(1), Some(2), Some(3)]);
    /// ```
    #[inline(always)]
    pub fn preorder(&self) -> PreorderCursor<'_, T, K, S> {
        PreorderCursor::new(self)
    }
    /// Returns a mutating preorder cursor over the tree.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::BinaryTree;
    /// let mut tree = BinaryTree::<u32>::new();
    /// tree.add(Some(1));
    /// tree.add(Some(2));
    ///
    /// let mut cursor = tree.preorder_mut();
    /// while cursor.has_next() {
    ///     let matched = cursor.next().ok().flatten() == Some(&1);
    ///     if matched {
    ///         assert_eq!(cursor.remove(), Ok(true));
    ///     }
    /// }
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[inline(always)]
    pub fn preorder_mut(&mut self) -> PreorderCursorMut<'_, T, K, S> {
        PreorderCursorMut::new(self)
    }
    /// Returns a shared inorder cursor over the tree.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::BinaryTree;
    /// let mut left = BinaryTree::<u32>::new();
    /// left.add(Some(2));
    /// let mut right = BinaryTree::<u32>::new();
    /// right.add(Some(3));
    /// let tree = BinaryTree::from_root_and_two_trees(Some(1), Some(left), Some(right));
    ///
    /// let order: Vec<_> = tree.inorder().map(|datum| datum.copied()).collect();
    /// assert_eq!(order, [Some(2), Some(1), Some(3)]);
    /// ```
    #[inline(always)]
    pub fn inorder(&self) -> InorderCursor<'_, T, K, S> {
        InorderCursor::new(self)
    }
    /// Returns a mutating inorder cursor over the tree.
    #[inline(always)]
    pub fn inorder_mut(&mut self) -> InorderCursorMut<'_, T, K, S> {
        InorderCursorMut::new(self)
    }
    /// Returns a shared postorder cursor over the tree.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::BinaryTree;
    /// let mut left = BinaryTree::<u32>::new();
    /// left.add(Some(2));
    /// let mut right = BinaryTree::<u32>::new();
    /// right.add(Some(3));
    /// let tree = BinaryTree::from_root_and_two_trees(Some(1), Some(left), Some(right));
    ///
    /// let order: Vec<_> = tree.postorder().map(|datum| datum.copied()).collect();
    /// assert_eq!(order, [Some(2), Some(3), Some(1)]);
    /// ```
    #[inline(always)]
    pub fn postorder(&self) -> PostorderCursor<'_, T, K, S> {
        PostorderCursor::new(self)
    }
    /// Returns a mutating postorder cursor over the tree.
    #[inline(always)]
    pub fn postorder_mut(&mut self) -> PostorderCursorMut<'_, T, K, S> {
        PostorderCursorMut::new(self)
    }
    /// Returns a cursor over the tree in the container's canonical order, which is preorder.
    #[inline(always)]
    pub fn iter(&self) -> PreorderCursor<'_, T, K, S> {
        self.preorder()
    }

    /// Computes the tree's order-sensitive signature hash with the supplied hasher factory.
    ///
    /// The fold is `code = 29 * code + datum_hash`, seeded at 47, fed one preorder and one inorder stream in lockstep; a node decorated with nothing contributes only the multiplication. Trees which compare equal produce equal signatures under the same `BuildHasher`. All arithmetic wraps.
    ///
    /// This is the legacy scalar form of the [`Hash`] implementation, which should be preferred for hashing into standard collections.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::BinaryTree;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let state = RandomState::new();
    /// let mut one = BinaryTree::<u32>::new();
    /// one.add(Some(3));
    /// let mut two = BinaryTree::<u32>::new();
    /// two.add(Some(3));
    /// assert_eq!(one.signature_hash(&state), two.signature_hash(&state));
    /// ```
    ///
    /// [`Hash`]: https://doc.rust-lang.org/core/hash/trait.Hash.html " "
    pub fn signature_hash<H>(&self, hasher: &H) -> u64
    where
        T: Hash,
        H: BuildHasher,
    {
        let hash_datum = |datum: &T| {
            let mut h = hasher.build_hasher();
            datum.hash(&mut h);
            h.finish()
        };
        let mut code: u64 = 47;
        for (pre, ino) in self.preorder().zip(self.inorder()) {
            code = code.wrapping_mul(29);
            if let Some(datum) = pre {
                code = code.wrapping_add(hash_datum(datum));
            }
            code = code.wrapping_mul(29);
            if let Some(datum) = ino {
                code = code.wrapping_add(hash_datum(datum));
            }
        }
        code
    }

    #[inline]
    pub(crate) fn node(&self, key: &K) -> &Node<T, K> {
        self.storage
            .get(key)
            .expect("tree structure referenced a key not present in the storage")
    }
    #[inline]
    pub(crate) fn node_mut(&mut self, key: &K) -> &mut Node<T, K> {
        self.storage
            .get_mut(key)
            .expect("tree structure referenced a key not present in the storage")
    }
    #[inline(always)]
    pub(crate) fn root_key(&self) -> Option<&K> {
        self.root.as_ref()
    }
    /// Detaches the node at `key` if it is a leaf, returning whether the tree shrank.
    ///
    /// The only removal primitive in the crate — all cursor-driven removal funnels through here, so the link surgery and size bookkeeping live in one place.
    pub(crate) fn remove_leaf(&mut self, key: &K) -> bool {
        let (is_leaf, parent) = {
            let node = self.node(key);
            (node.is_leaf(), node.parent.clone())
        };
        if !is_leaf {
            return false;
        }
        if let Some(parent_key) = parent {
            let parent = self.node_mut(&parent_key);
            if parent.left.as_ref() == Some(key) {
                parent.left = None;
            } else if parent.right.as_ref() == Some(key) {
                parent.right = None;
            } else {
                unreachable!("parent's child links don't include the removed leaf");
            }
        } else {
            self.root = None;
        }
        self.storage.remove(key);
        self.len -= 1;
        true
    }

    fn fmt_subtree(&self, key: Option<&K>, f: &mut Formatter<'_>) -> fmt::Result
    where T: Display,
    {
        if let Some(key) = key {
            let node = self.node(key);
            f.write_str("( ")?;
            if let Some(datum) = &node.datum {
                write!(f, "{}", datum)?;
            }
            f.write_str(" ")?;
            self.fmt_subtree(node.left.as_ref(), f)?;
            f.write_str(" ")?;
            self.fmt_subtree(node.right.as_ref(), f)?;
            f.write_str(" )")
        } else {
            f.write_str("()")
        }
    }
}
impl<T, S> BinaryTree<T, usize, SparseStorage<Node<T, usize>, S>>
where S: ListStorage<Element = SparseStorageSlot<Node<T, usize>>>,
{
    /// Returns the number of holes in the sparse backing storage.
    ///
    /// Holes are slots vacated by removal and kept for reuse so that the keys of the surviving nodes stay stable; later insertions fill them back in.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::BinaryTree;
    /// let mut tree = BinaryTree::<u32>::new();
    /// tree.add(Some(1));
    /// tree.add(Some(2));
    /// assert_eq!(tree.num_holes(), 0);
    ///
    /// tree.remove(Some(&1));
    /// assert_eq!(tree.num_holes(), 1);
    /// assert!(!tree.is_dense());
    ///
    /// // Insertion reuses the hole.
    /// tree.add(Some(3));
    /// assert_eq!(tree.num_holes(), 0);
    /// ```
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.storage.num_holes()
    }
    /// Returns `true` if there are no holes in the sparse backing storage, `false` otherwise.
    #[inline(always)]
    pub fn is_dense(&self) -> bool {
        self.storage.is_dense()
    }
}
impl<T, K, S> Display for BinaryTree<T, K, S>
where
    T: Display,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Renders the tree in its parenthesized textual form.
    ///
    /// An empty subtree renders as `()`; a node renders as `( <datum> <left> <right> )` with single spaces as separators, where an absent datum prints as the empty string.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_subtree(self.root.as_ref(), f)
    }
}
impl<T, K, K2, S, S2> PartialEq<BinaryTree<T, K2, S2>> for BinaryTree<T, K, S>
where
    T: PartialEq,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    S2: Storage<Element = Node<T, K2>, Key = K2>,
    K2: Clone + Debug + Eq,
{
    /// Compares the trees structurally *and* by content, not by storage layout.
    ///
    /// Both trees are walked with a preorder and an inorder cursor in lockstep; equality requires the sizes and all four streams to agree, which pins down shape and data in one linear pass. The weakness of the combined-signature technique is inherited knowingly: with repeated data values, differently shaped trees can in unusual configurations still agree on both streams.
    fn eq(&self, other: &BinaryTree<T, K2, S2>) -> bool {
        if self.len != other.len {
            return false;
        }
        let pre = self.preorder().zip(other.preorder());
        let ino = self.inorder().zip(other.inorder());
        for ((pre_a, pre_b), (ino_a, ino_b)) in pre.zip(ino) {
            if pre_a != pre_b || ino_a != ino_b {
                return false;
            }
        }
        true
    }
}
impl<T, K, S> Eq for BinaryTree<T, K, S>
where
    T: Eq,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, K, S> Hash for BinaryTree<T, K, S>
where
    T: Hash,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Hashes the exact two traversal streams the equality comparison consumes, so equal trees hash equal.
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for (pre, ino) in self.preorder().zip(self.inorder()) {
            pre.hash(state);
            ino.hash(state);
        }
    }
}
impl<T, K, S> Default for BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty binary tree.
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<'a, T, K, S> IntoIterator for &'a BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = Option<&'a T>;
    type IntoIter = PreorderCursor<'a, T, K, S>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.preorder()
    }
}
impl<T, K, S> Collection for BinaryTree<T, K, S>
where
    T: PartialEq,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = Option<T>;

    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn add(&mut self, item: Option<T>) -> bool {
        self.add(item)
    }
    #[inline(always)]
    fn clear(&mut self) {
        self.clear()
    }
    #[inline(always)]
    fn contains(&self, item: &Option<T>) -> bool {
        self.contains(item.as_ref())
    }
    fn contains_all<'a, I>(&self, items: Option<I>) -> Result<bool, AbsentCollectionError>
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self: 'a,
    {
        let items = items.ok_or(AbsentCollectionError)?;
        Ok(items.into_iter().all(|item| self.contains(item.as_ref())))
    }
    #[inline(always)]
    fn remove(&mut self, item: &Option<T>) -> bool {
        self.remove(item.as_ref())
    }

    fn add_all<I>(&mut self, _items: I) -> Result<bool, UnsupportedOperationError>
    where I: IntoIterator<Item = Option<T>>,
    {
        Err(UnsupportedOperationError::AddAll)
    }
    fn remove_all<'a, I>(&mut self, _items: I) -> Result<bool, UnsupportedOperationError>
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self: 'a,
    {
        Err(UnsupportedOperationError::RemoveAll)
    }
    fn retain_all<'a, I>(&mut self, _items: I) -> Result<bool, UnsupportedOperationError>
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self: 'a,
    {
        Err(UnsupportedOperationError::RetainAll)
    }
    fn to_vec(&self) -> Result<Vec<Option<T>>, UnsupportedOperationError> {
        Err(UnsupportedOperationError::ToVec)
    }
}
