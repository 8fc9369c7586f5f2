use core::{fmt::Debug, num::NonZeroIsize};
use granite::{ListStorage, MoveFix};

/// A node of a binary tree.
///
/// Nodes are created and destroyed by the tree internally; the type is only publicly exposed so that storages' generic arguments could be specified.
///
/// The datum is optional — the original decoration model allows undecorated nodes, which render as an empty string and compare equal only to other undecorated nodes. Both child links are independently optional, and the parent link is a plain back-key carrying no ownership.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T, K = usize>
where K: Clone + Debug + Eq,
{
    pub(crate) datum: Option<T>,
    pub(crate) parent: Option<K>,
    pub(crate) left: Option<K>,
    pub(crate) right: Option<K>,
}
impl<T, K> Node<T, K>
where K: Clone + Debug + Eq,
{
    #[inline(always)]
    pub(crate) fn new(
        datum: Option<T>,
        parent: Option<K>,
        left: Option<K>,
        right: Option<K>,
    ) -> Self {
        Self {
            datum,
            parent,
            left,
            right,
        }
    }
    /// Returns `true` if the node has no children.
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
impl<T> MoveFix for Node<T, usize> {
    unsafe fn fix_shift<S>(storage: &mut S, shifted_from: usize, shifted_by: NonZeroIsize)
    where S: ListStorage<Element = Self>,
    {
        let fix_starting_from = if shifted_by.get() > 0 {
            shifted_from + 1 // If an insertion happened, ignore the new element
        } else {
            shifted_from
        };
        if fix_starting_from >= storage.len() {
            return;
        }
        for i in fix_starting_from..storage.len() {
            let old_index = (i as isize - shifted_by.get()) as usize; // undo the shift to find the old index
            Self::fix_move(storage, old_index, i);
        }
    }

    unsafe fn fix_move<S>(storage: &mut S, previous_index: usize, current_index: usize)
    where S: ListStorage<Element = Self>,
    {
        let (parent, left, right) = {
            // SAFETY: index validity is guaranteed for `current_index`.
            let node = storage.get_unchecked(current_index);
            (node.parent, node.left, node.right)
        };
        if let Some(parent_index) = parent {
            // SAFETY: parent links always point to occupied slots
            let parent = storage.get_unchecked_mut(parent_index);
            if parent.left == Some(previous_index) {
                parent.left = Some(current_index);
            } else if parent.right == Some(previous_index) {
                parent.right = Some(current_index);
            } else {
                unreachable!("parent's children don't match the moved node's old index");
            }
        }
        // Our nodes link both ways, so the children's back-links need the
        // same treatment as the parent's child link.
        if let Some(child) = left {
            // SAFETY: child links always point to occupied slots
            storage.get_unchecked_mut(child).parent = Some(current_index);
        }
        if let Some(child) = right {
            // SAFETY: as above
            storage.get_unchecked_mut(child).parent = Some(current_index);
        }
    }
}
