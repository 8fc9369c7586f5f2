//! Dynamic collection conformance, including the operations this crate's tree permanently rejects.
//!
//! The original interface the tree models is a general collection contract with far more surface than a binary tree can honestly support. Rather than claiming the whole contract and failing at runtime in surprising places, the [`Collection`] trait spells out, per operation, whether it is guaranteed or *permanently* rejected — rejection is part of the contract, not an omission, and is reported through [`UnsupportedOperationError`] instead of a panic.
//!
//! [`Collection`]: trait.Collection.html " "
//! [`UnsupportedOperationError`]: enum.UnsupportedOperationError.html " "

use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

/// The capability of acting as a dynamic collection of elements.
///
/// Implementors fall into two groups of members:
/// - *Guaranteed*: `len`, `is_empty`, `add`, `clear`, `contains`, `contains_all` and `remove` always perform their documented operation.
/// - *Permanently rejected*: `add_all`, `remove_all`, `retain_all` and `to_vec` always return [`UnsupportedOperationError`], regardless of collection state. Callers must not treat the error as transient.
///
/// [`UnsupportedOperationError`]: enum.UnsupportedOperationError.html " "
pub trait Collection {
    /// The type of the elements in the collection.
    type Item;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;
    /// Returns `true` if the collection contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Adds an element to the collection, returning `true` if the collection changed as a result.
    fn add(&mut self, item: Self::Item) -> bool;
    /// Removes every element from the collection.
    fn clear(&mut self);
    /// Returns `true` if the collection contains at least one element equal to `item`.
    fn contains(&self, item: &Self::Item) -> bool;
    /// Returns `true` if the collection contains at least one element equal to each *distinct* element of `items`.
    ///
    /// # Errors
    /// [`AbsentCollectionError`] if the argument collection is absent. An empty collection is present and trivially contained.
    ///
    /// [`AbsentCollectionError`]: struct.AbsentCollectionError.html " "
    fn contains_all<'a, I>(&self, items: Option<I>) -> Result<bool, AbsentCollectionError>
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self: 'a;
    /// Removes one element equal to `item` from the collection, returning `true` if the collection shrank as a result.
    fn remove(&mut self, item: &Self::Item) -> bool;

    /// Bulk insertion. *Permanently rejected.*
    ///
    /// # Errors
    /// Always [`UnsupportedOperationError::AddAll`].
    ///
    /// [`UnsupportedOperationError::AddAll`]: enum.UnsupportedOperationError.html#variant.AddAll " "
    fn add_all<I>(&mut self, items: I) -> Result<bool, UnsupportedOperationError>
    where I: IntoIterator<Item = Self::Item>;
    /// Bulk removal. *Permanently rejected.*
    ///
    /// # Errors
    /// Always [`UnsupportedOperationError::RemoveAll`].
    ///
    /// [`UnsupportedOperationError::RemoveAll`]: enum.UnsupportedOperationError.html#variant.RemoveAll " "
    fn remove_all<'a, I>(&mut self, items: I) -> Result<bool, UnsupportedOperationError>
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self: 'a;
    /// Bulk retention. *Permanently rejected.*
    ///
    /// # Errors
    /// Always [`UnsupportedOperationError::RetainAll`].
    ///
    /// [`UnsupportedOperationError::RetainAll`]: enum.UnsupportedOperationError.html#variant.RetainAll " "
    fn retain_all<'a, I>(&mut self, items: I) -> Result<bool, UnsupportedOperationError>
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self: 'a;
    /// Materialization into a contiguous buffer. *Permanently rejected.*
    ///
    /// # Errors
    /// Always [`UnsupportedOperationError::ToVec`].
    ///
    /// [`UnsupportedOperationError::ToVec`]: enum.UnsupportedOperationError.html#variant.ToVec " "
    fn to_vec(&self) -> Result<Vec<Self::Item>, UnsupportedOperationError>;
}

/// The error type returned by collection operations which the implementor permanently rejects.
///
/// The variant names the rejected operation. The rejection is unconditional — it does not depend on the collection's state and will not succeed on retry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnsupportedOperationError {
    /// Bulk insertion via `add_all`.
    AddAll,
    /// Bulk removal via `remove_all`.
    RemoveAll,
    /// Bulk retention via `retain_all`.
    RetainAll,
    /// Materialization via `to_vec`.
    ToVec,
}
impl Display for UnsupportedOperationError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::AddAll => "bulk insertion is not supported by this collection",
            Self::RemoveAll => "bulk removal is not supported by this collection",
            Self::RetainAll => "bulk retention is not supported by this collection",
            Self::ToVec => "materialization into a buffer is not supported by this collection",
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for UnsupportedOperationError {}

/// The error type returned when an operation required a collection argument but the argument was absent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AbsentCollectionError;
impl Display for AbsentCollectionError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("a collection argument was required but absent")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for AbsentCollectionError {}
