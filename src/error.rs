//! Errors reported by the fallible (`try_*`) operations.

use thiserror::Error;

/// Everything that can go wrong when editing a [`Tree`][crate::Tree] or a
/// [`LinkedList`][crate::linked_list::LinkedList].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The value is already stored, so nothing was inserted.
    #[error("value is already present")]
    Duplicate,
    /// The value is not stored, so nothing was removed.
    #[error("value is not present")]
    NotFound,
    /// A subtree handed to [`Tree::with_root`][crate::Tree::with_root] breaks the ordering
    /// invariant.
    #[error("subtree values are not in strictly ascending order")]
    OutOfOrder,
}
