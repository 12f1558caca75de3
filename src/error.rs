use thiserror::Error;

/// Errors returned by the fallible operations on a [`DynamicList`](crate::list::DynamicList).
///
/// Every check happens before the list is touched, so an `Err` always leaves
/// the list exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// An index fell outside the range accepted by the operation.
    ///
    /// For [`get`](crate::list::DynamicList::get), [`set`](crate::list::DynamicList::set)
    /// and [`remove`](crate::list::DynamicList::remove) that range is `0..len`, for
    /// [`insert`](crate::list::DynamicList::insert) it is `0..=len`.
    #[error("Index: {index}, Size: {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A truncation target was larger than the current length.
    #[error("Invalid size: {new_size}")]
    InvalidSize { new_size: usize, len: usize },
}
