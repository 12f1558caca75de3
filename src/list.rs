//! A growable, index addressable list.
//!
//! [`DynamicList`] owns a single contiguous buffer and keeps track of the logical
//! length separately from the buffer's capacity. Appends grow the buffer by roughly
//! 1.5x when it fills up, which keeps [`push`](DynamicList::push) amortized O(1).
//!
//! # Capacity Notes
//!
//! The two shrinking operations deliberately behave differently:
//!
//! * [`clear`](DynamicList::clear) empties the list and swaps in a fresh buffer of
//!   [`DEFAULT_CAPACITY`] slots, regardless of how large the list had grown.
//! * [`split`](DynamicList::split) keeps a prefix of the list and shrinks the buffer
//!   to exactly that many slots.

use std::{cmp::Ordering, fmt};

use log::debug;

pub use crate::backing::DEFAULT_CAPACITY;
use crate::{backing::Backing, error::ListError, sort};

#[cfg(test)]
mod proptests;

/// A growable array list.
///
/// Elements live in `[0, len)` of an owned buffer whose capacity is reported by
/// [`capacity`](DynamicList::capacity). When an insertion needs more room the
/// capacity grows to `capacity + capacity / 2 + 1` (or to whatever is needed, if
/// that is larger).
///
/// Operations that take an index validate it before touching the list, and report a
/// bad index with [`ListError::IndexOutOfRange`] rather than panicking.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate dynamic_list;
/// let mut list = dynamic_list!["Tom", "Sam", "Jack"];
/// list.insert(1, "Anna").unwrap();
/// list.quick_sort(Ord::cmp);
/// assert_eq!(list.to_string(), "[Anna, Jack, Sam, Tom]");
/// assert!(list.is_sorted());
/// ```
pub struct DynamicList<T> {
    backing: Backing<T>,
}

impl<T> DynamicList<T> {
    /// Construct an empty list with room for [`DEFAULT_CAPACITY`] elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_list::list::{DynamicList, DEFAULT_CAPACITY};
    /// let list: DynamicList<usize> = DynamicList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), DEFAULT_CAPACITY);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Construct an empty list with room for exactly `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_list::list::DynamicList;
    /// let list: DynamicList<usize> = DynamicList::with_capacity(0);
    /// assert_eq!(list.capacity(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        DynamicList {
            backing: Backing::with_capacity(capacity),
        }
    }

    /// Get the number of elements in the list
    ///
    /// Time: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dynamic_list;
    /// let list = dynamic_list![1, 2, 3, 4, 5];
    /// assert_eq!(list.len(), 5);
    /// ```
    pub fn len(&self) -> usize {
        self.backing.len()
    }

    /// Checks whether the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of elements the list can hold before it has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_list::list::DynamicList;
    /// let mut list = DynamicList::new();
    /// for i in 0..11 {
    ///     list.push(i);
    /// }
    /// assert_eq!(list.capacity(), 16);
    /// ```
    pub fn capacity(&self) -> usize {
        self.backing.capacity()
    }

    /// Appends `value` to the end of the list.
    ///
    /// Time: amortized O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dynamic_list;
    /// let mut list = dynamic_list![1, 2];
    /// list.push(3);
    /// assert_eq!(list, dynamic_list![1, 2, 3]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.backing.push(value);
    }

    /// Inserts `value` at `index`, shifting everything after it one slot to the right.
    ///
    /// `index` may equal the length of the list, in which case this is the same as
    /// [`push`](DynamicList::push).
    ///
    /// Time: O(len - index)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dynamic_list;
    /// # use dynamic_list::error::ListError;
    /// let mut list = dynamic_list![1, 3];
    /// list.insert(1, 2).unwrap();
    /// list.insert(3, 4).unwrap();
    /// assert_eq!(list, dynamic_list![1, 2, 3, 4]);
    ///
    /// assert_eq!(
    ///     list.insert(10, 5),
    ///     Err(ListError::IndexOutOfRange { index: 10, len: 4 })
    /// );
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.len() {
            return Err(self.out_of_range(index));
        }

        self.backing.insert(index, value);
        Ok(())
    }

    /// Get a reference to the element at `index`.
    ///
    /// Time: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dynamic_list;
    /// let list = dynamic_list![1, 2, 3, 4, 5];
    /// assert_eq!(list.get(3), Ok(&4));
    /// assert!(list.get(1000).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.backing
            .as_slice()
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Replaces the element at `index` with `value`, handing back the old one.
    ///
    /// On error the list is untouched and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dynamic_list;
    /// let mut list = dynamic_list!["a", "b", "c"];
    /// assert_eq!(list.set(1, "z"), Ok("b"));
    /// assert_eq!(list, dynamic_list!["a", "z", "c"]);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        if index >= self.len() {
            return Err(self.out_of_range(index));
        }

        Ok(self.backing.replace(index, value))
    }

    /// Removes and returns the element at `index`, shifting everything after it one
    /// slot to the left. The capacity is left alone.
    ///
    /// Time: O(len - index)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dynamic_list;
    /// let mut list = dynamic_list![1, 2, 3];
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert_eq!(list, dynamic_list![2, 3]);
    /// assert!(list.remove(2).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.len() {
            return Err(self.out_of_range(index));
        }

        Ok(self.backing.remove(index))
    }

    /// Drops every element and resets the list to a fresh buffer of
    /// [`DEFAULT_CAPACITY`] slots.
    ///
    /// Any capacity the list had grown is released, so a cleared list behaves exactly
    /// like one returned from [`new`](DynamicList::new).
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_list::list::{DynamicList, DEFAULT_CAPACITY};
    /// let mut list: DynamicList<usize> = (0..100).collect();
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), DEFAULT_CAPACITY);
    /// ```
    pub fn clear(&mut self) {
        debug!(
            "clearing list of {} elements (capacity {})",
            self.len(),
            self.capacity()
        );
        self.backing.reset(DEFAULT_CAPACITY);
    }

    /// Truncates the list to its first `new_size` elements and shrinks the capacity to
    /// exactly `new_size`.
    ///
    /// Fails with [`ListError::InvalidSize`] if `new_size` is larger than the list.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dynamic_list;
    /// let mut list = dynamic_list![1, 2, 3, 4, 5];
    /// list.split(2).unwrap();
    /// assert_eq!(list, dynamic_list![1, 2]);
    /// assert_eq!(list.capacity(), 2);
    /// assert!(list.split(3).is_err());
    /// ```
    pub fn split(&mut self, new_size: usize) -> Result<(), ListError> {
        let len = self.len();
        if new_size > len {
            return Err(ListError::InvalidSize { new_size, len });
        }

        debug!("splitting list from {} to {} elements", len, new_size);
        self.backing.truncate_exact(new_size);
        Ok(())
    }

    /// Sorts the list in place with `compare`, using quicksort with a Lomuto partition.
    ///
    /// The pivot is always the last element of each range, so the sort is not stable,
    /// and input that is already sorted (or sorted in reverse) takes O(n²) time. Average
    /// time is O(n log n). Stack depth stays O(log n) in every case.
    ///
    /// Note that [`is_sorted`](DynamicList::is_sorted) ignores `compare` and always
    /// checks the natural order, so sorting with anything other than `Ord::cmp` will
    /// usually leave `is_sorted` returning `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dynamic_list;
    /// let mut list = dynamic_list![5, 4, 3, 2, 1];
    /// list.quick_sort(Ord::cmp);
    /// assert_eq!(list, dynamic_list![1, 2, 3, 4, 5]);
    ///
    /// list.quick_sort(|a, b| b.cmp(a));
    /// assert_eq!(list, dynamic_list![5, 4, 3, 2, 1]);
    /// assert!(!list.is_sorted());
    /// ```
    pub fn quick_sort<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::quick_sort(self.backing.as_mut_slice(), &mut compare);
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            len: self.len(),
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        self.backing.assert_invariants();
    }
}

impl<T: Ord> DynamicList<T> {
    /// Checks whether the elements are in non-decreasing natural order.
    ///
    /// This always uses `T`'s [`Ord`] implementation, never the comparator given to
    /// [`quick_sort`](DynamicList::quick_sort). Stops at the first adjacent pair that is
    /// out of order.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dynamic_list;
    /// assert!(dynamic_list![1, 2, 2, 3].is_sorted());
    /// assert!(!dynamic_list![2, 1].is_sorted());
    /// ```
    pub fn is_sorted(&self) -> bool {
        self.backing
            .as_slice()
            .windows(2)
            .all(|pair| pair[0] <= pair[1])
    }
}

impl<T> Default for DynamicList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicList<T> {
    fn clone(&self) -> Self {
        DynamicList {
            backing: self.backing.clone(),
        }
    }
}

// The capacity is bookkeeping, two lists are equal when their elements are
impl<T: PartialEq> PartialEq for DynamicList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.backing.as_slice() == other.backing.as_slice()
    }
}

impl<T: Eq> Eq for DynamicList<T> {}

impl<T> From<Vec<T>> for DynamicList<T> {
    fn from(vec: Vec<T>) -> Self {
        DynamicList {
            backing: Backing::from_vec(vec),
        }
    }
}

impl<T: Clone> From<&[T]> for DynamicList<T> {
    fn from(slice: &[T]) -> Self {
        DynamicList {
            backing: Backing::from_vec(slice.to_vec()),
        }
    }
}

impl<T> FromIterator<T> for DynamicList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.backing.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.backing.as_slice()).finish()
    }
}
