//! Owned storage for a [`DynamicList`](crate::list::DynamicList).
//!
//! The buffer keeps its own notion of capacity, separate from whatever the
//! allocator handed back. Growth always goes through [`Backing::ensure_capacity`],
//! so the reported capacity follows the list's growth policy exactly, and the
//! underlying allocation is always at least that large.

use log::trace;

/// Capacity of a freshly constructed (or cleared) list.
pub const DEFAULT_CAPACITY: usize = 10;

pub(crate) struct Backing<T> {
    // Slots `[0, elements.len())` are the live elements, nothing else is ever stored.
    elements: Vec<T>,
    capacity: usize,
}

/// Capacity after growing a buffer of `current` slots so that it can hold at
/// least `min_capacity` elements: roughly 1.5x, plus one so a zero sized
/// buffer still makes progress.
pub(crate) fn grown_capacity(current: usize, min_capacity: usize) -> usize {
    let grown = current.saturating_add(current >> 1).saturating_add(1);
    grown.max(min_capacity)
}

impl<T> Backing<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Backing {
            elements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adopts `elements` as the contents, with the capacity pinned to the length.
    pub(crate) fn from_vec(mut elements: Vec<T>) -> Self {
        elements.shrink_to_fit();
        let capacity = elements.len();
        Backing { elements, capacity }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.elements
    }

    #[inline(always)]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }

    pub(crate) fn ensure_capacity(&mut self, min_capacity: usize) {
        if min_capacity > self.capacity {
            let new_capacity = grown_capacity(self.capacity, min_capacity);

            trace!(
                "growing backing storage from {} to {} slots",
                self.capacity,
                new_capacity
            );

            // Moves the live elements into the larger allocation if the current one is too small
            self.elements
                .reserve_exact(new_capacity - self.elements.len());
            self.capacity = new_capacity;
        }
    }

    // Callers check bounds, these only keep the length/capacity bookkeeping straight.

    pub(crate) fn push(&mut self, value: T) {
        self.ensure_capacity(self.len() + 1);
        self.elements.push(value);
    }

    pub(crate) fn insert(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len());
        self.ensure_capacity(self.len() + 1);
        self.elements.insert(index, value);
    }

    pub(crate) fn remove(&mut self, index: usize) -> T {
        debug_assert!(index < self.len());
        self.elements.remove(index)
    }

    pub(crate) fn replace(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self.elements[index], value)
    }

    /// Drops every element and starts over with a new buffer of `capacity` slots.
    pub(crate) fn reset(&mut self, capacity: usize) {
        *self = Backing::with_capacity(capacity);
    }

    /// Drops everything past `new_len` and shrinks the buffer to exactly `new_len` slots.
    pub(crate) fn truncate_exact(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.len());
        self.elements.truncate(new_len);
        self.elements.shrink_to_fit();
        self.capacity = new_len;
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert!(self.elements.len() <= self.capacity);
        assert!(self.elements.capacity() >= self.capacity);
    }
}

impl<T: Clone> Clone for Backing<T> {
    fn clone(&self) -> Self {
        let mut elements = Vec::with_capacity(self.capacity);
        elements.extend_from_slice(&self.elements);
        Backing {
            elements,
            capacity: self.capacity,
        }
    }
}
