//! Recursive quicksort with a Lomuto partition.
//!
//! The pivot is always the last element of the range being partitioned. That
//! keeps the swap sequence fully deterministic for a given input, but it also
//! means already sorted (or reverse sorted) input hits the quadratic worst
//! case. Only the smaller side of each pivot is recursed into, the larger one
//! is handled by looping, so the stack stays O(log n) deep even then.

use std::cmp::Ordering;

/// Sorts `elements` in place according to `compare`. Not stable.
pub(crate) fn quick_sort<T, F>(mut elements: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while elements.len() >= 2 {
        let pivot = partition(elements, compare);
        let (left, right) = std::mem::take(&mut elements).split_at_mut(pivot);
        // right[0] is the pivot, already in its final place
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left, compare);
            elements = right;
        } else {
            quick_sort(right, compare);
            elements = left;
        }
    }
}

/// Partitions around the last element and returns the pivot's final index.
///
/// Everything before the returned index compares `<=` the pivot, everything
/// after it compares `>`.
pub(crate) fn partition<T, F>(elements: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let high = elements.len() - 1;
    let mut store = 0;

    for j in 0..high {
        if compare(&elements[j], &elements[high]) != Ordering::Greater {
            elements.swap(store, j);
            store += 1;
        }
    }

    elements.swap(store, high);
    store
}
