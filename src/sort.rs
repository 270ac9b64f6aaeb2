//! Heap sort built on [`PriorityQueue`]
//!
//! Builds a queue from the input in O(n) and drains it with repeated
//! `remove_max`, for O(n log n) overall. The sort is not stable.
//!
//! # Example
//!
//! ```rust
//! use prioqueue::sort::{sort_ascending, sort_descending};
//! use prioqueue::Natural;
//!
//! assert_eq!(sort_descending(vec![2, 7, 1], Natural), vec![7, 2, 1]);
//! assert_eq!(sort_ascending(vec![2, 7, 1], Natural), vec![1, 2, 7]);
//! ```

use crate::priority_queue::PriorityQueue;
use crate::traits::{Compare, Reversed};

/// Sorts `elements` from greatest to least under `cmp`
pub fn sort_descending<T, C: Compare<T>>(elements: Vec<T>, cmp: C) -> Vec<T> {
    PriorityQueue::new(elements, cmp).into_sorted_vec()
}

/// Sorts `elements` from least to greatest under `cmp`
pub fn sort_ascending<T, C: Compare<T>>(elements: Vec<T>, cmp: C) -> Vec<T> {
    PriorityQueue::new(elements, Reversed(cmp)).into_sorted_vec()
}
