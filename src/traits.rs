//! Comparator trait and error type shared by the priority queue
//!
//! This module provides:
//!
//! - [`Compare`]: a three-way comparator over element values
//! - [`Natural`] and [`Reversed`]: ready-made comparators
//! - [`QueueEmpty`]: the error returned when reading from an empty queue
//!
//! Any closure `Fn(&T, &T) -> Ordering` is a [`Compare<T>`], so most callers
//! never need to name a comparator type:
//!
//! ```rust
//! use prioqueue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new(vec!["bb", "a", "ccc"], |a: &&str, b: &&str| {
//!     a.len().cmp(&b.len())
//! });
//! assert_eq!(queue.remove_max(), Ok("ccc"));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Error returned by [`peek`](crate::PriorityQueue::peek) and
/// [`remove_max`](crate::PriorityQueue::remove_max) when the queue holds no elements
///
/// This is an expected condition, not a fault: callers are meant to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueueEmpty;

impl fmt::Display for QueueEmpty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue is empty")
    }
}

impl std::error::Error for QueueEmpty {}

/// A three-way comparator used for every priority decision in the heap
///
/// Implementations must be pure and deterministic, and must describe a total
/// order that stays the same for the lifetime of the heap using it. The heap
/// keeps the element comparing greatest at its root.
pub trait Compare<T> {
    /// Compares `a` with `b`, returning `Greater` when `a` has higher priority
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their [`Ord`] implementation
///
/// With this comparator the queue behaves like `std::collections::BinaryHeap`:
/// the largest element comes out first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts another comparator
///
/// Wrapping the comparator of a max-heap in `Reversed` turns it into a min-heap.
///
/// ```rust
/// use prioqueue::{Natural, PriorityQueue, Reversed};
///
/// let mut queue = PriorityQueue::new(vec![5, 1, 3], Reversed(Natural));
/// assert_eq!(queue.remove_max(), Ok(1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T, C: Compare<T>> Compare<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
