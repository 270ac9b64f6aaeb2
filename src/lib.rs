//! Binary Heap Priority Queue for Rust
//!
//! This crate provides [`PriorityQueue`], an array-backed binary max-heap
//! ordered by a caller-supplied comparator.
//!
//! # Features
//!
//! - **Comparator-ordered**: any `Fn(&T, &T) -> Ordering`, or the [`Natural`] and
//!   [`Reversed`] comparators, decides priority
//! - **O(n) construction** from an existing `Vec`
//! - **O(log n)** `add` and `remove_max`, **O(1)** `peek`
//! - **Removal by value** using the element type's own equality
//! - **Heap sort** helpers in [`sort`]
//!
//! Reading from an empty queue returns [`QueueEmpty`] instead of panicking.
//!
//! # Example
//!
//! ```rust
//! use prioqueue::{PriorityQueue, QueueEmpty};
//!
//! let mut queue = PriorityQueue::new(vec![3, 1, 4, 1, 5], |a: &i32, b: &i32| a.cmp(b));
//! queue.add(9);
//!
//! assert_eq!(queue.peek(), Ok(&9));
//! assert!(queue.remove(&4));
//! assert_eq!(queue.remove_max(), Ok(9));
//! assert_eq!(queue.remove_max(), Ok(5));
//! assert_eq!(queue.len(), 3);
//!
//! queue.clear();
//! assert_eq!(queue.remove_max(), Err(QueueEmpty));
//! ```
//!
//! The queue is not synchronized. Wrap it in a `Mutex` to share it between threads.

pub mod priority_queue;
pub mod sort;
pub mod traits;

// Re-export the main types for convenience
pub use priority_queue::{DrainMax, PriorityQueue};
pub use traits::{Compare, Natural, QueueEmpty, Reversed};
