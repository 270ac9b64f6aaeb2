//! Binary max-heap priority queue
//!
//! [`PriorityQueue`] stores its elements in a `Vec` laid out as an implicit
//! binary tree: the children of index `i` live at `2i + 1` and `2i + 2`. The
//! element comparing greatest under the queue's comparator sits at index 0.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `new`        | O(n)       |
//! | `add`        | O(log n)   |
//! | `peek`       | O(1)       |
//! | `remove_max` | O(log n)   |
//! | `remove`     | O(n)       |
//! | `len`        | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use prioqueue::{PriorityQueue, QueueEmpty};
//!
//! let mut queue = PriorityQueue::new(vec![3, 1, 4], |a: &i32, b: &i32| a.cmp(b));
//! queue.add(5);
//!
//! assert_eq!(queue.peek(), Ok(&5));
//! assert!(queue.remove(&3));
//! assert_eq!(queue.remove_max(), Ok(5));
//! assert_eq!(queue.remove_max(), Ok(4));
//! assert_eq!(queue.remove_max(), Ok(1));
//! assert_eq!(queue.remove_max(), Err(QueueEmpty));
//! ```

use std::fmt;
use std::iter::FusedIterator;

use log::trace;

use crate::traits::{Compare, Natural, QueueEmpty};

/// A binary max-heap ordered by a caller-supplied comparator
///
/// Elements that compare equal come out in no particular order.
#[derive(Clone)]
pub struct PriorityQueue<T, C = Natural> {
    /// Heap-ordered storage: `elements[i]` is never less than its children
    elements: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Builds a queue from `elements`, taking ownership of the vector
    ///
    /// The heap is built bottom-up in O(n). An empty vector is allowed.
    pub fn new(elements: Vec<T>, cmp: C) -> Self {
        let mut queue = Self { elements, cmp };
        queue.build_heap();
        trace!("built priority queue from {} elements", queue.len());
        queue
    }

    /// Creates an empty queue ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            elements: Vec::new(),
            cmp,
        }
    }

    /// Adds `value` to the queue
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn add(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Returns the greatest element without removing it
    ///
    /// # Errors
    /// Returns [`QueueEmpty`] if the queue holds no elements.
    pub fn peek(&self) -> Result<&T, QueueEmpty> {
        self.elements.first().ok_or(QueueEmpty)
    }

    /// Removes and returns the greatest element
    ///
    /// The last element takes the root's place and is sifted down.
    ///
    /// # Errors
    /// Returns [`QueueEmpty`] if the queue holds no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn remove_max(&mut self) -> Result<T, QueueEmpty> {
        let mut root = self.elements.pop().ok_or(QueueEmpty)?;
        if !self.elements.is_empty() {
            std::mem::swap(&mut root, &mut self.elements[0]);
            self.sift_down(0);
        }
        Ok(root)
    }

    /// Removes the first element equal to `value`
    ///
    /// Equality is `T`'s own [`PartialEq`], not the comparator: among elements
    /// with the same priority only an equal one is removed. Returns `false` and
    /// leaves the queue untouched when nothing matches.
    ///
    /// # Time Complexity
    /// O(n) to find the element, O(log n) to remove it.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(index) = self.elements.iter().position(|e| e == value) else {
            trace!("remove: no matching element among {}", self.len());
            return false;
        };
        trace!("remove: matched element at index {}", index);

        // The matched element is moved to the root regardless of order, then
        // evicted as if it were the maximum. The match guarantees the queue is
        // non-empty, so the extraction below cannot fail; keep this order.
        self.force_bubble_up(index);
        let _ = self.remove_max();
        true
    }

    /// Returns true if every parent compares greater than or equal to its children
    pub fn is_valid_heap(&self) -> bool {
        (1..self.elements.len()).all(|child| {
            let parent = (child - 1) / 2;
            self.cmp
                .compare(&self.elements[parent], &self.elements[child])
                .is_ge()
        })
    }

    /// Consumes the queue, returning its elements from greatest to least
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(max) = self.remove_max() {
            sorted.push(max);
        }
        sorted
    }

    /// Returns an iterator that removes elements from greatest to least
    ///
    /// Elements not consumed by the iterator stay in the queue.
    pub fn drain_max(&mut self) -> DrainMax<'_, T, C> {
        DrainMax { queue: self }
    }

    fn build_heap(&mut self) {
        for index in (0..=self.elements.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move element at index up while it compares greater than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self
                .cmp
                .compare(&self.elements[parent], &self.elements[index])
                .is_lt()
            {
                self.elements.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// A child replaces its parent only when strictly greater, and the right
    /// child only wins against the left when strictly greater.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < len
                && self
                    .cmp
                    .compare(&self.elements[left], &self.elements[largest])
                    .is_gt()
            {
                largest = left;
            }
            if right < len
                && self
                    .cmp
                    .compare(&self.elements[right], &self.elements[largest])
                    .is_gt()
            {
                largest = right;
            }

            if largest != index {
                self.elements.swap(index, largest);
                index = largest;
            } else {
                break;
            }
        }
    }

    /// Swap element at index with its ancestors until it reaches the root,
    /// ignoring the comparator
    fn force_bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            self.elements.swap(index, parent);
            index = parent;
        }
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Returns true if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Removes every element
    pub fn clear(&mut self) {
        trace!("clearing {} elements", self.len());
        self.elements.clear();
    }

    /// Iterates over the elements in heap order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements in heap order (not sorted)
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the queue, returning its elements in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns the comparator ordering this queue
    pub fn comparator(&self) -> &C {
        &self.cmp
    }
}

impl<T: Ord> PriorityQueue<T, Natural> {
    /// Builds a queue ordered by `T`'s [`Ord`] implementation
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::new(elements, Natural)
    }
}

impl<T, C: Compare<T> + Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: Compare<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`PriorityQueue::drain_max`]
pub struct DrainMax<'a, T, C> {
    queue: &'a mut PriorityQueue<T, C>,
}

impl<T, C: Compare<T>> Iterator for DrainMax<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.remove_max().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for DrainMax<'_, T, C> {}

impl<T, C: Compare<T>> FusedIterator for DrainMax<'_, T, C> {}
