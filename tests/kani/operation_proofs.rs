//! Proofs for the contracts of individual operations
//!
//! Each harness builds a small queue from symbolic values and checks the
//! length change, the heap invariant, and the element returned.

#[cfg(kani)]
use prioqueue::{Natural, PriorityQueue};

/// Proof: add increments the length and keeps the heap valid
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_add_increments_len() {
    let mut queue = PriorityQueue::new(vec![kani::any::<u8>(), kani::any(), kani::any()], Natural);
    let initial_len = queue.len();

    queue.add(kani::any());

    assert!(queue.len() == initial_len + 1);
    assert!(queue.is_valid_heap());
}

/// Proof: construction establishes the heap invariant
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_new_builds_valid_heap() {
    let elements: [u8; 5] = kani::any();
    let queue = PriorityQueue::new(elements.to_vec(), Natural);

    assert!(queue.len() == 5);
    assert!(queue.is_valid_heap());
}

/// Proof: remove_max returns the maximum and decrements the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_remove_max_returns_maximum() {
    let elements: [u8; 4] = kani::any();
    let mut queue = PriorityQueue::new(elements.to_vec(), Natural);

    let max = queue.remove_max();

    let expected = elements.iter().copied().max();
    assert!(max.ok() == expected);
    assert!(queue.len() == 3);
    assert!(queue.is_valid_heap());
}

/// Proof: peek and remove_max agree
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_peek_matches_remove_max() {
    let elements: [u8; 3] = kani::any();
    let mut queue = PriorityQueue::new(elements.to_vec(), Natural);

    let peeked = queue.peek().ok().copied();
    assert!(queue.remove_max().ok() == peeked);
}

/// Proof: removing a present value shrinks the queue and keeps it valid
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_remove_present_value() {
    let elements: [u8; 4] = kani::any();
    let index: usize = kani::any();
    kani::assume(index < 4);

    let mut queue = PriorityQueue::new(elements.to_vec(), Natural);

    assert!(queue.remove(&elements[index]));
    assert!(queue.len() == 3);
    assert!(queue.is_valid_heap());
}

/// Proof: removing an absent value changes nothing
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_remove_absent_value() {
    let elements: [u8; 3] = kani::any();
    let value: u8 = kani::any();
    kani::assume(!elements.contains(&value));

    let mut queue = PriorityQueue::new(elements.to_vec(), Natural);
    let before = queue.as_slice().to_vec();

    assert!(!queue.remove(&value));
    assert!(queue.as_slice() == before.as_slice());
}
