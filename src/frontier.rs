//! Min-priority queue used by the best-first searches.
//!
//! [Frontier] only supports pushing an item with a priority and popping the
//! smallest one. Decrease-key is not supported: a search that finds a cheaper
//! route to an item pushes it again, and the stale copy is discarded by the
//! caller when it is popped after the item has already been closed.
//!
//! Entries with equal priority pop in insertion order. Every push is stamped with
//! a sequence number that acts as the secondary key, so the expansion order of a
//! search is reproducible and does not depend on how [BinaryHeap] happens to
//! arrange equal elements.
use num_traits::float::TotalOrder;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct SmallestPriorityHolder<T, P> {
    priority: P,
    sequence: u64,
    item: T,
}

impl<T, P: TotalOrder> Eq for SmallestPriorityHolder<T, P> {}

impl<T, P: TotalOrder> PartialEq for SmallestPriorityHolder<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: TotalOrder> PartialOrd for SmallestPriorityHolder<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: TotalOrder> Ord for SmallestPriorityHolder<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap pops its maximum, we want the smallest
        // priority and, among equals, the oldest entry.
        match other.priority.total_cmp(&self.priority) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

pub struct Frontier<T, P> {
    heap: BinaryHeap<SmallestPriorityHolder<T, P>>,
    next_sequence: u64,
}

impl<T, P: TotalOrder + Copy> Frontier<T, P> {
    pub fn new() -> Frontier<T, P> {
        Frontier {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: P) {
        self.heap.push(SmallestPriorityHolder {
            priority,
            sequence: self.next_sequence,
            item,
        });
        self.next_sequence += 1;
    }

    /// Removes the entry with the smallest priority, oldest first among ties.
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.heap.pop().map(|holder| (holder.item, holder.priority))
    }

    /// Number of queued entries, stale duplicates included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T, P: TotalOrder + Copy> Default for Frontier<T, P> {
    fn default() -> Self {
        Frontier::new()
    }
}
