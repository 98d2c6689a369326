//! Priority queue of candidate contacts.
//!
//! The frontier never updates an entry in place. Every successful relaxation
//! pushes a fresh `(arrival, contact)` entry, and older entries for the same
//! contact stay in the heap until they surface, at which point the selection
//! step recognises them as stale (the contact is already finalized) and
//! drops them.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::domain::{ContactId, DtnTime};

/// A candidate contact with the arrival time it was queued at.
///
/// Ordered by arrival, then by contact id so that ties pop deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierEntry {
    pub arrival: DtnTime,
    pub contact: ContactId,
}

/// Min-priority queue of frontier entries.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `contact` at `arrival`. Existing entries for it are left alone.
    pub fn push(&mut self, arrival: DtnTime, contact: ContactId) {
        self.heap.push(Reverse(FrontierEntry { arrival, contact }));
    }

    /// Remove and return the entry with the earliest arrival.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Look at the earliest entry without removing it.
    #[cfg(test)]
    pub fn peek(&self) -> Option<&FrontierEntry> {
        self.heap.peek().map(|Reverse(entry)| entry)
    }

    /// Number of queued entries, stale ones included.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
