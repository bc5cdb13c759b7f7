//! The open set: a min-heap of `(cell, priority)` entries.
//!
//! Entries are keyed by `(priority, insertion_order)`. Lower priorities pop
//! first; ties pop in the order they were pushed (FIFO). Because the engine
//! pushes neighbours left, right, up, down, FIFO ties follow that order too.
//!
//! The heap never updates or removes entries in place. A cell that is
//! improved while still pending simply gets another entry, and the engine
//! discards the outdated one when it surfaces.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tilepath_core::Cell;

/// One pending expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierEntry {
    pub cell: Cell,
    pub priority: u32,
    /// Monotonically increasing push counter used to break ties.
    seq: u64,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural order; wrapped in `Reverse` for the max-heap.
        self.priority
            .cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Priority queue of cells pending expansion.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    seq: u64,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `cell` at `priority`. Existing entries for the cell are kept.
    pub fn push(&mut self, cell: Cell, priority: u32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(FrontierEntry {
            cell,
            priority,
            seq,
        }));
    }

    /// Pop the entry with the lowest priority (ties broken FIFO).
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Whether no entries are pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of pending entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pending entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &FrontierEntry> {
        self.heap.iter().map(|Reverse(entry)| entry)
    }
}
