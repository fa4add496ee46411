use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::Weight;

/// Min-priority frontier of `(vertex index, tentative distance)` entries,
/// backed by a binary heap.
///
/// There is no decrease-key: pushing a vertex again leaves its older entry
/// in place. Popped priorities are therefore advisory, and callers must
/// drop an entry whose priority is above the vertex's recorded distance.
/// Equal priorities come out in ascending index order.
#[derive(Debug)]
pub struct PriorityFrontier<W>
where
    W: Weight,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(OrderedFloat<W>, usize)>>,
}

impl<W> PriorityFrontier<W>
where
    W: Weight,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a new empty frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityFrontier {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if no entries are pending
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of pending entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds an entry in O(log n)
    pub fn push(&mut self, vertex: usize, priority: W) {
        self.heap.push(Reverse((OrderedFloat(priority), vertex)));
    }

    /// Removes and returns the entry with the smallest priority in O(log n)
    pub fn pop(&mut self) -> Option<(usize, W)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority.into_inner()))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        self.heap
            .peek()
            .map(|Reverse((priority, vertex))| (*vertex, priority.into_inner()))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<W> Default for PriorityFrontier<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}
