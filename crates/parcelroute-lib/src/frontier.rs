//! Priority-ordered frontier of nodes awaiting processing.
//!
//! Each node is held at most once. Entries are ordered by ascending distance;
//! equal distances pop in the order the nodes were first inserted, which keeps
//! predecessor selection among equal-length paths deterministic.

use std::cmp::{Ordering, Reverse};

use priority_queue::PriorityQueue;

use crate::graph::NodeId;

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Distance first, then insertion sequence.
type Priority = Reverse<(FloatOrd, u64)>;

/// Node and the distance it is currently queued with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub distance: f64,
}

/// Min-ordered frontier with decrease-key support.
#[derive(Debug, Clone)]
pub struct Frontier {
    queue: PriorityQueue<NodeId, Priority>,
    next_sequence: u64,
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    /// Queue `node` at `distance`. Returns `false` if the node was already held,
    /// in which case its priority is left alone (use [`Frontier::reorder`]).
    pub fn insert(&mut self, node: NodeId, distance: f64) -> bool {
        if self.contains(node) {
            return false;
        }
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue
            .push(node, Reverse((FloatOrd(distance), sequence)));
        true
    }

    /// Move a held node forward after its distance decreased.
    ///
    /// Absent nodes and non-decreasing distances are ignored. The node keeps
    /// its original insertion sequence for tie-breaking.
    pub fn reorder(&mut self, node: NodeId, distance: f64) -> bool {
        let Some(&Reverse((FloatOrd(current), sequence))) = self.queue.get_priority(&node) else {
            return false;
        };
        if distance >= current {
            return false;
        }
        self.queue
            .change_priority(&node, Reverse((FloatOrd(distance), sequence)))
            .is_some()
    }

    /// Smallest entry without removing it.
    pub fn peek_min(&self) -> Option<FrontierEntry> {
        self.queue
            .peek()
            .map(|(&node, &Reverse((FloatOrd(distance), _)))| FrontierEntry { node, distance })
    }

    /// Remove and return the smallest entry.
    pub fn pop_min(&mut self) -> Option<FrontierEntry> {
        self.queue
            .pop()
            .map(|(node, Reverse((FloatOrd(distance), _)))| FrontierEntry { node, distance })
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.queue.get_priority(&node).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
