//! Frontier disciplines: FIFO queue, LIFO stack, and a priority queue with
//! deterministic insertion-order tie-breaking.
//!
//! Frontiers hold [`NodeId`]s only; the nodes themselves live in the
//! search call's [`crate::node::SearchTree`].

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::NodeId;

/// The open set of a search call.
///
/// `priority` is ignored by the FIFO and LIFO disciplines.
pub trait Frontier {
    /// Add a node. Every push counts toward the high-water mark.
    fn push(&mut self, id: NodeId, priority: u64);

    /// Remove the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    /// Current number of queued nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached.
    fn high_water(&self) -> u64;
}

fn bump_high_water(high_water: &mut u64, len: usize) {
    let len = len as u64;
    if len > *high_water {
        *high_water = len;
    }
}

/// First-in first-out queue (breadth-first order).
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
    high_water: u64,
}

impl FifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, id: NodeId, _priority: u64) {
        self.queue.push_back(id);
        bump_high_water(&mut self.high_water, self.queue.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// Last-in first-out stack (depth-first order).
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
    high_water: u64,
}

impl LifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, id: NodeId, _priority: u64) {
        self.stack.push(id);
        bump_high_water(&mut self.high_water, self.stack.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// The priority-queue ordering key: `(priority, sequence)`.
///
/// Lower priority first; equal priorities pop in insertion order because
/// `sequence` is a per-frontier counter that increases on every push. The
/// order is therefore total even when priorities collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub priority: u64,
    pub sequence: u64,
}

/// A frontier entry wrapping a node id with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest priority first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    id: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority queue with FIFO tie-breaking (greedy and A* order).
///
/// Entries are never updated in place: re-pushing a node for the same state
/// leaves the older entry queued, and it pops later with its stale priority.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
    high_water: u64,
}

impl PriorityFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the best entry together with its key.
    pub fn pop_with_key(&mut self) -> Option<(FrontierKey, NodeId)> {
        self.heap.pop().map(|e| (e.key.0, e.id))
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, id: NodeId, priority: u64) {
        let key = FrontierKey {
            priority,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            id,
        });
        bump_high_water(&mut self.high_water, self.heap.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.pop_with_key().map(|(_, id)| id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}
