//! Reached set: state key -> node id of the first (or cheapest) node known
//! for that state within one search call.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::node::{NodeId, SearchTree};

/// Mapping from deduplication key to the node that currently owns the state.
///
/// Two update rules are offered, one per strategy family:
/// - [`ReachedSet::insert_first`]: first-come wins, no cost comparison
///   (breadth-first, depth-first, bidirectional).
/// - [`ReachedSet::is_improvement`] + [`ReachedSet::replace`]: take over the
///   key when the new node has a strictly lower path cost (greedy, A*).
#[derive(Debug, Clone)]
pub struct ReachedSet<K> {
    entries: HashMap<K, NodeId>,
}

impl<K: Hash + Eq> ReachedSet<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Record `key -> id` unless `key` is already reached.
    ///
    /// Returns `false` (and leaves the existing entry) on a duplicate.
    pub fn insert_first(&mut self, key: K, id: NodeId) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(id);
                true
            }
        }
    }

    /// Whether a node costing `path_cost` should take over `key`: the key is
    /// unreached, or its current node costs strictly more.
    ///
    /// Recorded ids must belong to `tree`.
    #[must_use]
    pub fn is_improvement<S>(&self, key: &K, path_cost: u64, tree: &SearchTree<S>) -> bool {
        self.entries
            .get(key)
            .is_none_or(|&incumbent| path_cost < tree.get(incumbent).path_cost())
    }

    /// Record `key -> id` unconditionally, returning the replaced id.
    pub fn replace(&mut self, key: K, id: NodeId) -> Option<NodeId> {
        self.entries.insert(key, id)
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<NodeId> {
        self.entries.get(key).copied()
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct states reached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Hash + Eq> Default for ReachedSet<K> {
    fn default() -> Self {
        Self::new()
    }
}
