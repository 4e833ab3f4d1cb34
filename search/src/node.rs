//! Search nodes, the per-call node arena, and path reconstruction.
//!
//! A search call owns exactly one [`SearchTree`] per search direction. Nodes
//! refer to their parent by [`NodeId`] (an index into the owning tree), so the
//! lineage is a forest of back-references with the arena as the sole owner.
//! Dropping the tree at the end of the call releases every node at once; only
//! the reconstructed action sequence leaves the call.

use std::fmt;
use std::ops::Deref;

/// Index of a node inside the [`SearchTree`] that created it.
///
/// Ids are dense and assigned in creation order, so a smaller id was always
/// created earlier. An id is only meaningful for the tree that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its tree (0 is the root).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// An immutable record of a visited state and how it was reached.
///
/// Invariants (enforced by the constructors, there are no mutators):
/// - `parent` and `action` are both present or both absent; only roots lack them.
/// - `depth` is the parent's depth + 1, root = 0.
/// - `path_cost` never decreases along a parent chain (costs are `u64`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S> {
    state: S,
    parent: Option<NodeId>,
    action: Option<String>,
    path_cost: u64,
    depth: u32,
}

impl<S> SearchNode<S> {
    /// Create a root node: no parent, no action, zero cost, depth 0.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            path_cost: 0,
            depth: 0,
        }
    }

    /// The state this node represents.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The node this one was expanded from (`None` for the root).
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The action label that produced this node (`None` for the root).
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Accumulated cost from the root.
    #[must_use]
    pub fn path_cost(&self) -> u64 {
        self.path_cost
    }

    /// Number of actions between the root and this node.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// A node borrowed from its tree together with its id.
///
/// This is what [`crate::contract::Problem::expand`] receives: children built
/// through [`NodeRef::child`] carry the correct parent link, depth, and
/// accumulated cost without the domain ever touching the arena.
#[derive(Debug)]
pub struct NodeRef<'a, S> {
    id: NodeId,
    node: &'a SearchNode<S>,
}

impl<S> Clone for NodeRef<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for NodeRef<'_, S> {}

impl<S> NodeRef<'_, S> {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Build a child reached from this node by `action` at `step_cost`.
    ///
    /// Cost accumulation saturates at `u64::MAX` instead of wrapping.
    #[must_use]
    pub fn child(&self, action: impl Into<String>, state: S, step_cost: u64) -> SearchNode<S> {
        SearchNode {
            state,
            parent: Some(self.id),
            action: Some(action.into()),
            path_cost: self.node.path_cost.saturating_add(step_cost),
            depth: self.node.depth.saturating_add(1),
        }
    }
}

impl<S> Deref for NodeRef<'_, S> {
    type Target = SearchNode<S>;

    fn deref(&self) -> &Self::Target {
        self.node
    }
}

/// Arena of every node created during one search call.
#[derive(Debug, Clone)]
pub struct SearchTree<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S> SearchTree<S> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Store a node and return its id.
    pub fn push(&mut self, node: SearchNode<S>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Look up a node minted by this tree.
    ///
    /// # Panics
    ///
    /// Panics if `id` was minted by a different tree and is out of range.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0]
    }

    /// Borrow a node together with its id (the form `expand` consumes).
    #[must_use]
    pub fn node_ref(&self, id: NodeId) -> NodeRef<'_, S> {
        NodeRef {
            id,
            node: self.get(id),
        }
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Action labels from the root to `id`, in root-to-node order.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<String> {
        reconstruct_path(self, id)
    }
}

impl<S> Default for SearchTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reconstruct the action sequence from the root of `tree` to `id`.
///
/// Walks parent links, so it runs in time linear in the node's depth. The
/// root contributes no action; the result length always equals the depth.
#[must_use]
pub fn reconstruct_path<S>(tree: &SearchTree<S>, id: NodeId) -> Vec<String> {
    let mut current = tree.get(id);
    let mut path = Vec::with_capacity(current.depth as usize);

    while let (Some(parent), Some(action)) = (current.parent, current.action.as_deref()) {
        path.push(action.to_string());
        current = tree.get(parent);
    }

    path.reverse();
    path
}
