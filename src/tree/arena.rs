//! Arena-based state tree.
//!
//! Uses a flat `Vec<TreeNode>` with index-based references. Nodes are only
//! ever appended, so every parent stays exactly as it was when its children
//! were created.

use tracing::trace;

use super::node::{NodeId, TreeNode};
use crate::core::{GameRng, Result};
use crate::rules::SearchState;

/// Append-only tree of states linked to their parents.
#[derive(Clone, Debug)]
pub struct StateTree<S> {
    /// All nodes in the tree.
    nodes: Vec<TreeNode<S>>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl<S: SearchState> StateTree<S> {
    /// Create a new tree with a root node.
    pub fn new(root: S) -> Self {
        Self::with_capacity(root, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(root: S, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(TreeNode::root(root));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    ///
    /// Panics if the ID did not come from this tree.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &TreeNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get the state stored at a node.
    #[inline]
    #[must_use]
    pub fn state(&self, id: NodeId) -> &S {
        &self.get(id).state
    }

    /// Parent of a node, `None` for the root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.get(id).parent;
        (!parent.is_none()).then_some(parent)
    }

    fn alloc(&mut self, node: TreeNode<S>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a child of `parent` by applying `action` to a copy of its
    /// state.
    ///
    /// An illegal action leaves the tree unchanged.
    pub fn expand(&mut self, parent: NodeId, action: usize) -> Result<NodeId> {
        let node = self.get(parent);
        let state = node.state.take_action(action)?;
        let depth = node.depth + 1;
        let id = self.alloc(TreeNode::child(parent, action, depth, state));
        trace!(%parent, %id, action, depth, "expanded");
        Ok(id)
    }

    /// Create a child of `parent` by applying a uniformly random legal
    /// action.
    pub fn expand_random(&mut self, parent: NodeId, rng: &mut GameRng) -> Result<NodeId> {
        let node = self.get(parent);
        let state = node.state.random_action(rng)?;
        let depth = node.depth + 1;
        // Every successfully created child records its action.
        let action = state.last_action().unwrap_or_default();
        let id = self.alloc(TreeNode::child(parent, action, depth, state));
        trace!(%parent, %id, action, depth, "expanded at random");
        Ok(id)
    }

    /// Actions from the root to `id`, in play order.
    #[must_use]
    pub fn path(&self, id: NodeId) -> Vec<usize> {
        let mut actions = Vec::with_capacity(self.get(id).depth as usize);
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            actions.extend(self.get(current).action);
            current = parent;
        }
        actions.reverse();
        actions
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true: the root always exists).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            node_count: self.nodes.len(),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
            terminal_count: self.nodes.iter().filter(|n| n.is_terminal()).count(),
        }
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}

/// Statistics about the state tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of terminal nodes.
    pub terminal_count: usize,
}
