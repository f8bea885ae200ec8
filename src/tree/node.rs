//! State tree nodes.
//!
//! Uses arena-based allocation with index references (NodeId) so that a
//! child can point at its parent without shared ownership.

use serde::{Deserialize, Serialize};

use crate::rules::{GameResult, SearchState};

/// Index into the StateTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A state in the tree together with how it was reached.
///
/// Nodes are never modified after allocation.
#[derive(Clone, Debug)]
pub struct TreeNode<S> {
    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Action applied to the parent's state (None for root).
    pub action: Option<usize>,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// The state itself.
    pub state: S,

    /// Outcome of `state`, cached at creation.
    pub outcome: Option<GameResult>,
}

impl<S: SearchState> TreeNode<S> {
    /// Create a root node.
    pub fn root(state: S) -> Self {
        let outcome = state.outcome();
        Self {
            parent: NodeId::NONE,
            action: None,
            depth: 0,
            state,
            outcome,
        }
    }

    /// Create a node reached from `parent` by `action`.
    pub fn child(parent: NodeId, action: usize, depth: u16, state: S) -> Self {
        let outcome = state.outcome();
        Self {
            parent,
            action: Some(action),
            depth,
            state,
            outcome,
        }
    }

    /// Check if this is the root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Is this a terminal game state?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}
