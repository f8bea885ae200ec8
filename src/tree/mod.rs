//! Immutable parent chain for search drivers.
//!
//! A search driver explores many branches from one ancestor. `StateTree`
//! keeps every state it has created, each linked to its parent by index:
//!
//! - **Copy-on-branch**: `expand` copies the parent's state and applies one
//!   action to the copy
//! - **Append-only**: nodes are never modified or removed
//! - **Replayable**: `path` recovers the action sequence from the root
//!
//! ## Usage
//!
//! ```rust
//! use uttt_engine::core::GameRng;
//! use uttt_engine::games::uttt::UtttState;
//! use uttt_engine::tree::StateTree;
//!
//! let mut tree = StateTree::new(UtttState::new());
//! let centre = tree.expand(tree.root(), 40).unwrap();
//!
//! let mut rng = GameRng::new(42);
//! let reply = tree.expand_random(centre, &mut rng).unwrap();
//!
//! assert_eq!(tree.path(reply)[0], 40);
//! assert_eq!(tree.parent(reply), Some(centre));
//! ```

pub mod arena;
pub mod node;

pub use arena::{StateTree, TreeStats};
pub use node::{NodeId, TreeNode};
