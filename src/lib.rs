//! # uttt-engine
//!
//! An Ultimate Tic-Tac-Toe rules engine for tree search and playouts.
//!
//! ## Design Principles
//!
//! 1. **States Are Values**: Applying an action to a state produces a new
//!    state. Parents are never modified, so search drivers can branch freely.
//!
//! 2. **Rules Are Pluggable**: The game outcome is delegated to an
//!    `OutcomeRule`. The state only tracks stones, sub-board outcomes and the
//!    forced sub-board.
//!
//! 3. **Deterministic**: All randomness flows through a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Players, coordinates and naming, RNG, configuration, errors
//! - `board`: The 9x9 grid and the sub-board meta-state
//! - `rules`: Outcome rules and the `SearchState` contract
//! - `games`: The Ultimate Tic-Tac-Toe state
//! - `tree`: Append-only parent chain for search drivers
//! - `playout`: Random playouts and batch statistics

pub mod core;
pub mod board;
pub mod rules;
pub mod games;
pub mod tree;
pub mod playout;

// Re-export commonly used types
pub use crate::core::{
    action_index, action_name, EngineConfig, Error, GameRng, Player, Result, Square,
};

pub use crate::board::{Board, Cell, MetaState, SubBoardOutcome};

pub use crate::rules::{
    ActionList, ExactFiveRule, GameResult, LastMove, MetaBoardRule, OutcomeRule, RuleKind,
    SearchState,
};

pub use crate::games::uttt::UtttState;

pub use crate::tree::{NodeId, StateTree, TreeNode, TreeStats};

pub use crate::playout::{random_playout, run_playouts, PlayoutResult, PlayoutStats};
