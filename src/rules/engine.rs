//! Search-driver contract.
//!
//! Tree search and playout drivers consume a game only through
//! `SearchState`:
//! - Fixed action-space metadata
//! - Child creation by applying one action to a copy
//! - Terminal outcome
//! - Uniform random playout steps

use smallvec::SmallVec;

use super::outcome::GameResult;
use crate::core::{GameRng, Player, Result};

/// Action indices. Inline capacity covers a forced sub-board.
pub type ActionList = SmallVec<[usize; 9]>;

/// State interface for search drivers.
///
/// ## Implementation Notes
///
/// - `take_action`: Must leave `self` untouched, on success and on failure
/// - `outcome`: Return `None` if the game continues
/// - `legal_actions`: Return empty once `outcome` is `Some`
/// - `random_action`: Return `Error::NoLegalActions` rather than guessing an outcome
pub trait SearchState: Clone {
    /// Largest branching factor (one action per cell).
    const MAX_ACTIONS: usize;

    /// `(rows, columns)` of the board.
    const BOARD_SHAPE: (usize, usize);

    /// Bytes of auxiliary state exposed next to the board.
    const EXTRA_INFO_LEN: usize;

    /// Player to move.
    fn turn(&self) -> Player;

    /// Action that produced this state (`None` at the root).
    fn last_action(&self) -> Option<usize>;

    /// Create a child by applying `action` to a copy of this state.
    fn take_action(&self, action: usize) -> Result<Self>;

    /// Terminal outcome, or `None` while the game continues.
    fn outcome(&self) -> Option<GameResult>;

    /// All actions that `take_action` would accept.
    fn legal_actions(&self) -> ActionList;

    /// Create a child by applying a uniformly random legal action.
    fn random_action(&self, rng: &mut GameRng) -> Result<Self>;

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}
