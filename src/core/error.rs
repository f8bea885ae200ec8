//! Error types for the engine.
//!
//! Illegal moves are ordinary, recoverable results: the state is left
//! untouched and the caller may retry with another action.

use thiserror::Error;

/// Main error type for the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("action {action} is outside the action space of {max_actions} actions")]
    ActionOutOfRange { action: usize, max_actions: usize },

    #[error("action {action} is in sub-board {sub_board}, but the next move is forced into sub-board {forced}")]
    WrongSubBoard {
        action: usize,
        sub_board: u8,
        forced: u8,
    },

    #[error("action {action} targets sub-board {sub_board}, which is already decided")]
    SubBoardDecided { action: usize, sub_board: u8 },

    #[error("action {action} targets an occupied cell")]
    CellOccupied { action: usize },

    #[error("game already over")]
    GameOver,

    #[error("no legal actions available")]
    NoLegalActions,

    #[error("invalid action name '{name}': {reason}")]
    InvalidActionName { name: String, reason: &'static str },

    #[error("invalid raw value {value} at index {index} ({context})")]
    InvalidRawValue {
        value: i8,
        index: usize,
        context: &'static str,
    },

    #[error("forced sub-board {forced} is not an undecided sub-board")]
    InvalidForcedSubBoard { forced: u8 },
}

impl Error {
    /// Check if this error is a rejected move (as opposed to an exhausted
    /// action space or a malformed input).
    #[must_use]
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            Error::ActionOutOfRange { .. }
                | Error::WrongSubBoard { .. }
                | Error::SubBoardDecided { .. }
                | Error::CellOccupied { .. }
                | Error::GameOver
        )
    }
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
