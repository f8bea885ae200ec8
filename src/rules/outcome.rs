//! Terminal outcomes and the rule that decides them.
//!
//! Two rule sets exist and they are different games:
//!
//! - [`MetaBoardRule`]: three sub-boards in a row won by the same player.
//! - [`ExactFiveRule`]: exactly five stones in a row on the full board.
//!
//! A deployment uses exactly one of them. Pick the unit type as the state's
//! type parameter for a compile-time choice, or [`RuleKind`] to select it
//! from configuration.

use serde::{Deserialize, Serialize};

use super::exact_five::ExactFiveRule;
use super::meta_board::MetaBoardRule;
use crate::board::{Board, MetaState};
use crate::core::{Player, Square};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Signed value: +1 X wins, -1 O wins, 0 draw.
    #[must_use]
    pub fn value(&self) -> i8 {
        match self {
            GameResult::Winner(p) => p.sign(),
            GameResult::Draw => 0,
        }
    }

    /// Reward from a player's perspective: 1 win, 0.5 draw, 0 loss.
    #[must_use]
    pub fn reward_for(&self, player: Player) -> f64 {
        match self {
            GameResult::Winner(p) if *p == player => 1.0,
            GameResult::Winner(_) => 0.0,
            GameResult::Draw => 0.5,
        }
    }
}

/// The move that produced the position being evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastMove {
    pub square: Square,
    pub player: Player,
}

/// Terminal-outcome rule.
///
/// Called once after every applied move. Returns `None` while the game
/// continues.
pub trait OutcomeRule {
    fn evaluate(&self, board: &Board, meta: &MetaState, last_move: Option<LastMove>) -> Option<GameResult>;
}

/// Outcome rule selected at runtime from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    #[default]
    MetaBoard,
    ExactFive,
}

impl OutcomeRule for RuleKind {
    fn evaluate(&self, board: &Board, meta: &MetaState, last_move: Option<LastMove>) -> Option<GameResult> {
        match self {
            RuleKind::MetaBoard => MetaBoardRule.evaluate(board, meta, last_move),
            RuleKind::ExactFive => ExactFiveRule.evaluate(board, meta, last_move),
        }
    }
}
