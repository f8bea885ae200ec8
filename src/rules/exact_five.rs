//! Alternative outcome rule: exactly five stones in a row.

use serde::{Deserialize, Serialize};

use super::outcome::{GameResult, LastMove, OutcomeRule};
use crate::board::{Board, Cell, MetaState};

/// Row, column and the two diagonals, one sense each.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, -1), (1, 1)];

/// Stones counted per side before the scan stops. One more than the four
/// needed, so that overlines are seen as overlines.
const MAX_SCAN: isize = 5;

/// Win by placing a stone that completes exactly five in a row on the full
/// board. Six or more in a row do not win.
///
/// Only lines through the last placed stone are inspected. Without an exact
/// five the game is drawn once every sub-board is decided, as under
/// [`MetaBoardRule`](super::MetaBoardRule).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExactFiveRule;

impl ExactFiveRule {
    /// Consecutive stones of the last mover from the last square, along
    /// `(dr, dc)`, not counting the square itself.
    fn run_length(board: &Board, last: LastMove, dr: isize, dc: isize) -> isize {
        let row = last.square.row() as isize;
        let col = last.square.col() as isize;
        let stone = Cell::Stone(last.player);

        (1..=MAX_SCAN)
            .take_while(|&k| board.at(row + k * dr, col + k * dc) == Some(stone))
            .count() as isize
    }

    /// Check whether the last move made exactly five in a row.
    #[must_use]
    pub fn is_exact_five(board: &Board, last: LastMove) -> bool {
        DIRECTIONS.iter().any(|&(dr, dc)| {
            Self::run_length(board, last, dr, dc) + Self::run_length(board, last, -dr, -dc) == 4
        })
    }
}

impl OutcomeRule for ExactFiveRule {
    fn evaluate(&self, board: &Board, meta: &MetaState, last_move: Option<LastMove>) -> Option<GameResult> {
        if let Some(last) = last_move {
            if Self::is_exact_five(board, last) {
                return Some(GameResult::Winner(last.player));
            }
        }
        meta.all_decided().then_some(GameResult::Draw)
    }
}
