//! Default outcome rule: three-in-a-row on the meta-board.

use serde::{Deserialize, Serialize};

use super::outcome::{GameResult, LastMove, OutcomeRule};
use crate::board::{Board, MetaState};

/// Win by owning three sub-boards in a row, column or diagonal of the
/// 3x3 meta-board. Drawn sub-boards count for nobody.
///
/// With no line and no undecided sub-board left the game is a draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaBoardRule;

impl OutcomeRule for MetaBoardRule {
    fn evaluate(&self, _board: &Board, meta: &MetaState, _last_move: Option<LastMove>) -> Option<GameResult> {
        if let Some(winner) = meta.line_winner() {
            return Some(GameResult::Winner(winner));
        }
        meta.all_decided().then_some(GameResult::Draw)
    }
}
