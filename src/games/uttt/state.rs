//! Ultimate Tic-Tac-Toe state implementation.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::{Board, Cell, MetaState, SubBoardOutcome, RAW_META_LEN};
use crate::core::square::{CELL_COUNT, SIDE, SUB_BOARD_COUNT, SUB_SIDE};
use crate::core::{Error, GameRng, Player, Result, Square};
use crate::rules::{ActionList, GameResult, LastMove, MetaBoardRule, OutcomeRule, SearchState};

/// A position in the game.
///
/// States are values: a child is a copy of its parent with one more stone,
/// so exploring one branch never disturbs another. The outcome is computed
/// once, when the move that produced the state is applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtttState<R = MetaBoardRule> {
    board: Board,
    meta: MetaState,
    turn: Player,
    move_count: u8,
    last_action: Option<u8>,
    result: Option<GameResult>,
    rule: R,
}

impl UtttState<MetaBoardRule> {
    /// Create an empty root state under the default meta-board rule.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rule(MetaBoardRule)
    }
}

impl Default for UtttState<MetaBoardRule> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: OutcomeRule> UtttState<R> {
    /// Side length of the board.
    pub const SIDE: usize = SIDE;

    /// Side length of a sub-board.
    pub const SUB_SIDE: usize = SUB_SIDE;

    /// Create an empty root state: no stones, every sub-board undecided,
    /// free choice of sub-board, X to move.
    #[must_use]
    pub fn with_rule(rule: R) -> Self {
        Self {
            board: Board::new(),
            meta: MetaState::new(),
            turn: Player::X,
            move_count: 0,
            last_action: None,
            result: None,
            rule,
        }
    }

    /// Label for this game and board size.
    #[must_use]
    pub fn class_repr() -> String {
        format!("UTTT_{}x{}", SIDE, SIDE)
    }

    // === Introspection ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn meta(&self) -> &MetaState {
        &self.meta
    }

    /// Raw grid: 0 empty, +1 X, -1 O.
    #[must_use]
    pub fn raw_board(&self) -> [[i8; SIDE]; SIDE] {
        self.board.to_raw()
    }

    /// Raw meta-state in the fixed 10-entry layout.
    #[must_use]
    pub fn raw_meta(&self) -> [i8; RAW_META_LEN] {
        self.meta.to_raw()
    }

    /// Player to move.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Number of stones placed since the root.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        u32::from(self.move_count)
    }

    /// Action that produced this state.
    #[must_use]
    pub fn last_action(&self) -> Option<usize> {
        self.last_action.map(usize::from)
    }

    #[must_use]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Terminal outcome, or `None` while the game continues.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.result
    }

    // === Legality ===

    /// Check whether `action` may be played, without changing anything.
    ///
    /// Checks, in order: the game is not over, the index is on the board,
    /// the cell is in the forced sub-board (if any), its sub-board is still
    /// undecided, and the cell is empty.
    pub fn check_action(&self, action: usize) -> Result<Square> {
        if self.result.is_some() {
            return Err(Error::GameOver);
        }

        let square = Square::from_index(action)?;
        let sub_board = square.sub_board();

        if let Some(forced) = self.meta.forced() {
            if forced != sub_board {
                return Err(Error::WrongSubBoard {
                    action,
                    sub_board,
                    forced,
                });
            }
        }

        if !self.meta.is_undecided(sub_board) {
            return Err(Error::SubBoardDecided { action, sub_board });
        }

        if !self.board.get(square).is_empty() {
            return Err(Error::CellOccupied { action });
        }

        Ok(square)
    }

    #[must_use]
    pub fn is_legal(&self, action: usize) -> bool {
        self.check_action(action).is_ok()
    }

    // === Move Application ===

    /// Place the mover's stone at `action`.
    ///
    /// On error the state is unchanged.
    pub fn apply(&mut self, action: usize) -> Result<()> {
        let square = self.check_action(action).map_err(|err| {
            trace!(action, %err, "rejected move");
            err
        })?;
        let sub_board = square.sub_board();
        let local = square.local();
        let mover = self.turn;

        // Taken from the pre-move meta-state.
        let mut forced = self.meta.is_undecided(local).then_some(local);

        self.board.set(square, Cell::Stone(mover));

        if let Some(outcome) = self.resolve_sub_board(sub_board) {
            debug!(sub_board, ?outcome, "sub-board decided");
            self.meta.set_outcome(sub_board, outcome);
            if forced == Some(sub_board) {
                forced = None;
            }
        }

        self.meta.set_forced(forced);
        self.turn = mover.opponent();
        self.move_count += 1;
        self.last_action = Some(action as u8);

        self.result = self.rule.evaluate(
            &self.board,
            &self.meta,
            Some(LastMove {
                square,
                player: mover,
            }),
        );
        if let Some(result) = self.result {
            debug!(?result, moves = self.move_count, "game decided");
        }

        Ok(())
    }

    /// Outcome of a sub-board after a stone landed in it.
    fn resolve_sub_board(&self, sub_board: u8) -> Option<SubBoardOutcome> {
        if let Some(winner) = self.board.sub_board_winner(sub_board) {
            Some(SubBoardOutcome::Won(winner))
        } else if self.board.sub_board_full(sub_board) {
            Some(SubBoardOutcome::Drawn)
        } else {
            None
        }
    }

    /// Create a child by applying `action` to a copy of this state.
    pub fn take_action(&self, action: usize) -> Result<Self>
    where
        R: Clone,
    {
        let mut child = self.clone();
        child.apply(action)?;
        Ok(child)
    }

    // === Enumeration ===

    /// Empty cells the next move may target.
    ///
    /// The forced sub-board's cells, or those of every undecided sub-board
    /// under free choice. Empty once the game is decided.
    #[must_use]
    pub fn candidate_actions(&self) -> ActionList {
        let mut actions = ActionList::new();
        if self.result.is_some() {
            return actions;
        }

        match self.meta.forced() {
            Some(forced) => self.push_empty_cells(forced, &mut actions),
            None => {
                for sub_board in self.meta.undecided() {
                    self.push_empty_cells(sub_board, &mut actions);
                }
            }
        }
        actions
    }

    fn push_empty_cells(&self, sub_board: u8, out: &mut ActionList) {
        let squares = (0..SUB_BOARD_COUNT as u8)
            .filter_map(|local| Square::from_sub_board(sub_board, local));
        out.extend(
            squares
                .filter(|&square| self.board.get(square).is_empty())
                .map(Square::index),
        );
    }

    /// Create a child by applying a uniformly random legal action.
    pub fn random_action(&self, rng: &mut GameRng) -> Result<Self>
    where
        R: Clone,
    {
        let actions = self.candidate_actions();
        let &action = rng.choose(&actions).ok_or(Error::NoLegalActions)?;
        self.take_action(action)
    }
}

impl<R: OutcomeRule + Clone> SearchState for UtttState<R> {
    const MAX_ACTIONS: usize = CELL_COUNT;
    const BOARD_SHAPE: (usize, usize) = (SIDE, SIDE);
    const EXTRA_INFO_LEN: usize = RAW_META_LEN;

    fn turn(&self) -> Player {
        self.turn
    }

    fn last_action(&self) -> Option<usize> {
        self.last_action.map(usize::from)
    }

    fn take_action(&self, action: usize) -> Result<Self> {
        UtttState::<R>::take_action(self, action)
    }

    fn outcome(&self) -> Option<GameResult> {
        self.result
    }

    fn legal_actions(&self) -> ActionList {
        self.candidate_actions()
    }

    fn random_action(&self, rng: &mut GameRng) -> Result<Self> {
        UtttState::<R>::random_action(self, rng)
    }
}
