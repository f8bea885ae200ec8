//! Board model: the 9x9 stone grid and the sub-board meta-state.
//!
//! The grid is the raw occupancy. The meta-state is derived incrementally
//! from it: a sub-board outcome is re-evaluated only when a stone lands in
//! that sub-board.

pub mod grid;
pub mod lines;
pub mod meta;

pub use grid::{Board, Cell};
pub use lines::{line_winner, WINNING_LINES};
pub use meta::{MetaState, SubBoardOutcome, RAW_META_LEN, RAW_UNDECIDED};
