//! Ultimate Tic-Tac-Toe.
//!
//! A 9x9 board split into nine 3x3 sub-boards:
//! - A stone's position inside its sub-board picks the sub-board the
//!   opponent must play in next
//! - A sub-board is decided by a three-in-a-row inside it, or drawn when full
//! - A move that would send the opponent to a decided sub-board gives them a
//!   free choice instead
//! - The game outcome comes from the state's `OutcomeRule`

mod state;

pub use state::UtttState;
