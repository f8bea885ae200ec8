//! Outcome rules and the search-driver contract.
//!
//! - `OutcomeRule` decides when a position is terminal
//! - `SearchState` is what tree search and playouts see of a game
//!
//! The game state calls into `OutcomeRule` after every move but never
//! interprets the rule set itself.

pub mod engine;
pub mod exact_five;
pub mod meta_board;
pub mod outcome;

pub use engine::{ActionList, SearchState};
pub use exact_five::ExactFiveRule;
pub use meta_board::MetaBoardRule;
pub use outcome::{GameResult, LastMove, OutcomeRule, RuleKind};
