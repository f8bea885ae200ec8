//! Random playouts for simulation-based evaluation.
//!
//! A playout repeatedly applies `SearchState::random_action` until the
//! position is terminal. `run_playouts` aggregates a batch into win counts
//! and rewards, forking the RNG once per playout.

pub mod random;
pub mod stats;

pub use random::{random_playout, PlayoutResult};
pub use stats::{run_playouts, PlayoutStats};
