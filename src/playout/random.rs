//! Uniform random playouts.

use tracing::trace;

use crate::core::{GameRng, Result};
use crate::rules::{GameResult, SearchState};

/// How a single playout ended.
#[derive(Clone, Debug)]
pub struct PlayoutResult<S> {
    /// Terminal outcome.
    pub result: GameResult,

    /// Moves played from the starting state.
    pub plies: u32,

    /// The terminal state.
    pub final_state: S,
}

/// Play uniformly random legal moves from `start` until the game ends.
///
/// A terminal `start` finishes immediately with zero plies. A non-terminal
/// state without legal actions is an engine fault and is reported as
/// `Error::NoLegalActions`.
pub fn random_playout<S: SearchState>(start: &S, rng: &mut GameRng) -> Result<PlayoutResult<S>> {
    let mut state = start.clone();
    let mut plies = 0;

    loop {
        if let Some(result) = state.outcome() {
            trace!(plies, ?result, "playout finished");
            return Ok(PlayoutResult {
                result,
                plies,
                final_state: state,
            });
        }

        state = state.random_action(rng)?;
        plies += 1;
    }
}
