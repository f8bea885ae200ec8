//! Aggregate statistics over batches of random playouts.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::random::random_playout;
use crate::core::{GameRng, Player, Result};
use crate::rules::{GameResult, SearchState};

/// Statistics collected over a batch of playouts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayoutStats {
    /// Playouts completed.
    pub playouts: u32,

    pub x_wins: u32,

    pub o_wins: u32,

    pub draws: u32,

    /// Sum of playout lengths.
    pub total_plies: u64,

    /// Total time spent (microseconds).
    pub time_us: u64,
}

impl PlayoutStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished playout.
    pub fn record(&mut self, result: GameResult, plies: u32) {
        self.playouts += 1;
        self.total_plies += u64::from(plies);
        match result {
            GameResult::Winner(Player::X) => self.x_wins += 1,
            GameResult::Winner(Player::O) => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    /// Wins recorded for `player`.
    #[must_use]
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Fraction of playouts won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: Player) -> f64 {
        if self.playouts == 0 {
            0.0
        } else {
            self.wins(player) as f64 / self.playouts as f64
        }
    }

    /// Mean reward for `player`: 1 per win, 0.5 per draw, 0 per loss.
    #[must_use]
    pub fn mean_reward(&self, player: Player) -> f64 {
        if self.playouts == 0 {
            0.0
        } else {
            (self.wins(player) as f64 + 0.5 * self.draws as f64) / self.playouts as f64
        }
    }

    /// Average playout length.
    #[must_use]
    pub fn mean_plies(&self) -> f64 {
        if self.playouts == 0 {
            0.0
        } else {
            self.total_plies as f64 / self.playouts as f64
        }
    }

    /// Calculate playouts per second.
    #[must_use]
    pub fn playouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.playouts as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

/// Run `count` random playouts from `start`.
///
/// Each playout draws from its own fork of `rng`, so a batch is reproducible
/// from the seed alone.
pub fn run_playouts<S: SearchState>(start: &S, count: u32, rng: &mut GameRng) -> Result<PlayoutStats> {
    let started = Instant::now();
    let mut stats = PlayoutStats::new();

    for _ in 0..count {
        let mut playout_rng = rng.fork();
        let playout = random_playout(start, &mut playout_rng)?;
        stats.record(playout.result, playout.plies);
    }

    stats.time_us = started.elapsed().as_micros() as u64;
    debug!(
        playouts = stats.playouts,
        x_wins = stats.x_wins,
        o_wins = stats.o_wins,
        draws = stats.draws,
        time_us = stats.time_us,
        "playouts finished"
    );
    Ok(stats)
}
