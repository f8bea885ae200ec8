//! Engine configuration.
//!
//! A deployment picks exactly one terminal-outcome rule and a seed for
//! random playouts. Both are plain data so a driver can load them from
//! whatever format it already uses.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::games::uttt::UtttState;
use crate::rules::RuleKind;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Terminal-outcome rule (default: meta-board three-in-a-row).
    pub rule: RuleKind,

    /// Random seed for playouts.
    /// Same seed produces identical playout sequences.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rule: RuleKind::MetaBoard,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a custom outcome rule.
    #[must_use]
    pub fn with_rule(mut self, rule: RuleKind) -> Self {
        self.rule = rule;
        self
    }

    /// Create a new config with a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Empty root state using the configured rule.
    #[must_use]
    pub fn root_state(&self) -> UtttState<RuleKind> {
        UtttState::with_rule(self.rule)
    }

    /// Playout RNG seeded from this config.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        GameRng::new(self.seed)
    }
}
