//! Core engine types: players, coordinates, RNG, configuration, errors.
//!
//! These are the building blocks shared by the board model, the outcome
//! rules and the game state.

pub mod player;
pub mod square;
pub mod rng;
pub mod config;
pub mod error;

pub use player::Player;
pub use square::{action_index, action_name, Square};
pub use rng::GameRng;
pub use config::EngineConfig;
pub use error::{Error, Result};
