//! Player identification.
//!
//! ## Player
//!
//! The two sides of the game. `X` moves first and is encoded as `+1`,
//! `O` is encoded as `-1`. The signed encoding is what external consumers
//! (search heuristics, raw board dumps) see.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player, encoded as `+1`.
    X,
    /// Second player, encoded as `-1`.
    O,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Get the signed encoding (`+1` for X, `-1` for O).
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// Decode a signed value. Returns `None` for anything but `+1` / `-1`.
    ///
    /// ```
    /// use uttt_engine::core::Player;
    ///
    /// assert_eq!(Player::from_sign(1), Some(Player::X));
    /// assert_eq!(Player::from_sign(-1), Some(Player::O));
    /// assert_eq!(Player::from_sign(0), None);
    /// ```
    #[must_use]
    pub const fn from_sign(value: i8) -> Option<Self> {
        match value {
            1 => Some(Player::X),
            -1 => Some(Player::O),
            _ => None,
        }
    }

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Player to move after `move_count` moves from the empty board.
    #[must_use]
    pub const fn to_move_after(move_count: u32) -> Self {
        if move_count % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}
