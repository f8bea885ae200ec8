//! Sub-board outcomes and the forced sub-board.
//!
//! ## SubBoardOutcome
//!
//! Each of the nine sub-boards is `Undecided` until a move either completes
//! a three-in-a-row inside it (`Won`) or fills it without one (`Drawn`).
//! Once decided, an outcome never changes.
//!
//! ## MetaState
//!
//! The nine outcomes plus the sub-board the next mover is forced into, if
//! any. External consumers that expect the legacy fixed 10-byte layout use
//! [`MetaState::to_raw`]:
//!
//! | index | meaning | encoding |
//! |---|---|---|
//! | 0-8 | sub-board outcome | -2 undecided, 0 drawn, +1/-1 winner |
//! | 9 | forced sub-board | -2 free, otherwise 0-8 |

use serde::{Deserialize, Serialize};

use super::lines::line_winner;
use crate::core::error::{Error, Result};
use crate::core::square::SUB_BOARD_COUNT;
use crate::core::Player;

/// Length of the raw meta-state encoding.
pub const RAW_META_LEN: usize = SUB_BOARD_COUNT + 1;

/// Raw value for "undecided" / "free choice".
pub const RAW_UNDECIDED: i8 = -2;

/// Outcome of a single sub-board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubBoardOutcome {
    #[default]
    Undecided,
    /// Full with no three-in-a-row.
    Drawn,
    /// Three-in-a-row for this player.
    Won(Player),
}

impl SubBoardOutcome {
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, SubBoardOutcome::Undecided)
    }

    /// Winner, if the sub-board was won.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            SubBoardOutcome::Won(p) => Some(p),
            _ => None,
        }
    }

    /// Legacy encoding: -2 undecided, 0 drawn, +1/-1 winner.
    #[must_use]
    pub const fn raw(self) -> i8 {
        match self {
            SubBoardOutcome::Undecided => RAW_UNDECIDED,
            SubBoardOutcome::Drawn => 0,
            SubBoardOutcome::Won(p) => p.sign(),
        }
    }

    #[must_use]
    pub const fn from_raw(value: i8) -> Option<Self> {
        match value {
            RAW_UNDECIDED => Some(SubBoardOutcome::Undecided),
            0 => Some(SubBoardOutcome::Drawn),
            v => match Player::from_sign(v) {
                Some(p) => Some(SubBoardOutcome::Won(p)),
                None => None,
            },
        }
    }
}

/// Sub-board outcomes and the forced sub-board for the next move.
///
/// Invariant: `forced`, when set, names an undecided sub-board. Deserializing
/// goes through [`MetaState::from_parts`], so it cannot break this either.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MetaStateParts")]
pub struct MetaState {
    outcomes: [SubBoardOutcome; SUB_BOARD_COUNT],
    forced: Option<u8>,
}

impl MetaState {
    /// All sub-boards undecided, free choice.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a meta-state from its parts, checking the forced invariant.
    pub fn from_parts(
        outcomes: [SubBoardOutcome; SUB_BOARD_COUNT],
        forced: Option<u8>,
    ) -> Result<Self> {
        if let Some(f) = forced {
            if outcomes.get(f as usize) != Some(&SubBoardOutcome::Undecided) {
                return Err(Error::InvalidForcedSubBoard { forced: f });
            }
        }
        Ok(Self { outcomes, forced })
    }

    /// Outcome of one sub-board. `None` outside `0..9`.
    #[inline]
    #[must_use]
    pub fn outcome(&self, sub_board: u8) -> Option<SubBoardOutcome> {
        self.outcomes.get(sub_board as usize).copied()
    }

    /// All nine outcomes, row-major.
    #[must_use]
    pub fn outcomes(&self) -> &[SubBoardOutcome; SUB_BOARD_COUNT] {
        &self.outcomes
    }

    /// Sub-board the next move is forced into, or `None` for free choice.
    #[inline]
    #[must_use]
    pub fn forced(&self) -> Option<u8> {
        self.forced
    }

    /// Check whether a sub-board is still open. False outside `0..9`.
    #[inline]
    #[must_use]
    pub fn is_undecided(&self, sub_board: u8) -> bool {
        self.outcome(sub_board) == Some(SubBoardOutcome::Undecided)
    }

    /// Iterate over undecided sub-board indices.
    pub fn undecided(&self) -> impl Iterator<Item = u8> + '_ {
        (0..SUB_BOARD_COUNT as u8).filter(|&b| self.is_undecided(b))
    }

    /// Check whether every sub-board is decided.
    #[must_use]
    pub fn all_decided(&self) -> bool {
        self.outcomes.iter().all(|o| o.is_decided())
    }

    /// Three sub-boards in a row won by the same player. Drawn and
    /// undecided sub-boards never count.
    #[must_use]
    pub fn line_winner(&self) -> Option<Player> {
        line_winner(&self.outcomes.map(SubBoardOutcome::winner))
    }

    pub(crate) fn set_outcome(&mut self, sub_board: u8, outcome: SubBoardOutcome) {
        debug_assert!(!self.outcomes[sub_board as usize].is_decided());
        self.outcomes[sub_board as usize] = outcome;
    }

    pub(crate) fn set_forced(&mut self, forced: Option<u8>) {
        self.forced = forced;
    }

    /// Legacy fixed-size encoding.
    #[must_use]
    pub fn to_raw(&self) -> [i8; RAW_META_LEN] {
        let mut raw = [RAW_UNDECIDED; RAW_META_LEN];
        for (slot, outcome) in raw.iter_mut().zip(self.outcomes.iter()) {
            *slot = outcome.raw();
        }
        raw[SUB_BOARD_COUNT] = self.forced.map_or(RAW_UNDECIDED, |f| f as i8);
        raw
    }

    /// Decode the legacy encoding.
    pub fn from_raw(raw: &[i8; RAW_META_LEN]) -> Result<Self> {
        let mut outcomes = [SubBoardOutcome::Undecided; SUB_BOARD_COUNT];
        for (index, (slot, &value)) in outcomes.iter_mut().zip(raw.iter()).enumerate() {
            *slot = SubBoardOutcome::from_raw(value).ok_or(Error::InvalidRawValue {
                value,
                index,
                context: "sub-board outcome",
            })?;
        }

        let forced = match raw[SUB_BOARD_COUNT] {
            RAW_UNDECIDED => None,
            f if (0..SUB_BOARD_COUNT as i8).contains(&f) => Some(f as u8),
            value => {
                return Err(Error::InvalidRawValue {
                    value,
                    index: SUB_BOARD_COUNT,
                    context: "forced sub-board",
                })
            }
        };

        Self::from_parts(outcomes, forced)
    }
}

/// Unchecked shape of [`MetaState`] as it arrives from a deserializer.
#[derive(Deserialize)]
struct MetaStateParts {
    outcomes: [SubBoardOutcome; SUB_BOARD_COUNT],
    forced: Option<u8>,
}

impl TryFrom<MetaStateParts> for MetaState {
    type Error = Error;

    fn try_from(parts: MetaStateParts) -> Result<Self> {
        Self::from_parts(parts.outcomes, parts.forced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_undecided() {
        let meta = MetaState::new();
        assert_eq!(meta.forced(), None);
        assert_eq!(meta.undecided().count(), 9);
        assert!(!meta.all_decided());
        assert_eq!(meta.to_raw(), [-2; 10]);
    }

    #[test]
    fn test_outcome_raw_roundtrip() {
        for outcome in [
            SubBoardOutcome::Undecided,
            SubBoardOutcome::Drawn,
            SubBoardOutcome::Won(Player::X),
            SubBoardOutcome::Won(Player::O),
        ] {
            assert_eq!(SubBoardOutcome::from_raw(outcome.raw()), Some(outcome));
        }
        assert_eq!(SubBoardOutcome::from_raw(3), None);
        assert_eq!(SubBoardOutcome::from_raw(-3), None);
    }

    #[test]
    fn test_raw_layout() {
        let mut meta = MetaState::new();
        meta.set_outcome(0, SubBoardOutcome::Won(Player::X));
        meta.set_outcome(4, SubBoardOutcome::Drawn);
        meta.set_outcome(8, SubBoardOutcome::Won(Player::O));
        meta.set_forced(Some(2));

        assert_eq!(meta.to_raw(), [1, -2, -2, -2, 0, -2, -2, -2, -1, 2]);
        assert_eq!(MetaState::from_raw(&meta.to_raw()).unwrap(), meta);
    }

    #[test]
    fn test_from_raw_rejects_forced_into_decided() {
        let raw = [1, -2, -2, -2, -2, -2, -2, -2, -2, 0];
        assert_eq!(
            MetaState::from_raw(&raw),
            Err(Error::InvalidForcedSubBoard { forced: 0 })
        );
    }

    #[test]
    fn test_from_raw_rejects_bad_values() {
        let raw = [-2, -2, 5, -2, -2, -2, -2, -2, -2, -2];
        assert!(matches!(
            MetaState::from_raw(&raw),
            Err(Error::InvalidRawValue { value: 5, index: 2, .. })
        ));

        let raw = [-2, -2, -2, -2, -2, -2, -2, -2, -2, 9];
        assert!(matches!(
            MetaState::from_raw(&raw),
            Err(Error::InvalidRawValue { value: 9, index: 9, .. })
        ));
    }

    #[test]
    fn test_out_of_range_sub_board() {
        let meta = MetaState::new();
        assert_eq!(meta.outcome(8), Some(SubBoardOutcome::Undecided));
        assert_eq!(meta.outcome(9), None);
        assert_eq!(meta.outcome(u8::MAX), None);
        assert!(!meta.is_undecided(9));
    }

    #[test]
    fn test_from_parts_rejects_forced_off_the_board() {
        let outcomes = [SubBoardOutcome::Undecided; SUB_BOARD_COUNT];
        assert_eq!(
            MetaState::from_parts(outcomes, Some(9)),
            Err(Error::InvalidForcedSubBoard { forced: 9 })
        );
        assert_eq!(
            MetaState::from_parts(outcomes, Some(200)),
            Err(Error::InvalidForcedSubBoard { forced: 200 })
        );
    }

    #[test]
    fn test_deserialize_checks_forced() {
        let mut meta = MetaState::new();
        meta.set_outcome(3, SubBoardOutcome::Drawn);
        let json = serde_json::to_string(&meta).unwrap();

        let forced_into_drawn = json.replace("\"forced\":null", "\"forced\":3");
        assert_ne!(json, forced_into_drawn);
        assert!(serde_json::from_str::<MetaState>(&forced_into_drawn).is_err());

        let forced_off_board = json.replace("\"forced\":null", "\"forced\":12");
        assert!(serde_json::from_str::<MetaState>(&forced_off_board).is_err());
    }

    #[test]
    fn test_line_winner_ignores_draws() {
        use SubBoardOutcome::{Drawn, Undecided, Won};

        let meta = MetaState::from_parts(
            [Drawn, Drawn, Drawn, Undecided, Undecided, Undecided, Undecided, Undecided, Undecided],
            None,
        )
        .unwrap();
        assert_eq!(meta.line_winner(), None);

        let meta = MetaState::from_parts(
            [Won(Player::O), Undecided, Undecided, Drawn, Won(Player::O), Undecided, Undecided, Undecided, Won(Player::O)],
            Some(1),
        )
        .unwrap();
        assert_eq!(meta.line_winner(), Some(Player::O));
    }

    #[test]
    fn test_serialization() {
        let meta = MetaState::from_raw(&[1, 0, -2, -1, -2, -2, -2, -2, -2, 4]).unwrap();
        let json = serde_json::to_string(&meta).unwrap();
        let deserialized: MetaState = serde_json::from_str(&json).unwrap();
        assert_eq!(meta, deserialized);
    }
}
