//! Board coordinates and action naming.
//!
//! An action is a cell index in `[0, 81)`. Index `a` addresses row `a / 9`
//! and column `a % 9`. Every cell also has a containing sub-board and a
//! local position within that sub-board, both numbered row-major `0..9`:
//!
//! ```text
//!   sub-boards        local positions
//!   0 | 1 | 2           0 1 2
//!   --+---+--           3 4 5
//!   3 | 4 | 5           6 7 8
//!   --+---+--
//!   6 | 7 | 8
//! ```
//!
//! Human-readable names are `<column letter><1-based row>`, so index 40
//! (the centre cell) is `"E5"`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Side length of the full board.
pub const SIDE: usize = 9;

/// Side length of a sub-board.
pub const SUB_SIDE: usize = 3;

/// Number of cells on the board (and of actions).
pub const CELL_COUNT: usize = SIDE * SIDE;

/// Number of sub-boards.
pub const SUB_BOARD_COUNT: usize = SUB_SIDE * SUB_SIDE;

/// A cell on the 9x9 board.
///
/// Only constructed through bounds-checked paths, so `row` and `col` are
/// always in `0..9`. Serialized as its action index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square, checking bounds.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIDE && col < SIDE).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Decode an action index.
    pub fn from_index(action: usize) -> Result<Self> {
        if action >= CELL_COUNT {
            return Err(Error::ActionOutOfRange {
                action,
                max_actions: CELL_COUNT,
            });
        }
        Ok(Self {
            row: (action / SIDE) as u8,
            col: (action % SIDE) as u8,
        })
    }

    /// Build a square from a sub-board index and a local position.
    ///
    /// Returns `None` unless both are in `0..9`.
    #[must_use]
    pub fn from_sub_board(sub_board: u8, local: u8) -> Option<Self> {
        if sub_board as usize >= SUB_BOARD_COUNT || local as usize >= SUB_BOARD_COUNT {
            return None;
        }
        Some(Self {
            row: (sub_board / 3) * 3 + local / 3,
            col: (sub_board % 3) * 3 + local % 3,
        })
    }

    /// Row, `0..9`.
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column, `0..9`.
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Get the action index of this square.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * SIDE + self.col as usize
    }

    /// Index of the containing sub-board.
    #[inline]
    #[must_use]
    pub const fn sub_board(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Position within the containing sub-board.
    #[inline]
    #[must_use]
    pub const fn local(self) -> u8 {
        (self.row % 3) * 3 + self.col % 3
    }

    /// Human-readable name, e.g. `"E5"`.
    #[must_use]
    pub fn name(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

impl TryFrom<usize> for Square {
    type Error = Error;

    fn try_from(action: usize) -> Result<Self> {
        Self::from_index(action)
    }
}

impl From<Square> for usize {
    fn from(square: Square) -> usize {
        square.index()
    }
}

impl FromStr for Square {
    type Err = Error;

    /// Parse `<column letter><row>`. The row is plain decimal digits with no
    /// sign or leading zero, so parsing is the exact inverse of `name`.
    fn from_str(name: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidActionName {
            name: name.to_string(),
            reason,
        };

        let mut chars = name.chars();
        let letter = chars
            .next()
            .ok_or_else(|| invalid("empty name"))?
            .to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(invalid("expected a column letter"));
        }
        let col = (letter as u8 - b'A') as usize;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a row number"));
        }
        if digits.starts_with('0') {
            return Err(invalid("rows are numbered from 1"));
        }
        let row: usize = digits
            .parse()
            .map_err(|_| invalid("expected a row number"))?;

        Square::new(row - 1, col).ok_or_else(|| invalid("off the board"))
    }
}

/// Action indices of the 9 cells of a sub-board, in local order.
///
/// Returns `None` for a sub-board index outside `0..9`.
#[must_use]
pub fn sub_board_cells(sub_board: u8) -> Option<[usize; SUB_BOARD_COUNT]> {
    let mut cells = [0; SUB_BOARD_COUNT];
    for (local, cell) in cells.iter_mut().enumerate() {
        *cell = Square::from_sub_board(sub_board, local as u8)?.index();
    }
    Some(cells)
}

/// Convert an action index to its name.
///
/// ```
/// use uttt_engine::core::square::action_name;
///
/// assert_eq!(action_name(40).unwrap(), "E5");
/// assert_eq!(action_name(28).unwrap(), "B4");
/// assert!(action_name(81).is_err());
/// ```
pub fn action_name(action: usize) -> Result<String> {
    Ok(Square::from_index(action)?.name())
}

/// Convert an action name to its index. Letters are case-insensitive.
///
/// ```
/// use uttt_engine::core::square::action_index;
///
/// assert_eq!(action_index("E5").unwrap(), 40);
/// assert_eq!(action_index("a3").unwrap(), 18);
/// assert!(action_index("J1").is_err());
/// ```
pub fn action_index(name: &str) -> Result<usize> {
    Ok(name.parse::<Square>()?.index())
}
