//! The 9x9 stone grid.

use serde::{Deserialize, Serialize};

use super::lines::line_winner;
use crate::core::error::{Error, Result};
use crate::core::square::{sub_board_cells, Square, SIDE, SUB_BOARD_COUNT};
use crate::core::Player;

/// Contents of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Player),
}

impl Cell {
    /// Signed encoding: 0 empty, +1 X, -1 O.
    #[must_use]
    pub const fn raw(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Stone(p) => p.sign(),
        }
    }

    /// Decode the signed encoding.
    #[must_use]
    pub const fn from_raw(value: i8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            v => match Player::from_sign(v) {
                Some(p) => Some(Cell::Stone(p)),
                None => None,
            },
        }
    }

    /// Owner of the stone, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Stone(p) => Some(p),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// The full board, row-major.
///
/// Copied (not shared) into every child state, which keeps parents
/// immutable while children are explored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIDE]; SIDE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at a square.
    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.row() as usize][square.col() as usize]
    }

    /// Get the cell at `(row, col)`. Returns `None` off the board.
    #[must_use]
    pub fn at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cells.get(row as usize)?.get(col as usize).copied()
    }

    #[inline]
    pub(crate) fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.row() as usize][square.col() as usize] = cell;
    }

    /// The 9 cells of a sub-board, in local order. `None` outside `0..9`.
    #[must_use]
    pub fn sub_board(&self, sub_board: u8) -> Option<[Cell; SUB_BOARD_COUNT]> {
        let cells = sub_board_cells(sub_board)?;
        Some(cells.map(|action| self.cells[action / SIDE][action % SIDE]))
    }

    /// Winner of a three-in-a-row inside a sub-board, if any.
    #[must_use]
    pub fn sub_board_winner(&self, sub_board: u8) -> Option<Player> {
        line_winner(&self.sub_board(sub_board)?.map(Cell::player))
    }

    /// Check whether all 9 cells of a sub-board are occupied. False outside
    /// `0..9`.
    #[must_use]
    pub fn sub_board_full(&self, sub_board: u8) -> bool {
        self.sub_board(sub_board)
            .is_some_and(|cells| cells.iter().all(|c| !c.is_empty()))
    }

    /// Number of stones on the board.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| !c.is_empty())
            .count()
    }

    /// Raw grid in the signed encoding.
    #[must_use]
    pub fn to_raw(&self) -> [[i8; SIDE]; SIDE] {
        self.cells.map(|row| row.map(Cell::raw))
    }

    /// Build a board from the signed encoding.
    pub fn from_raw(raw: &[[i8; SIDE]; SIDE]) -> Result<Self> {
        let mut board = Self::new();
        for (r, row) in raw.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                board.cells[r][c] = Cell::from_raw(value).ok_or(Error::InvalidRawValue {
                    value,
                    index: r * SIDE + c,
                    context: "board cell",
                })?;
            }
        }
        Ok(board)
    }
}
