//! Winning lines of a 3x3 grid.
//!
//! The same eight lines decide a sub-board (over its stones) and the whole
//! game under the meta-board rule (over the sub-board winners).

use crate::core::Player;

/// Winning line indices on a 3x3 grid, row-major.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Owner of the first completed line, if any.
///
/// A line is complete when all three entries belong to the same player.
/// `None` entries (empty cells, undecided or drawn sub-boards) never count.
#[must_use]
pub fn line_winner(cells: &[Option<Player>; 9]) -> Option<Player> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Some(p) if cells[b] == Some(p) && cells[c] == Some(p) => Some(p),
        _ => None,
    })
}
