//! Winning line analysis

use super::board::{Cell, Mark};

/// Winning line indices on the 3x3 board
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

/// Check if any of the 8 lines is fully occupied by the given mark
pub fn has_line(cells: &[Cell; 9], mark: Mark) -> bool {
    let target = mark.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}
