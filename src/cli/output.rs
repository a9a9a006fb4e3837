//! Console rendering helpers

use crate::tictactoe::Board;

/// Render the board as a dash-and-pipe grid
///
/// ```text
/// -------------
/// | X | O | X |
/// -------------
/// | . | . | . |
/// -------------
/// | . | . | . |
/// -------------
/// ```
///
/// Empty cells render as spaces, like the original layout.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("-------------\n");
    for row in 0..3 {
        out.push('|');
        for col in 0..3 {
            let cell = board.cells()[row * 3 + col];
            out.push(' ');
            out.push(cell.to_char());
            out.push_str(" |");
        }
        out.push_str("\n-------------\n");
    }
    out
}

/// Render the numbered layout shown in the welcome message
pub fn render_square_numbers() -> String {
    let mut out = String::from("-------------\n");
    for row in 0..3 {
        out.push('|');
        for col in 0..3 {
            out.push(' ');
            out.push(char::from(b'1' + (row * 3 + col) as u8));
            out.push_str(" |");
        }
        out.push_str("\n-------------\n");
    }
    out
}

/// The top-level menu text
pub const MENU: &str = "\nMENU:\n1. Play Game\n2. Save Score in Leaderboard\n3. Display Leaderboard\nq. Quit\n";
