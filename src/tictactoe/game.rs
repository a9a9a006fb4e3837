//! High-level game management
//!
//! `GameSession` is the turn state machine: the human moves, then the
//! computer, until someone completes a line or the board fills. Prompting,
//! re-prompting on bad input, and board rendering belong to the caller; the
//! session only accepts validated coordinates and reports results.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Mark},
    opponent::RandomOpponent,
};

/// Outcome of a game, recomputed from board state after every placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    PlayerWin,
    ComputerWin,
    Draw,
    InProgress,
}

impl GameResult {
    /// Check if the game has ended
    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }
}

/// A single game in progress
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    result: GameResult,
    opponent: RandomOpponent,
}

impl GameSession {
    /// Start a new game with an empty board
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            result: GameResult::InProgress,
            opponent: RandomOpponent::new(),
        }
    }

    /// Current board state
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current game result
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Apply the human's move at a validated coordinate
    ///
    /// Checks for a human win first, then a draw. The win check must come
    /// first so a line completed on the final square is not reported as a
    /// draw.
    ///
    /// # Errors
    ///
    /// Returns `GameOver` if the game already ended, or the placement error
    /// (`InvalidPosition`, `CellOccupied`) without advancing the turn.
    pub fn play_human(&mut self, row: usize, col: usize) -> Result<GameResult, crate::Error> {
        if self.result.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        self.board.place(row, col, Mark::Human)?;

        if self.board.has_won(Mark::Human) {
            self.result = GameResult::PlayerWin;
        } else if self.board.is_draw() {
            self.result = GameResult::Draw;
        }

        Ok(self.result)
    }

    /// Let the computer pick and apply its move
    ///
    /// Returns the chosen coordinate alongside the result so the caller can
    /// announce the move.
    ///
    /// # Errors
    ///
    /// Returns `GameOver` if the game already ended. `NoMovesAvailable`
    /// cannot occur when the human's move is always applied (and checked for
    /// a draw) first.
    pub fn play_computer<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<((usize, usize), GameResult), crate::Error> {
        if self.result.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let (row, col) = self.opponent.choose_move(&self.board, rng)?;
        self.board.place(row, col, Mark::Computer)?;

        if self.board.has_won(Mark::Computer) {
            self.result = GameResult::ComputerWin;
        }

        Ok(((row, col), self.result))
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::tictactoe::board::Cell;

    #[test]
    fn test_new_session_in_progress() {
        let session = GameSession::new();
        assert_eq!(session.result(), GameResult::InProgress);
        assert!(!session.result().is_terminal());
    }

    #[test]
    fn test_human_win_on_top_row() {
        let mut session = GameSession::new();
        session.play_human(0, 0).unwrap();

        // Force the computer's pieces away from the top row.
        session.board.place(1, 0, Mark::Computer).unwrap();
        session.play_human(0, 1).unwrap();
        session.board.place(1, 1, Mark::Computer).unwrap();

        let result = session.play_human(0, 2).unwrap();
        assert_eq!(result, GameResult::PlayerWin);
        assert!(session.result().is_terminal());
    }

    #[test]
    fn test_winning_final_square_is_not_a_draw() {
        // X O X
        // O X O
        // O X -> X plays (2, 2), filling the board and completing the
        //        diagonal at once. Must report a win, not a draw.
        let mut session = GameSession::new();
        let setup = [
            ((0, 0), Mark::Human),
            ((0, 1), Mark::Computer),
            ((0, 2), Mark::Human),
            ((1, 0), Mark::Computer),
            ((1, 1), Mark::Human),
            ((1, 2), Mark::Computer),
            ((2, 0), Mark::Computer),
            ((2, 1), Mark::Human),
        ];
        for ((row, col), mark) in setup {
            session.board.place(row, col, mark).unwrap();
        }

        let result = session.play_human(2, 2).unwrap();
        assert_eq!(result, GameResult::PlayerWin);
    }

    #[test]
    fn test_draw_when_board_fills_without_winner() {
        // X X O
        // O O X
        // X O -> X plays (2, 2): full board, no line.
        let mut session = GameSession::new();
        let setup = [
            ((0, 0), Mark::Human),
            ((0, 1), Mark::Human),
            ((0, 2), Mark::Computer),
            ((1, 0), Mark::Computer),
            ((1, 1), Mark::Computer),
            ((1, 2), Mark::Human),
            ((2, 0), Mark::Human),
            ((2, 1), Mark::Computer),
        ];
        for ((row, col), mark) in setup {
            session.board.place(row, col, mark).unwrap();
        }

        let result = session.play_human(2, 2).unwrap();
        assert_eq!(result, GameResult::Draw);
    }

    #[test]
    fn test_computer_move_lands_on_empty_cell() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut session = GameSession::new();
        session.play_human(1, 1).unwrap();

        let ((row, col), result) = session.play_computer(&mut rng).unwrap();
        assert_eq!(result, GameResult::InProgress);
        assert_eq!(
            session.board().get(row, col).unwrap(),
            Cell::Computer,
            "computer's reported move should hold its mark"
        );
        assert_eq!(session.board().empty_cells().len(), 7);
    }

    #[test]
    fn test_computer_win_detected() {
        // O O -
        // X X -
        // X - -  with one computer move left to complete the top row
        let mut session = GameSession::new();
        let setup = [
            ((0, 0), Mark::Computer),
            ((0, 1), Mark::Computer),
            ((1, 0), Mark::Human),
            ((1, 1), Mark::Human),
            ((2, 0), Mark::Human),
        ];
        for ((row, col), mark) in setup {
            session.board.place(row, col, mark).unwrap();
        }

        // Drive the RNG until the computer happens to pick (0, 2); each turn
        // runs on a fresh clone so only one computer move is ever applied.
        let mut rng = StdRng::seed_from_u64(1);
        let mut won = false;
        for _ in 0..200 {
            let mut game = session.clone();
            let ((row, col), result) = game.play_computer(&mut rng).unwrap();
            if (row, col) == (0, 2) {
                assert_eq!(result, GameResult::ComputerWin);
                won = true;
                break;
            }
            assert_eq!(result, GameResult::InProgress);
        }
        assert!(won, "computer never picked the winning square in 200 tries");
    }

    #[test]
    fn test_moves_rejected_after_game_over() {
        let mut session = GameSession::new();
        let setup = [
            ((0, 0), Mark::Human),
            ((0, 1), Mark::Human),
            ((1, 0), Mark::Computer),
            ((1, 1), Mark::Computer),
        ];
        for ((row, col), mark) in setup {
            session.board.place(row, col, mark).unwrap();
        }
        assert_eq!(session.play_human(0, 2).unwrap(), GameResult::PlayerWin);

        assert!(matches!(
            session.play_human(2, 2),
            Err(crate::Error::GameOver)
        ));
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            session.play_computer(&mut rng),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn test_occupied_square_does_not_advance_game() {
        let mut session = GameSession::new();
        session.play_human(0, 0).unwrap();

        let result = session.play_human(0, 0);
        assert!(matches!(result, Err(crate::Error::CellOccupied { .. })));
        assert_eq!(session.result(), GameResult::InProgress);
        assert_eq!(session.board().empty_cells().len(), 8);
    }
}
