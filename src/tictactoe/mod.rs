//! Game rules and state for 3x3 Noughts and Crosses

pub mod board;
pub mod game;
pub mod lines;
pub mod opponent;
pub mod selector;

pub use board::{Board, Cell, Mark};
pub use game::{GameResult, GameSession};
pub use opponent::RandomOpponent;
pub use selector::Selector;
