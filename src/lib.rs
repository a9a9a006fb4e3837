//! Noughts and Crosses (Tic-Tac-Toe) console game
//!
//! This crate provides:
//! - A complete 3x3 game implementation with move validation
//! - A uniformly random computer opponent with injectable randomness
//! - A JSON-backed leaderboard with pluggable storage
//! - A console menu and game loop over generic input/output

pub mod adapters;
pub mod cli;
pub mod error;
pub mod leaderboard;
pub mod ports;
pub mod tictactoe;

pub use error::{Error, Result};
pub use leaderboard::{Leaderboard, LeaderboardStore};
pub use tictactoe::{Board, Cell, GameResult, GameSession, Mark, RandomOpponent, Selector};
