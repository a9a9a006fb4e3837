//! Error types for the noughts crate

use thiserror::Error;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    #[error("{value} is out of range (squares are numbered 1-9)")]
    OutOfRange { value: i64 },

    #[error("square at row {row}, column {col} is already taken")]
    CellOccupied { row: usize, col: usize },

    #[error("position ({row}, {col}) is outside the board")]
    InvalidPosition { row: usize, col: usize },

    #[error("leaderboard data at '{path}' is corrupt: {message}")]
    CorruptData { path: String, message: String },

    #[error("no moves available on the board")]
    NoMovesAvailable,

    #[error("game already over")]
    GameOver,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
