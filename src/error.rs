//! Error types for the tictree crate

use thiserror::Error;

/// Main error type for the tictree crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("square ({row}, {col}) is out of bounds (row and column must be 0-2)")]
    InvalidSquare { row: usize, col: usize },

    #[error("invalid move: square ({row}, {col}) is already occupied")]
    OccupiedSquare { row: usize, col: usize },

    #[error("unknown strategy '{name}'. Expected one of: {expected}")]
    UnknownStrategy { name: String, expected: String },

    #[error("board string must have exactly {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid move list '{input}': {reason}")]
    InvalidMoveList { input: String, reason: String },

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
