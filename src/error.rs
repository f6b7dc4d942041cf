//! Error types for the engine
//!
//! Only the text boundary (algebraic squares, configuration, the protocol
//! stream) produces recoverable errors. Search and move rules never fail.

use crate::board::{Color, Pos};

/// Errors that can occur at the engine boundary
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Malformed algebraic square such as `i9` or `a0`
    #[error("Invalid coordinate: {input:?}")]
    InvalidCoordinate { input: String },

    /// Strict move application on a square that captures nothing
    #[error("Illegal move for {color} at {square}")]
    IllegalMove { square: Pos, color: Color },

    /// Protocol `move` line without exactly a colour and a square
    #[error("Malformed command: {line:?}")]
    MalformedCommand { line: String },

    /// Configuration value out of range
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Reading or writing the protocol stream failed
    #[error("Protocol I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations
pub type GameResult<T> = Result<T, GameError>;
