//! Crate-wide error type.
//!
//! Only the outward-facing surfaces (notation, FEN, engine options and
//! applying a move chosen outside the engine) can fail. Generation, attack
//! detection, make/unmake, evaluation and search never return errors.

use thiserror::Error;

/// Errors surfaced to callers of the parsing and engine APIs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A square string could not be parsed or lies outside the board.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// A move string is malformed.
    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// The move is well-formed but not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A FEN string is malformed or inconsistent with the variant.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// An engine option name is not recognised.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// An engine option value could not be interpreted.
    #[error("invalid value '{value}' for option {name}")]
    InvalidOptionValue { name: String, value: String },

    /// The side to move has no legal moves.
    #[error("no legal moves available")]
    NoLegalMoves,
}

/// Result alias used by the fallible public APIs.
pub type ChessResult<T> = Result<T, ChessError>;
