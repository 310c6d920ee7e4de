//! Error types for game state and notation handling.

use rho_board::BoardError;
use thiserror::Error;

/// Convenience alias for game-layer results.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised while driving a game forward.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A move was submitted after the game had already ended.
    #[error("game is already over")]
    Finished,

    /// The move is well-formed but not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The input does not look like a move at all.
    #[error("unrecognised notation: {0:?}")]
    Notation(String),

    /// A coordinate inside otherwise well-shaped notation was invalid.
    #[error(transparent)]
    Board(#[from] BoardError),
}
