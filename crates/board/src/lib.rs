//! Board model and move generation for rho, a pawn-race engine.
//!
//! The whole board lives in a single `u128` (two bits per square), encoded
//! so that reversing the bit string rotates the board and swaps the
//! colours. Move generation therefore only ever exists for White: to act
//! for Black, callers flip the board, generate, and flip the chosen move
//! back. Higher layers (`rho-game`) own that normalisation cycle.

pub mod board;
pub mod error;
pub mod movegen;
pub mod position;
pub mod square;

pub use board::Board;
pub use error::{BoardError, Result};
pub use movegen::{Move, MoveIter, MoveKind, PawnIter};
pub use position::{File, Position, Rank};
pub use square::{Colour, Square};
