//! Game orchestration for rho pawn races.
//!
//! `rho-board` knows how pawns move; this crate knows how a match is
//! played. It tracks absolute orientation on top of the board's
//! white-normalised generator, records history in algebraic notation,
//! detects the three ways a race ends, and speaks the line-based protocol
//! that lets two engines play each other over any byte stream.

pub mod error;
pub mod logging;
pub mod notation;
pub mod outcome;
pub mod protocol;
pub mod state;

pub use error::{GameError, Result};
pub use outcome::{Outcome, WinReason};
pub use protocol::{run_match, LineIo, MovePicker, ProtocolError};
pub use state::{Game, MoveRecord};
