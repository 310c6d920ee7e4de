//! The line-based match protocol.
//!
//! Two engines play over any transport that can carry text lines. Black
//! opens with a two-letter handshake naming the empty files, White's
//! first (`"ah"` leaves White without an a-pawn and Black without an
//! h-pawn). After that the sides alternate single lines of algebraic
//! notation until the game ends.
//!
//! `run_match` drives one side of that conversation. It is generic over
//! the transport (`LineIo`) and the move source (`MovePicker`), so the
//! same loop serves interactive play on stdio and embedded play behind a
//! JNI boundary.

use crate::error::GameError;
use crate::notation;
use crate::outcome::Outcome;
use crate::state::Game;
use rho_board::{Colour, File, Move};
use std::io;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that end a match abnormally.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// The transport failed or reached end of input.
    #[error("transport error")]
    Io(#[from] io::Error),

    /// The opening gap line was malformed.
    #[error("malformed gap line {line:?}")]
    Handshake { line: String },

    /// The opponent sent a move this position cannot accept.
    #[error("opponent move {line:?} rejected")]
    Opponent {
        line: String,
        #[source]
        source: GameError,
    },

    /// The local picker produced no move in a live position.
    #[error("no move available in a live position")]
    NoMove,

    /// A local rule violation, such as the picker choosing an illegal move.
    #[error(transparent)]
    Game(#[from] GameError),
}

/// A transport that carries one text line per call.
pub trait LineIo {
    /// Receive the next line, without its terminator.
    fn recv(&mut self) -> io::Result<String>;

    /// Send one line, appending the terminator.
    fn send(&mut self, line: &str) -> io::Result<()>;
}

/// Chooses moves for one side of a match.
pub trait MovePicker {
    /// Pick one of the legal moves, in absolute coordinates. Only called
    /// while the game is still live.
    fn pick(&mut self, game: &Game) -> Option<Move>;

    /// Gap files to announce when playing Black, as (white gap, black gap).
    fn choose_gaps(&mut self) -> (File, File) {
        (File::A, File::H)
    }
}

fn parse_gap_line(line: &str) -> Result<(File, File), ProtocolError> {
    let text = line.trim();
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(white), Some(black), None) => {
            match (File::from_char(white), File::from_char(black)) {
                (Ok(white_gap), Ok(black_gap)) => Ok((white_gap, black_gap)),
                _ => Err(ProtocolError::Handshake {
                    line: line.to_string(),
                }),
            }
        }
        _ => Err(ProtocolError::Handshake {
            line: line.to_string(),
        }),
    }
}

/// Play one full game as `colour` over `io`, choosing moves with `picker`.
///
/// Returns the result of the game, whoever it favours. Errors mean the
/// match broke down, not that it was lost.
pub fn run_match<T, P>(io: &mut T, picker: &mut P, colour: Colour) -> Result<Outcome, ProtocolError>
where
    T: LineIo,
    P: MovePicker,
{
    let (white_gap, black_gap) = match colour {
        Colour::Black => {
            let gaps = picker.choose_gaps();
            io.send(&format!("{}{}", gaps.0.letter(), gaps.1.letter()))?;
            gaps
        }
        Colour::White => {
            let line = io.recv()?;
            parse_gap_line(&line)?
        }
    };

    info!(side = %colour, white_gap = %white_gap, black_gap = %black_gap, "match started");
    let mut game = Game::new(white_gap, black_gap);

    let outcome = loop {
        if let Some(outcome) = game.outcome() {
            break outcome;
        }

        if game.to_move() == colour {
            let mv = picker.pick(&game).ok_or(ProtocolError::NoMove)?;
            let san = notation::format(&mv);
            game.apply(&mv)?;
            io.send(&san)?;
            debug!(ply = game.ply(), %san, "sent move");
        } else {
            let line = io.recv()?;
            match game.apply_san(line.trim()) {
                Ok(mv) => {
                    debug!(ply = game.ply(), san = %notation::format(&mv), "received move");
                }
                Err(source) => {
                    return Err(ProtocolError::Opponent { line, source });
                }
            }
        }
    };

    info!(%outcome, plies = game.ply(), "match finished");
    Ok(outcome)
}
