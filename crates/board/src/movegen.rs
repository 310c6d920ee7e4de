//! White-normalised move generation.
//!
//! Everything here generates for White only. Black's moves are obtained by
//! flipping the board, generating, and flipping each move back; the game
//! layer owns that dance. Generation is lazy and allocation-free: a
//! `PawnIter` scans squares a1 upward and a `MoveIter` tries a fixed
//! sequence of candidate moves per pawn.

use crate::board::Board;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// How a pawn moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// One square forward onto an empty square.
    Push,
    /// Two squares forward from the pawn's starting rank.
    DoublePush,
    /// Diagonally forward onto an enemy pawn.
    Capture,
    /// Diagonally forward behind an enemy pawn that just double-pushed.
    EnPassant,
}

/// A single pawn move in white orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub kind: MoveKind,
}

impl Move {
    /// Does this move remove an enemy pawn?
    pub const fn is_capture(&self) -> bool {
        matches!(self.kind, MoveKind::Capture | MoveKind::EnPassant)
    }

    /// The same move seen from the other side of the board.
    pub fn flip(&self) -> Move {
        Move {
            from: self.from.flip(),
            to: self.to.flip(),
            kind: self.kind,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// Iterates the positions of the white pawns, a1 upward.
#[derive(Debug, Clone)]
pub struct PawnIter {
    board: Board,
    next_index: u8,
}

impl PawnIter {
    pub fn new(board: Board) -> PawnIter {
        PawnIter {
            board,
            next_index: 0,
        }
    }
}

impl Iterator for PawnIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while self.next_index < 64 {
            let pos = Position::from_index(self.next_index)?;
            self.next_index += 1;
            if self.board.at(pos).is_white() {
                return Some(pos);
            }
        }
        None
    }
}

/// Iterates the legal moves of one white pawn.
///
/// Candidates are tried in a fixed order: push, double push, capture left,
/// capture right, en passant left, en passant right. The order is part of
/// the crate's contract; notation parsing and the agent's tie-breaking
/// both rely on generation being deterministic.
#[derive(Debug, Clone)]
pub struct MoveIter {
    board: Board,
    from: Position,
    stage: u8,
}

impl MoveIter {
    pub fn new(board: Board, from: Position) -> MoveIter {
        MoveIter {
            board,
            from,
            stage: 0,
        }
    }

    fn push(&self) -> Option<Move> {
        let to = self.from.forward()?;
        if !self.board.at(to).is_empty() {
            return None;
        }
        Some(Move {
            from: self.from,
            to,
            kind: MoveKind::Push,
        })
    }

    fn double_push(&self) -> Option<Move> {
        if !self.from.rank().is_pawn_start() {
            return None;
        }
        let one = self.from.forward()?;
        let two = one.forward()?;
        if !self.board.at(one).is_empty() || !self.board.at(two).is_empty() {
            return None;
        }
        Some(Move {
            from: self.from,
            to: two,
            kind: MoveKind::DoublePush,
        })
    }

    fn capture(&self, to: Option<Position>) -> Option<Move> {
        let to = to?;
        if !self.board.at(to).is_black() {
            return None;
        }
        Some(Move {
            from: self.from,
            to,
            kind: MoveKind::Capture,
        })
    }

    fn en_passant(&self, beside: Option<Position>, to: Option<Position>) -> Option<Move> {
        let beside = beside?;
        let to = to?;
        let marker = self.board.en_passant()?;
        if marker != beside || !self.board.at(beside).is_black() || !self.board.at(to).is_empty() {
            return None;
        }
        Some(Move {
            from: self.from,
            to,
            kind: MoveKind::EnPassant,
        })
    }
}

impl Iterator for MoveIter {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while self.stage <= 5 {
            let stage = self.stage;
            self.stage += 1;

            let candidate = match stage {
                0 => self.push(),
                1 => self.double_push(),
                2 => self.capture(self.from.diag_left()),
                3 => self.capture(self.from.diag_right()),
                4 => self.en_passant(self.from.left(), self.from.diag_left()),
                _ => self.en_passant(self.from.right(), self.from.diag_right()),
            };

            if candidate.is_some() {
                return candidate;
            }
        }
        None
    }
}
