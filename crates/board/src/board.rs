//! The `u128` bitboard.
//!
//! Two bits per square, square `i` at bits `2i..2i+2`; white `01`, black
//! `10`, empty `00`. The encoding is chosen so that reversing the whole bit
//! string rotates the board 180 degrees *and* swaps the colours in one
//! operation: bit `2i` lands on bit `127 - 2i`, which is the high bit of
//! the mirrored pair. `flip()` is therefore a single `reverse_bits`, and
//! everything above this type only ever reasons about White.

use crate::movegen::{Move, MoveIter, MoveKind, PawnIter};
use crate::position::{File, Position, Rank};
use crate::square::{Colour, Square};
use std::fmt::{self, Display};

/// Starting layout: eight white pawns on rank 2, eight black pawns on
/// rank 7.
const STANDARD_RAW: u128 = 0x0000AAAA000000000000000055550000;

/// Every low-of-pair bit set; used for the per-colour popcounts.
const PAIR_LOW: u128 = 0x55555555555555555555555555555555;

/// A pawn-race position: pawn placement plus the en passant marker.
///
/// The marker, when set, names the square of a pawn that double-pushed on
/// the immediately preceding ply. It lives exactly one ply: `apply` sets it
/// after a double push and clears it after anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    raw: u128,
    en_passant: Option<Position>,
}

impl Board {
    /// A board with no pawns.
    pub const fn empty() -> Board {
        Board {
            raw: 0,
            en_passant: None,
        }
    }

    /// The full eight-a-side layout.
    pub const fn standard() -> Board {
        Board {
            raw: STANDARD_RAW,
            en_passant: None,
        }
    }

    /// The match layout: seven a side, one file per side left empty.
    pub fn with_gaps(white_gap: File, black_gap: File) -> Board {
        let mut board = Board::standard();
        board.set(Position::new(white_gap, Rank::R2), Square::Empty);
        board.set(Position::new(black_gap, Rank::R7), Square::Empty);
        board
    }

    const fn bit_offset(pos: Position) -> u32 {
        2 * pos.index() as u32
    }

    /// The contents of a square.
    pub const fn at(&self, pos: Position) -> Square {
        Square::decode((self.raw >> Self::bit_offset(pos)) & 0b11)
    }

    /// Overwrite a square.
    pub fn set(&mut self, pos: Position, square: Square) {
        let offset = Self::bit_offset(pos);
        self.raw = (self.raw & !(0b11u128 << offset)) | (square.encode() << offset);
    }

    /// The en passant marker, if a pawn double-pushed last ply.
    pub const fn en_passant(&self) -> Option<Position> {
        self.en_passant
    }

    /// Place or clear the en passant marker directly. Normal play never
    /// needs this; it exists for setting up analysis positions.
    pub fn set_en_passant(&mut self, pos: Option<Position>) {
        self.en_passant = pos;
    }

    /// Rotate the board 180 degrees and swap the colours, carrying the
    /// en passant marker through the rotation. Self-inverse.
    pub fn flip(&self) -> Board {
        Board {
            raw: self.raw.reverse_bits(),
            en_passant: self.en_passant.map(Position::flip),
        }
    }

    /// Apply a generated white move, returning the resulting position.
    ///
    /// The move must come from `moves()` on this board; `apply` performs no
    /// legality checking of its own. The result is still in white
    /// orientation; callers flip it before handing it to the opponent.
    pub fn apply(&self, mv: &Move) -> Board {
        let mut board = *self;

        board.set(mv.from, Square::Empty);
        board.set(mv.to, Square::Pawn(Colour::White));

        // An en passant capture removes the pawn that is passed by, which
        // sits beside the origin square on the destination file.
        if mv.kind == MoveKind::EnPassant {
            board.set(Position::new(mv.to.file(), mv.from.rank()), Square::Empty);
        }

        board.en_passant = if mv.kind == MoveKind::DoublePush {
            Some(mv.to)
        } else {
            None
        };

        board
    }

    /// Positions of the white pawns, a1 upward.
    ///
    /// Only White is ever iterated; to see Black, flip the board first.
    pub fn pawns(&self) -> PawnIter {
        PawnIter::new(*self)
    }

    /// Every legal white move, in deterministic order: pawns a1 upward,
    /// per pawn push, double push, captures left then right, en passant
    /// left then right. Pawn race has no check, so no filtering follows.
    pub fn moves(&self) -> impl Iterator<Item = Move> {
        let board = *self;
        self.pawns().flat_map(move |from| MoveIter::new(board, from))
    }

    /// Number of pawns of one colour, by pair-mask popcount.
    pub const fn count(&self, colour: Colour) -> u32 {
        let low = self.raw & PAIR_LOW;
        let high = (self.raw >> 1) & PAIR_LOW;
        match colour {
            Colour::White => (low & !high).count_ones(),
            Colour::Black => (high & !low).count_ones(),
        }
    }

    /// Render the board frame with rank labels and a file footer.
    pub fn render(&self, ascii: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_frame(&mut out, ascii);
        out
    }

    fn write_frame(&self, f: &mut impl fmt::Write, ascii: bool) -> fmt::Result {
        writeln!(f, "    -----------------")?;

        for rank_index in (0u8..8).rev() {
            write!(f, " {} |", rank_index + 1)?;

            for file_index in 0u8..8 {
                let square = match Position::from_index(rank_index * 8 + file_index) {
                    Some(pos) => self.at(pos),
                    None => Square::Empty,
                };
                write!(f, " {}", square.glyph(ascii))?;
            }

            writeln!(f, " |")?;
        }

        writeln!(f, "    -----------------")?;
        writeln!(f, "     A B C D E F G H")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_frame(f, false)
    }
}
