//! Colours and square contents.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A player's colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    /// The other player.
    pub const fn opponent(self) -> Colour {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }

    /// The single-letter wire form, `'W'` or `'B'`.
    pub const fn letter(self) -> char {
        match self {
            Colour::White => 'W',
            Colour::Black => 'B',
        }
    }
}

impl FromStr for Colour {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => Ok(Colour::White),
            "B" => Ok(Colour::Black),
            _ => Err(BoardError::InvalidColour(s.to_string())),
        }
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Colour::White => write!(f, "White"),
            Colour::Black => write!(f, "Black"),
        }
    }
}

/// What a board square holds.
///
/// Two-bit encoding: white `01`, black `10`, empty `00`. The unused `11`
/// decodes as empty so that a bit-reversed board stays valid. Swapping the
/// two bits of a pair is exactly a colour swap, which is what makes the
/// whole-board `reverse_bits` flip work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Square {
    Empty,
    Pawn(Colour),
}

impl Square {
    /// Decode a two-bit pair.
    pub const fn decode(bits: u128) -> Square {
        match bits {
            0b01 => Square::Pawn(Colour::White),
            0b10 => Square::Pawn(Colour::Black),
            _ => Square::Empty,
        }
    }

    /// Encode to a two-bit pair.
    pub const fn encode(self) -> u128 {
        match self {
            Square::Pawn(Colour::White) => 0b01,
            Square::Pawn(Colour::Black) => 0b10,
            Square::Empty => 0b00,
        }
    }

    /// Swap the colour, leaving empty squares empty.
    pub const fn flip(self) -> Square {
        match self {
            Square::Pawn(c) => Square::Pawn(c.opponent()),
            Square::Empty => Square::Empty,
        }
    }

    pub const fn is_white(self) -> bool {
        matches!(self, Square::Pawn(Colour::White))
    }

    pub const fn is_black(self) -> bool {
        matches!(self, Square::Pawn(Colour::Black))
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Render glyph: Unicode pawns by default, `P`/`p`/`.` in ASCII mode.
    pub const fn glyph(self, ascii: bool) -> char {
        match (self, ascii) {
            (Square::Pawn(Colour::White), false) => '\u{2659}',
            (Square::Pawn(Colour::Black), false) => '\u{265F}',
            (Square::Empty, false) => ' ',
            (Square::Pawn(Colour::White), true) => 'P',
            (Square::Pawn(Colour::Black), true) => 'p',
            (Square::Empty, true) => '.',
        }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_parsing() {
        assert_eq!("W".parse::<Colour>().unwrap(), Colour::White);
        assert_eq!("B".parse::<Colour>().unwrap(), Colour::Black);
        assert!("w".parse::<Colour>().is_err());
        assert!("white".parse::<Colour>().is_err());
        assert!("".parse::<Colour>().is_err());
    }

    #[test]
    fn test_colour_opponent() {
        assert_eq!(Colour::White.opponent(), Colour::Black);
        assert_eq!(Colour::Black.opponent(), Colour::White);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        for sq in [
            Square::Empty,
            Square::Pawn(Colour::White),
            Square::Pawn(Colour::Black),
        ] {
            assert_eq!(Square::decode(sq.encode()), sq);
        }
        // The spare encoding is empty too.
        assert_eq!(Square::decode(0b11), Square::Empty);
    }

    #[test]
    fn test_pair_bit_swap_is_colour_swap() {
        // Swapping the two bits of an encoded pair must equal Square::flip.
        for sq in [
            Square::Empty,
            Square::Pawn(Colour::White),
            Square::Pawn(Colour::Black),
        ] {
            let bits = sq.encode();
            let swapped = ((bits & 0b01) << 1) | ((bits & 0b10) >> 1);
            assert_eq!(Square::decode(swapped), sq.flip());
        }
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Square::Pawn(Colour::White).glyph(true), 'P');
        assert_eq!(Square::Pawn(Colour::Black).glyph(true), 'p');
        assert_eq!(Square::Empty.glyph(true), '.');
        assert_eq!(Square::Empty.glyph(false), ' ');
    }
}
