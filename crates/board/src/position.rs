//! Files, ranks and square coordinates.
//!
//! Coordinates are algebraic: files `a`-`h` left to right, ranks `1`-`8`
//! bottom to top, with White at the bottom. Directional helpers are
//! oriented for the side whose pawns move toward rank 8; `rho-game` flips
//! the board rather than the directions when Black is to move.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A board file (column), `a` through `h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct File(u8);

impl File {
    pub const A: File = File(0);
    pub const B: File = File(1);
    pub const C: File = File(2);
    pub const D: File = File(3);
    pub const E: File = File(4);
    pub const F: File = File(5);
    pub const G: File = File(6);
    pub const H: File = File(7);

    /// Create a file from a 0-based index (`0` = `a`).
    pub const fn from_index(index: u8) -> Option<File> {
        if index < 8 {
            Some(File(index))
        } else {
            None
        }
    }

    /// Parse a file letter, case-insensitively.
    pub fn from_char(c: char) -> Result<File, BoardError> {
        match c.to_ascii_lowercase() {
            l @ 'a'..='h' => Ok(File(l as u8 - b'a')),
            _ => Err(BoardError::InvalidFile(c.to_string())),
        }
    }

    /// 0-based index, `0` = `a`.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Lowercase file letter.
    pub const fn letter(self) -> char {
        (b'a' + self.0) as char
    }

    /// Mirror the file left-right (`a` <-> `h`).
    pub const fn flip(self) -> File {
        File(7 - self.0)
    }

    /// Step `delta` files to the right (negative = left), if still on the
    /// board.
    pub fn offset(self, delta: i8) -> Option<File> {
        let n = self.0 as i8 + delta;
        if (0..8).contains(&n) {
            Some(File(n as u8))
        } else {
            None
        }
    }
}

impl FromStr for File {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => File::from_char(c),
            _ => Err(BoardError::InvalidFile(s.to_string())),
        }
    }
}

impl Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A board rank (row), `1` through `8`. Rank 1 is White's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const R1: Rank = Rank(0);
    pub const R2: Rank = Rank(1);
    pub const R3: Rank = Rank(2);
    pub const R4: Rank = Rank(3);
    pub const R5: Rank = Rank(4);
    pub const R6: Rank = Rank(5);
    pub const R7: Rank = Rank(6);
    pub const R8: Rank = Rank(7);

    /// Create a rank from a 0-based index (`0` = rank 1).
    pub const fn from_index(index: u8) -> Option<Rank> {
        if index < 8 {
            Some(Rank(index))
        } else {
            None
        }
    }

    /// Parse a rank digit (`'1'`-`'8'`).
    pub fn from_char(c: char) -> Result<Rank, BoardError> {
        match c {
            '1'..='8' => Ok(Rank(c as u8 - b'1')),
            _ => Err(BoardError::InvalidRank(c.to_string())),
        }
    }

    /// 0-based index, `0` = rank 1.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 1-based rank number as printed in algebraic notation.
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// Mirror the rank top-bottom (rank 1 <-> rank 8).
    pub const fn flip(self) -> Rank {
        Rank(7 - self.0)
    }

    /// Step `delta` ranks forward (negative = backward), if still on the
    /// board.
    pub fn offset(self, delta: i8) -> Option<Rank> {
        let n = self.0 as i8 + delta;
        if (0..8).contains(&n) {
            Some(Rank(n as u8))
        } else {
            None
        }
    }

    /// True for rank 2, the rank white pawns double-push from.
    pub const fn is_pawn_start(self) -> bool {
        self.0 == 1
    }

    /// True for rank 8, the promotion rank in white orientation.
    pub const fn is_last(self) -> bool {
        self.0 == 7
    }
}

impl FromStr for Rank {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::from_char(c),
            _ => Err(BoardError::InvalidRank(s.to_string())),
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    file: File,
    rank: Rank,
}

impl Position {
    /// Create a position from a file and a rank.
    pub const fn new(file: File, rank: Rank) -> Position {
        Position { file, rank }
    }

    /// Create a position from a square index in `0..64` (a1 = 0, h8 = 63).
    pub const fn from_index(index: u8) -> Option<Position> {
        if index < 64 {
            Some(Position {
                file: File(index % 8),
                rank: Rank(index / 8),
            })
        } else {
            None
        }
    }

    /// Square index in `0..64`: `rank * 8 + file`.
    pub const fn index(self) -> u8 {
        self.rank.0 * 8 + self.file.0
    }

    /// The file of this square.
    pub const fn file(self) -> File {
        self.file
    }

    /// The rank of this square.
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Rotate the square 180 degrees (a1 <-> h8).
    pub const fn flip(self) -> Position {
        Position {
            file: self.file.flip(),
            rank: self.rank.flip(),
        }
    }

    /// One rank forward (toward rank 8), if on the board.
    pub fn forward(self) -> Option<Position> {
        Some(Position::new(self.file, self.rank.offset(1)?))
    }

    /// One file to the left (toward `a`), same rank.
    pub fn left(self) -> Option<Position> {
        Some(Position::new(self.file.offset(-1)?, self.rank))
    }

    /// One file to the right (toward `h`), same rank.
    pub fn right(self) -> Option<Position> {
        Some(Position::new(self.file.offset(1)?, self.rank))
    }

    /// Forward-left diagonal, the white capture square toward `a`.
    pub fn diag_left(self) -> Option<Position> {
        self.forward().and_then(|p| p.left())
    }

    /// Forward-right diagonal, the white capture square toward `h`.
    pub fn diag_right(self) -> Option<Position> {
        self.forward().and_then(|p| p.right())
    }
}

impl FromStr for Position {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => Ok(Position::new(
                File::from_char(f)?,
                Rank::from_char(r).map_err(|_| BoardError::InvalidPosition(s.to_string()))?,
            )),
            _ => Err(BoardError::InvalidPosition(s.to_string())),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_parsing() {
        assert_eq!("a".parse::<File>().unwrap(), File::A);
        assert_eq!("H".parse::<File>().unwrap(), File::H);
        assert!("i".parse::<File>().is_err());
        assert!("ab".parse::<File>().is_err());
        assert!("".parse::<File>().is_err());
    }

    #[test]
    fn test_rank_parsing() {
        assert_eq!("1".parse::<Rank>().unwrap().index(), 0);
        assert_eq!("8".parse::<Rank>().unwrap().number(), 8);
        assert!("0".parse::<Rank>().is_err());
        assert!("9".parse::<Rank>().is_err());
    }

    #[test]
    fn test_position_parsing_and_display() {
        let pos: Position = "e4".parse().unwrap();
        assert_eq!(pos.file(), File::E);
        assert_eq!(pos.rank().number(), 4);
        assert_eq!(pos.to_string(), "e4");

        assert!("e9".parse::<Position>().is_err());
        assert!("z4".parse::<Position>().is_err());
        assert!("e44".parse::<Position>().is_err());
    }

    #[test]
    fn test_index_round_trip() {
        for i in 0..64 {
            let pos = Position::from_index(i).unwrap();
            assert_eq!(pos.index(), i);
        }
        assert!(Position::from_index(64).is_none());
    }

    #[test]
    fn test_flip() {
        let a1: Position = "a1".parse().unwrap();
        let h8: Position = "h8".parse().unwrap();
        assert_eq!(a1.flip(), h8);
        assert_eq!(h8.flip(), a1);

        let d3: Position = "d3".parse().unwrap();
        assert_eq!(d3.flip().to_string(), "e6");
        assert_eq!(d3.flip().flip(), d3);
    }

    #[test]
    fn test_directions_on_the_edge() {
        let a4: Position = "a4".parse().unwrap();
        assert!(a4.left().is_none());
        assert!(a4.diag_left().is_none());
        assert_eq!(a4.right().unwrap().to_string(), "b4");

        let h8: Position = "h8".parse().unwrap();
        assert!(h8.forward().is_none());
        assert!(h8.diag_left().is_none());
        assert!(h8.diag_right().is_none());
    }

    #[test]
    fn test_forward_chain() {
        let e2: Position = "e2".parse().unwrap();
        let e4 = e2.forward().unwrap().forward().unwrap();
        assert_eq!(e4.to_string(), "e4");
    }
}
