//! The algebraic notation subset pawn races need.
//!
//! With only pawns on the board the standard notation collapses to two
//! shapes: a plain destination for a push (`d4`) and origin file, `x`,
//! destination for a capture (`dxe5`). En passant uses the capture shape;
//! a trailing `e.p.` is accepted on input and never produced on output.
//!
//! Parsing resolves text against the current list of legal moves rather
//! than reconstructing geometry, so a well-formed string naming a move
//! that is not available fails as illegal, not as ill-formed.

use crate::error::{GameError, Result};
use rho_board::{File, Move, Position, Rank};

/// Render a move in algebraic notation, by absolute coordinates.
pub fn format(mv: &Move) -> String {
    if mv.is_capture() {
        format!("{}x{}", mv.from.file().letter(), mv.to)
    } else {
        mv.to.to_string()
    }
}

enum Shape {
    Push { to: Position },
    Capture { from_file: File, to: Position },
}

fn shape_of(text: &str) -> Result<Shape> {
    let chars: Vec<char> = text.chars().collect();
    match chars.as_slice() {
        [file, rank] => Ok(Shape::Push {
            to: Position::new(File::from_char(*file)?, Rank::from_char(*rank)?),
        }),
        [from, 'x', file, rank] => Ok(Shape::Capture {
            from_file: File::from_char(*from)?,
            to: Position::new(File::from_char(*file)?, Rank::from_char(*rank)?),
        }),
        _ => Err(GameError::Notation(text.to_string())),
    }
}

/// Resolve notation against the legal moves of the current position.
pub fn parse(input: &str, legal: &[Move]) -> Result<Move> {
    let mut text = input.trim();
    if let Some(stripped) = text.strip_suffix("e.p.") {
        text = stripped.trim_end();
    }
    if text.is_empty() {
        return Err(GameError::Notation(input.to_string()));
    }

    let shape = shape_of(text)?;
    let found = legal.iter().copied().find(|mv| match shape {
        Shape::Push { to } => !mv.is_capture() && mv.to == to,
        Shape::Capture { from_file, to } => {
            mv.is_capture() && mv.from.file() == from_file && mv.to == to
        }
    });

    found.ok_or_else(|| GameError::IllegalMove(text.to_string()))
}
