//! How a pawn race ends.

use rho_board::Colour;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Why the winning side won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// A pawn reached the far rank.
    Promotion,
    /// Every enemy pawn was captured.
    Elimination,
}

/// The result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win { winner: Colour, reason: WinReason },
    /// The side to move had no legal move.
    Draw,
}

impl Outcome {
    /// The winning side, if there is one.
    pub const fn winner(&self) -> Option<Colour> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            Outcome::Draw => None,
        }
    }

    pub const fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinReason::Promotion => write!(f, "promotion"),
            WinReason::Elimination => write!(f, "elimination"),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win { winner, reason } => write!(f, "{winner} wins by {reason}"),
            Outcome::Draw => write!(f, "drawn by stalemate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let outcome = Outcome::Win {
            winner: Colour::White,
            reason: WinReason::Promotion,
        };
        assert_eq!(outcome.to_string(), "White wins by promotion");

        let outcome = Outcome::Win {
            winner: Colour::Black,
            reason: WinReason::Elimination,
        };
        assert_eq!(outcome.to_string(), "Black wins by elimination");

        assert_eq!(Outcome::Draw.to_string(), "drawn by stalemate");
    }

    #[test]
    fn test_winner() {
        let outcome = Outcome::Win {
            winner: Colour::Black,
            reason: WinReason::Promotion,
        };
        assert_eq!(outcome.winner(), Some(Colour::Black));
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(Outcome::Draw.is_draw());
    }

    #[test]
    fn test_serialises_for_reporting() {
        let outcome = Outcome::Win {
            winner: Colour::White,
            reason: WinReason::Promotion,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("White"));
        assert!(json.contains("Promotion"));
    }
}
