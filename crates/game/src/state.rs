//! Absolute game state on top of the white-normalised board.

use crate::error::{GameError, Result};
use crate::notation;
use crate::outcome::{Outcome, WinReason};
use rho_board::{Board, Colour, File, Move};
use serde::{Deserialize, Serialize};

/// One ply of played history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub colour: Colour,
    pub mv: Move,
    pub san: String,
}

/// A pawn race in progress.
///
/// The board is held in absolute orientation, White moving up the ranks.
/// The board type only generates for White, so every query and update
/// normalises first: flip when Black is to move, work, flip back. Moves
/// crossing this API are always in absolute coordinates.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Colour,
    history: Vec<MoveRecord>,
    outcome: Option<Outcome>,
}

impl Game {
    /// Start a match game: seven pawns a side, one gap file each.
    pub fn new(white_gap: File, black_gap: File) -> Game {
        Game {
            board: Board::with_gaps(white_gap, black_gap),
            to_move: Colour::White,
            history: Vec::new(),
            outcome: None,
        }
    }

    /// Start from the full eight-a-side layout.
    pub fn standard() -> Game {
        Game {
            board: Board::standard(),
            to_move: Colour::White,
            history: Vec::new(),
            outcome: None,
        }
    }

    /// Adopt an arbitrary position, evaluating it for an immediate result.
    pub fn from_board(board: Board, to_move: Colour) -> Game {
        let mut game = Game {
            board,
            to_move,
            history: Vec::new(),
            outcome: None,
        };
        game.outcome = game.detect_outcome();
        game
    }

    /// The position in absolute orientation.
    pub const fn board(&self) -> Board {
        self.board
    }

    /// The position from the mover's point of view, mover as White.
    pub fn normalized_board(&self) -> Board {
        match self.to_move {
            Colour::White => self.board,
            Colour::Black => self.board.flip(),
        }
    }

    pub const fn to_move(&self) -> Colour {
        self.to_move
    }

    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Plies played so far.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Legal moves for the side to move, in absolute coordinates and in
    /// the board's deterministic generation order.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.outcome.is_some() {
            return Vec::new();
        }
        let normalized = self.normalized_board();
        match self.to_move {
            Colour::White => normalized.moves().collect(),
            Colour::Black => normalized.moves().map(|mv| mv.flip()).collect(),
        }
    }

    /// Play one move, given in absolute coordinates.
    pub fn apply(&mut self, mv: &Move) -> Result<()> {
        if self.outcome.is_some() {
            return Err(GameError::Finished);
        }

        let mover = self.to_move;
        let normalized = self.normalized_board();
        let mv_n = match mover {
            Colour::White => *mv,
            Colour::Black => mv.flip(),
        };

        if !normalized.moves().any(|m| m == mv_n) {
            return Err(GameError::IllegalMove(mv.to_string()));
        }

        let san = notation::format(mv);
        let next = normalized.apply(&mv_n);

        self.board = match mover {
            Colour::White => next,
            Colour::Black => next.flip(),
        };
        self.history.push(MoveRecord {
            colour: mover,
            mv: *mv,
            san,
        });

        // In the normalised frame the mover is White and rank 8 is the
        // goal, whichever colour actually moved.
        if mv_n.to.rank().is_last() {
            self.outcome = Some(Outcome::Win {
                winner: mover,
                reason: WinReason::Promotion,
            });
        } else if next.count(Colour::Black) == 0 {
            self.outcome = Some(Outcome::Win {
                winner: mover,
                reason: WinReason::Elimination,
            });
        } else {
            self.to_move = mover.opponent();
            if self.normalized_board().moves().next().is_none() {
                self.outcome = Some(Outcome::Draw);
            }
        }

        Ok(())
    }

    /// Parse and play a move written in algebraic notation.
    pub fn apply_san(&mut self, san: &str) -> Result<Move> {
        if self.outcome.is_some() {
            return Err(GameError::Finished);
        }
        let mv = notation::parse(san, &self.legal_moves())?;
        self.apply(&mv)?;
        Ok(mv)
    }

    fn promoted(&self, side: Colour) -> bool {
        let oriented = match side {
            Colour::White => self.board,
            Colour::Black => self.board.flip(),
        };
        oriented.pawns().any(|pos| pos.rank().is_last())
    }

    /// Result detection for adopted positions. The opponent of the side
    /// to move acted last, so their wins are checked first.
    fn detect_outcome(&self) -> Option<Outcome> {
        let sides = [self.to_move.opponent(), self.to_move];

        for side in sides {
            if self.promoted(side) {
                return Some(Outcome::Win {
                    winner: side,
                    reason: WinReason::Promotion,
                });
            }
        }

        for side in sides {
            if self.board.count(side.opponent()) == 0 && self.board.count(side) > 0 {
                return Some(Outcome::Win {
                    winner: side,
                    reason: WinReason::Elimination,
                });
            }
        }

        if self.normalized_board().moves().next().is_none() {
            return Some(Outcome::Draw);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rho_board::{MoveKind, Position, Square};

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn board_with(white: &[&str], black: &[&str]) -> Board {
        let mut board = Board::empty();
        for s in white {
            board.set(pos(s), Square::Pawn(Colour::White));
        }
        for s in black {
            board.set(pos(s), Square::Pawn(Colour::Black));
        }
        board
    }

    fn play(game: &mut Game, sans: &[&str]) {
        for san in sans {
            game.apply_san(san).unwrap();
        }
    }

    #[test]
    fn test_new_match_game() {
        let game = Game::new(File::A, File::H);
        let board = game.board();

        assert_eq!(board.count(Colour::White), 7);
        assert_eq!(board.count(Colour::Black), 7);
        assert!(board.at(pos("a2")).is_empty());
        assert!(board.at(pos("h7")).is_empty());
        assert_eq!(game.to_move(), Colour::White);
        assert!(game.outcome().is_none());
        assert_eq!(game.legal_moves().len(), 14);
    }

    #[test]
    fn test_black_moves_in_absolute_coordinates() {
        let mut game = Game::standard();
        play(&mut game, &["e4"]);

        assert_eq!(game.to_move(), Colour::Black);
        let legal = game.legal_moves();
        assert_eq!(legal.len(), 16);
        assert!(legal
            .iter()
            .all(|mv| mv.from.rank() == rho_board::Rank::R7));

        play(&mut game, &["d5"]);
        let board = game.board();
        assert!(board.at(pos("d5")).is_black());
        assert!(board.at(pos("d7")).is_empty());
        assert!(board.at(pos("e4")).is_white());
    }

    #[test]
    fn test_history_records_san() {
        let mut game = Game::standard();
        play(&mut game, &["e4", "d5", "exd5"]);

        let sans: Vec<&str> = game.history().iter().map(|r| r.san.as_str()).collect();
        assert_eq!(sans, vec!["e4", "d5", "exd5"]);
        assert_eq!(game.history()[1].colour, Colour::Black);
        assert_eq!(game.history()[2].mv.kind, MoveKind::Capture);
        assert_eq!(game.ply(), 3);
    }

    #[test]
    fn test_illegal_move_leaves_state_untouched() {
        let mut game = Game::standard();
        let before = game.board();

        let mv = Move {
            from: pos("e2"),
            to: pos("e5"),
            kind: MoveKind::Push,
        };
        assert!(matches!(game.apply(&mv), Err(GameError::IllegalMove(_))));
        assert_eq!(game.board(), before);
        assert_eq!(game.to_move(), Colour::White);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn test_white_wins_by_promotion() {
        let mut game = Game::new(File::A, File::H);
        play(&mut game, &["h4", "a5", "h5", "a4", "h6", "a3", "h7", "a2", "h8"]);

        assert_eq!(
            game.outcome(),
            Some(Outcome::Win {
                winner: Colour::White,
                reason: WinReason::Promotion,
            })
        );
        assert_eq!(game.ply(), 9);
        assert!(game.board().at(pos("h8")).is_white());
    }

    #[test]
    fn test_black_wins_by_promotion() {
        let mut game = Game::new(File::A, File::H);
        // White crawls one square at a time and loses the race.
        play(
            &mut game,
            &["h3", "a5", "h4", "a4", "h5", "a3", "h6", "a2", "h7", "a1"],
        );

        assert_eq!(
            game.outcome(),
            Some(Outcome::Win {
                winner: Colour::Black,
                reason: WinReason::Promotion,
            })
        );
        assert!(game.board().at(pos("a1")).is_black());
    }

    #[test]
    fn test_win_by_elimination() {
        let board = board_with(&["d4"], &["e5"]);
        let mut game = Game::from_board(board, Colour::White);
        assert!(game.outcome().is_none());

        play(&mut game, &["dxe5"]);
        assert_eq!(
            game.outcome(),
            Some(Outcome::Win {
                winner: Colour::White,
                reason: WinReason::Elimination,
            })
        );
    }

    #[test]
    fn test_stalemate_is_a_draw() {
        let board = board_with(&["e4"], &["e6"]);
        let mut game = Game::from_board(board, Colour::White);

        play(&mut game, &["e5"]);
        assert_eq!(game.outcome(), Some(Outcome::Draw));
        assert_eq!(game.to_move(), Colour::Black);
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_from_board_detects_locked_position() {
        let board = board_with(&["e4"], &["e5"]);
        let game = Game::from_board(board, Colour::White);
        assert_eq!(game.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_from_board_detects_promoted_pawn() {
        let board = board_with(&["c8", "a2"], &["f5"]);
        let game = Game::from_board(board, Colour::Black);
        assert_eq!(
            game.outcome(),
            Some(Outcome::Win {
                winner: Colour::White,
                reason: WinReason::Promotion,
            })
        );
    }

    #[test]
    fn test_from_board_detects_elimination() {
        let board = board_with(&[], &["f5", "g6"]);
        let game = Game::from_board(board, Colour::White);
        assert_eq!(
            game.outcome(),
            Some(Outcome::Win {
                winner: Colour::Black,
                reason: WinReason::Elimination,
            })
        );
    }

    #[test]
    fn test_moves_rejected_after_finish() {
        let board = board_with(&["d4"], &["e5"]);
        let mut game = Game::from_board(board, Colour::White);
        play(&mut game, &["dxe5"]);

        assert_eq!(game.apply_san("e6"), Err(GameError::Finished));
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_en_passant_across_orientation_flips() {
        let mut game = Game::new(File::A, File::H);
        play(&mut game, &["d4", "g5", "d5", "e5"]);

        // Black's e7-e5 just passed d5; the window is open for one ply.
        let legal = game.legal_moves();
        let passant = legal
            .iter()
            .find(|mv| mv.kind == MoveKind::EnPassant)
            .copied()
            .unwrap();
        assert_eq!(passant.from, pos("d5"));
        assert_eq!(passant.to, pos("e6"));

        play(&mut game, &["dxe6"]);
        let board = game.board();
        assert!(board.at(pos("e6")).is_white());
        assert!(board.at(pos("e5")).is_empty());
        assert_eq!(board.count(Colour::Black), 6);
    }

    #[test]
    fn test_en_passant_window_closes_after_one_ply() {
        let mut game = Game::new(File::A, File::H);
        play(&mut game, &["d4", "g5", "d5", "e5", "b4", "g4"]);

        // The double push happened two plies ago; dxe6 is gone.
        assert!(matches!(
            game.apply_san("dxe6"),
            Err(GameError::IllegalMove(_))
        ));
        assert!(game
            .legal_moves()
            .iter()
            .all(|mv| mv.kind != MoveKind::EnPassant));
    }

    #[test]
    fn test_black_en_passant_capture() {
        let mut game = Game::new(File::A, File::H);
        play(&mut game, &["b4", "g5", "b5", "g4", "f4"]);

        // White's f2-f4 just passed g4; Black captures en passant.
        let mv = game.apply_san("gxf3").unwrap();
        assert_eq!(mv.kind, MoveKind::EnPassant);
        let board = game.board();
        assert!(board.at(pos("f3")).is_black());
        assert!(board.at(pos("f4")).is_empty());
        assert_eq!(board.count(Colour::White), 6);
    }

    #[test]
    fn test_en_passant_can_eliminate_the_last_pawn() {
        let board = board_with(&["f2"], &["g4"]);
        let mut game = Game::from_board(board, Colour::White);
        assert!(game.outcome().is_none());

        // White's double push walks into gxf3; the passed pawn was White's
        // last, so the capture ends the game.
        play(&mut game, &["f4", "gxf3"]);
        assert_eq!(
            game.outcome(),
            Some(Outcome::Win {
                winner: Colour::Black,
                reason: WinReason::Elimination,
            })
        );
        assert_eq!(game.board().count(Colour::White), 0);
        assert!(game.board().at(pos("f3")).is_black());
        assert!(game.board().at(pos("f4")).is_empty());
    }

    #[test]
    fn test_move_record_serialises() {
        let mut game = Game::standard();
        play(&mut game, &["e4"]);

        let json = serde_json::to_string(&game.history()[0]).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game.history()[0]);
    }
}
