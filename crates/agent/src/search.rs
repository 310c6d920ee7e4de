//! Fixed-depth negamax with alpha-beta pruning.
//!
//! The search works entirely in the normalised frame: the mover is always
//! White, and recursion flips the board instead of switching colour. Wins
//! happen only as a direct effect of the move just played (a promotion or
//! a final capture), which keeps terminal detection on the edge rather
//! than at the node.

use crate::eval::evaluate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rho_board::{Board, Colour, File, Move};
use rho_game::{Game, MovePicker};
use tracing::debug;

/// Score of a certain win at the root. Deeper wins score lower, so the
/// search prefers the shortest path and drags its feet when losing.
pub const WIN_SCORE: i32 = 100_000;

const INFINITY: i32 = i32::MAX;

/// A search agent with a fixed depth and a seedable tie-breaker.
#[derive(Debug)]
pub struct Agent {
    depth: u32,
    rng: StdRng,
}

impl Agent {
    /// An agent searching `depth` plies, with entropy-seeded tie-breaking.
    pub fn new(depth: u32) -> Agent {
        Agent {
            depth: depth.max(1),
            rng: StdRng::from_entropy(),
        }
    }

    /// A deterministic agent for tests and reproducible matches.
    pub fn with_seed(depth: u32, seed: u64) -> Agent {
        Agent {
            depth: depth.max(1),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Pick a move on a normalised board, mover as White. Returns `None`
    /// only when the mover has no legal move.
    pub fn choose(&mut self, board: &Board) -> Option<Move> {
        let mut best: Vec<Move> = Vec::new();
        let mut best_score = -INFINITY;

        // Every root move is searched with a full window so that ties are
        // real ties; pruning below the root still does its work.
        for mv in board.moves() {
            let score = Self::score_move(board, &mv, self.depth, -INFINITY, INFINITY, 0);
            if score > best_score {
                best_score = score;
                best.clear();
            }
            if score == best_score {
                best.push(mv);
            }
        }

        let chosen = best.choose(&mut self.rng).copied();
        if let Some(mv) = chosen {
            debug!(%mv, score = best_score, depth = self.depth, "agent chose");
        }
        chosen
    }

    /// The move just played wins on the spot: it promotes, or it captures
    /// the last enemy pawn.
    fn is_winning(board: &Board, mv: &Move) -> bool {
        mv.to.rank().is_last() || (mv.is_capture() && board.count(Colour::Black) == 1)
    }

    fn score_move(board: &Board, mv: &Move, depth: u32, alpha: i32, beta: i32, ply: i32) -> i32 {
        if Self::is_winning(board, mv) {
            return WIN_SCORE - ply;
        }
        let next = board.apply(mv).flip();
        if depth <= 1 {
            -evaluate(&next)
        } else {
            -Self::negamax(&next, depth - 1, -beta, -alpha, ply + 1)
        }
    }

    fn negamax(board: &Board, depth: u32, mut alpha: i32, beta: i32, ply: i32) -> i32 {
        let mut moves = board.moves().peekable();
        if moves.peek().is_none() {
            // Stalemate: drawn, worth nothing to either side.
            return 0;
        }

        let mut best = -INFINITY;
        for mv in moves {
            let score = Self::score_move(board, &mv, depth, alpha, beta, ply);
            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break;
            }
        }
        best
    }
}

impl MovePicker for Agent {
    fn pick(&mut self, game: &Game) -> Option<Move> {
        let normalized = game.normalized_board();
        let mv = self.choose(&normalized)?;
        Some(match game.to_move() {
            Colour::White => mv,
            Colour::Black => mv.flip(),
        })
    }

    fn choose_gaps(&mut self) -> (File, File) {
        let white = File::from_index(self.rng.gen_range(0..8u8)).unwrap_or(File::A);
        let black = File::from_index(self.rng.gen_range(0..8u8)).unwrap_or(File::H);
        (white, black)
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

    #[test]
    fn test_is_winning() {
        let board = board_with(&["e7", "d4"], &["g5"]);
        let promote = Move {
            from: pos("e7"),
            to: pos("e8"),
            kind: MoveKind::Push,
        };
        assert!(Agent::is_winning(&board, &promote));

        let push = Move {
            from: pos("d4"),
            to: pos("d5"),
            kind: MoveKind::Push,
        };
        assert!(!Agent::is_winning(&board, &push));

        // A capture only wins when it takes the last enemy pawn.
        let board = board_with(&["f4"], &["g5"]);
        let capture = Move {
            from: pos("f4"),
            to: pos("g5"),
            kind: MoveKind::Capture,
        };
        assert!(Agent::is_winning(&board, &capture));

        let board = board_with(&["f4"], &["g5", "a7"]);
        assert!(!Agent::is_winning(&board, &capture));
    }

    #[test]
    fn test_choose_returns_none_when_stuck() {
        let board = board_with(&["e4"], &["e5"]);
        let mut agent = Agent::with_seed(3, 7);
        assert!(agent.choose(&board).is_none());
    }

    #[test]
    fn test_depth_floor() {
        let agent = Agent::with_seed(0, 1);
        assert_eq!(agent.depth(), 1);
    }
}
