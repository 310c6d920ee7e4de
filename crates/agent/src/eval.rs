//! Static evaluation of a pawn-race position.
//!
//! Scores are side-to-move relative on the normalised board: positive
//! favours the mover. Each pawn contributes material, a bonus for every
//! rank already crossed, and a rank-scaled bonus once nothing can stop it
//! from running. The mirror-image structure means the whole evaluation is
//! one white-only scan applied twice.

use rho_board::{Board, Position, Rank};

const PAWN_MATERIAL: i32 = 100;
const ADVANCE_WEIGHT: i32 = 12;
const PASSED_BASE: i32 = 30;
const PASSED_WEIGHT: i32 = 20;

/// Score the position for the side the board is normalised to.
pub fn evaluate(board: &Board) -> i32 {
    side_score(board) - side_score(&board.flip())
}

fn side_score(board: &Board) -> i32 {
    board.pawns().map(|pos| pawn_score(board, pos)).sum()
}

fn pawn_score(board: &Board, pos: Position) -> i32 {
    let rank = pos.rank().index() as i32;
    let mut score = PAWN_MATERIAL + ADVANCE_WEIGHT * rank;
    if is_passed(board, pos) {
        score += PASSED_BASE + PASSED_WEIGHT * rank;
    }
    score
}

/// No enemy pawn ahead on this file or either neighbour.
fn is_passed(board: &Board, pos: Position) -> bool {
    let files = [
        pos.file().offset(-1),
        Some(pos.file()),
        pos.file().offset(1),
    ];

    for rank_index in pos.rank().index() + 1..8 {
        if let Some(rank) = Rank::from_index(rank_index) {
            for file in files.iter().flatten() {
                if board.at(Position::new(*file, rank)).is_black() {
                    return false;
                }
            }
        }
    }
    true
}
