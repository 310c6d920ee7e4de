//! The engine that picks rho's moves.
//!
//! A fixed-depth negamax search with alpha-beta pruning sits on top of a
//! hand-tuned pawn evaluation. Both operate purely on the normalised
//! board, so the search never needs to know which colour it is playing;
//! the `MovePicker` implementation translates at the boundary.

pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use search::{Agent, WIN_SCORE};
