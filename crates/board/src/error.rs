//! Board errors
//!
//! Pure domain errors with no infrastructure dependencies

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid file: {0:?} (expected a-h)")]
    InvalidFile(String),

    #[error("invalid rank: {0:?} (expected 1-8)")]
    InvalidRank(String),

    #[error("invalid position: {0:?} (expected e.g. \"e4\")")]
    InvalidPosition(String),

    #[error("invalid colour: {0:?} (expected \"W\" or \"B\")")]
    InvalidColour(String),
}
