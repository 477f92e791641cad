use std::path::PathBuf;

use crate::game::{Coord, Tag};

/// Reasons a move request is rejected before (or while) its legality is decided.
///
/// These are answers to the caller, not system failures: a request that
/// passes every check yields `Ok(bool)` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("start position {start} is not player {player}'s token")]
    StartNotOwnedByPlayer { start: Coord, player: Tag },

    #[error("end position {end} is out of bounds for a {size}x{size} board")]
    EndOutOfBounds { end: Coord, size: usize },

    #[error("start position {start} is out of bounds for a {size}x{size} board")]
    StartOutOfBounds { start: Coord, size: usize },

    #[error("end position {end} is already occupied by {tag}")]
    EndOccupied { end: Coord, tag: Tag },

    #[error("capture search exceeded its budget of {limit} expansions")]
    SearchBudgetExceeded { limit: usize },

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}

impl MoveError {
    /// Stable short code for machine-readable output.
    pub fn reason(&self) -> &'static str {
        match self {
            MoveError::StartNotOwnedByPlayer { .. } => "start-not-owned-by-player",
            MoveError::EndOutOfBounds { .. } => "end-out-of-bounds",
            MoveError::StartOutOfBounds { .. } => "start-out-of-bounds",
            MoveError::EndOccupied { .. } => "end-occupied",
            MoveError::SearchBudgetExceeded { .. } => "search-budget-exceeded",
            MoveError::Board(_) => "invalid-board",
        }
    }
}

/// Errors building a [`Board`](crate::game::Board) from external data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size must be at least 1")]
    ZeroSize,

    #[error("expected {expected} cells, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("board size {0} is too large")]
    SizeTooLarge(usize),

    #[error("rules expect a {expected}x{expected} board, got {actual}x{actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("{0} cells do not form a square board")]
    NotSquare(usize),

    #[error("failed to parse {0}")]
    Parse(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
