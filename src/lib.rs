//! # Checkers Move
//!
//! Decides whether a piece on a square checkers-style board may move from one
//! cell to another, either by a single diagonal step or by a chain of
//! diagonal jump-captures.
//!
//! ## Modules
//!
//! - [`game`] — Board model, player tags, legality checks, capture search
//! - [`config`] — TOML rule configuration loading and validation
//! - [`error`] — Structured error types
//!
//! ```
//! use checkers_move::{can_move, Coord};
//!
//! #[rustfmt::skip]
//! let board = [
//!     0, 0, 0, 0, 0,
//!     0, 2, 0, 2, 0,
//!     1, 0, 0, 0, 0,
//!     0, 0, 0, 2, 0,
//!     0, 0, 0, 0, 0,
//! ];
//! assert_eq!(can_move(&board, Coord::new(2, 0), Coord::new(4, 2), 1, 5), Ok(true));
//! ```

pub mod config;
pub mod error;
pub mod game;

pub use config::RulesConfig;
pub use error::{BoardError, ConfigError, MoveError};
pub use game::{can_move, can_move_on, Board, Coord, MoveRequest, Player, Rules, StepRule};
