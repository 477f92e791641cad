use tracing::debug;

use super::board::{Board, Coord, Tag, EMPTY};
use super::player::Player;
use super::search::CaptureSearch;
use crate::config::RulesConfig;
use crate::error::{BoardError, MoveError};

/// Treatment of a plain one-square diagonal step onto an empty square.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum StepRule {
    /// Steps are never legal on their own; only capture chains count.
    Ignored,
    /// Steps toward higher rows, `(+1, +1)` and `(+1, -1)`, are legal.
    #[default]
    Forward,
    /// A step in any of the four diagonal directions is legal.
    AnyDiagonal,
}

impl StepRule {
    pub fn allows(self, start: Coord, end: Coord) -> bool {
        match self {
            StepRule::Ignored => false,
            StepRule::Forward => end.row - start.row == 1 && (end.col - start.col).abs() == 1,
            StepRule::AnyDiagonal => start.is_diagonal_step(end),
        }
    }
}

/// A request to move the piece on `start` to `end` on behalf of `player`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub start: Coord,
    pub end: Coord,
    pub player: Player,
}

impl MoveRequest {
    pub fn new(start: Coord, end: Coord, player: Player) -> Self {
        MoveRequest { start, end, player }
    }
}

/// Legality checker configured by a [`RulesConfig`].
#[derive(Debug, Clone, Default)]
pub struct Rules {
    config: RulesConfig,
}

impl Rules {
    pub fn new(config: RulesConfig) -> Self {
        Rules { config }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Decide whether `request` is a legal move on `board`.
    ///
    /// A board whose side differs from the configured `board_size` is
    /// rejected with [`BoardError::SizeMismatch`] before anything else.
    ///
    /// Checks then run in a fixed order and the first failure wins:
    /// start ownership, the degenerate `start == end` move, end bounds,
    /// start bounds, end occupancy. Surviving requests are legal when they
    /// are an allowed single step or when some capture chain lands on `end`.
    ///
    /// The ownership read is bounds-safe: an off-board start has no owner to
    /// compare, so it falls through and is reported as
    /// [`MoveError::StartOutOfBounds`] (after the end-bounds check).
    pub fn check(&self, board: &Board, request: &MoveRequest) -> Result<bool, MoveError> {
        let MoveRequest { start, end, player } = *request;
        let size = board.size();
        if size != self.config.board_size {
            debug!(size, expected = self.config.board_size, "board size mismatch");
            return Err(BoardError::SizeMismatch {
                expected: self.config.board_size,
                actual: size,
            }
            .into());
        }

        let start_on_board = match board.get(start) {
            Some(tag) if !player.owns(tag) => {
                debug!(%start, player = player.tag(), tag, "start not owned by player");
                return Err(MoveError::StartNotOwnedByPlayer {
                    start,
                    player: player.tag(),
                });
            }
            Some(_) => true,
            None => false,
        };

        if start_on_board && start == end {
            debug!(%start, "degenerate move accepted");
            return Ok(true);
        }

        if !board.in_bounds(end) {
            debug!(%end, size, "end out of bounds");
            return Err(MoveError::EndOutOfBounds { end, size });
        }

        if !start_on_board {
            debug!(%start, size, "start out of bounds");
            return Err(MoveError::StartOutOfBounds { start, size });
        }

        if let Some(tag) = board.get(end).filter(|&t| t != EMPTY) {
            debug!(%end, tag, "end occupied");
            return Err(MoveError::EndOccupied { end, tag });
        }

        if self.config.step_rule.allows(start, end) {
            debug!(%start, %end, rule = ?self.config.step_rule, "single step accepted");
            return Ok(true);
        }

        let reachable = CaptureSearch::new(board.clone(), start, player)
            .with_budget(self.config.max_expansions)
            .reaches(end)?;
        debug!(%start, %end, reachable, "capture search finished");
        Ok(reachable)
    }
}

/// Check a move on an already-built board.
pub fn can_move_on(
    board: &Board,
    start: Coord,
    end: Coord,
    player: Player,
    config: &RulesConfig,
) -> Result<bool, MoveError> {
    Rules::new(config.clone()).check(board, &MoveRequest::new(start, end, player))
}

/// Check a move on a flat, row-major list of `board_size * board_size` tags.
///
/// Uses the default rule settings apart from the board size.
pub fn can_move(
    board: &[Tag],
    start: Coord,
    end: Coord,
    player: Tag,
    board_size: usize,
) -> Result<bool, MoveError> {
    let board = Board::from_flat(board, board_size)?;
    let config = RulesConfig {
        board_size,
        ..RulesConfig::default()
    };
    can_move_on(&board, start, end, Player::new(player), &config)
}
