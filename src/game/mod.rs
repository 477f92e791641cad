//! Checkers move legality: board model, player tags, and the capture-chain
//! search that decides whether a piece can reach a target square.

mod board;
mod legality;
mod player;
pub mod search;

pub use board::{in_bounds, Board, Coord, Tag, DEFAULT_BOARD_SIZE, EMPTY};
pub use legality::{can_move, can_move_on, MoveRequest, Rules, StepRule};
pub use player::Player;
pub use search::{capture_path, reachable_landings, CaptureSearch, SearchState};
