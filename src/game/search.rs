//! Depth-first search over chains of jump-captures.
//!
//! Every branch owns its own [`Board`] snapshot with the pieces it has
//! captured already removed, so no piece can be jumped twice within one
//! chain and sibling branches never observe each other's captures. Each
//! jump removes one piece from its branch, which bounds chain length by the
//! number of pieces on the board and makes cycle detection unnecessary.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::board::{Board, Coord};
use super::player::Player;
use crate::error::MoveError;

/// Jump offsets, tried in this order from every position.
pub const JUMPS: [(isize, isize); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];

/// A candidate position plus the board as it looks after the captures made to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub position: Coord,
    pub board: Board,
}

impl SearchState {
    pub fn new(position: Coord, board: Board) -> Self {
        SearchState { position, board }
    }
}

/// Attempt a single jump-capture from `state` along `(dr, dc)`.
///
/// Legal iff the landing square is on the board and empty and the square
/// jumped over holds a piece `player` may capture. The returned state owns a
/// fresh board with that piece removed.
pub fn jump(state: &SearchState, (dr, dc): (isize, isize), player: Player) -> Option<SearchState> {
    let landing = state.position.offset(dr, dc)?;
    if !state.board.is_empty_at(landing) {
        return None;
    }
    let between = state.position.offset(dr / 2, dc / 2)?;
    let victim = state.board.get(between)?;
    if !player.can_capture(victim) {
        return None;
    }
    Some(SearchState::new(landing, state.board.with_cleared(between)))
}

/// All single jump-captures available from `state`, in [`JUMPS`] order.
pub fn children(state: &SearchState, player: Player) -> impl Iterator<Item = SearchState> + '_ {
    JUMPS.iter().filter_map(move |&dir| jump(state, dir, player))
}

struct Frame {
    state: SearchState,
    path: Vec<Coord>,
}

/// Explicit-stack driver for the capture-chain search.
pub struct CaptureSearch {
    player: Player,
    stack: Vec<Frame>,
    expanded: usize,
    max_expansions: Option<usize>,
}

impl CaptureSearch {
    pub fn new(board: Board, start: Coord, player: Player) -> Self {
        CaptureSearch {
            player,
            stack: vec![Frame {
                state: SearchState::new(start, board),
                path: Vec::new(),
            }],
            expanded: 0,
            max_expansions: None,
        }
    }

    /// Cap the number of positions expanded; `None` means unlimited.
    pub fn with_budget(mut self, max_expansions: Option<usize>) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Number of positions popped and expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    fn pop(&mut self) -> Result<Option<Frame>, MoveError> {
        if self.stack.is_empty() {
            return Ok(None);
        }
        if let Some(limit) = self.max_expansions {
            if self.expanded >= limit {
                debug!(limit, "capture search budget exhausted");
                return Err(MoveError::SearchBudgetExceeded { limit });
            }
        }
        self.expanded += 1;
        Ok(self.stack.pop())
    }

    /// Run until some chain lands on `end`, returning the landing squares of
    /// that chain, or `None` once every chain is exhausted.
    pub fn find(&mut self, end: Coord) -> Result<Option<Vec<Coord>>, MoveError> {
        while let Some(frame) = self.pop()? {
            trace!(position = %frame.state.position, depth = frame.path.len(), "expanding");
            let mut found = None;
            for child in children(&frame.state, self.player) {
                let mut path = frame.path.clone();
                path.push(child.position);
                if child.position == end && found.is_none() {
                    found = Some(path.clone());
                }
                self.stack.push(Frame { state: child, path });
            }
            if let Some(path) = found {
                debug!(%end, jumps = path.len(), expanded = self.expanded, "capture chain found");
                return Ok(Some(path));
            }
        }
        debug!(%end, expanded = self.expanded, "no capture chain reaches target");
        Ok(None)
    }

    /// Run until some chain lands on `end`.
    pub fn reaches(&mut self, end: Coord) -> Result<bool, MoveError> {
        Ok(self.find(end)?.is_some())
    }

    /// Exhaust the search and collect every square some chain lands on.
    pub fn landings(mut self) -> Result<BTreeSet<Coord>, MoveError> {
        let mut seen = BTreeSet::new();
        while let Some(frame) = self.pop()? {
            for child in children(&frame.state, self.player) {
                seen.insert(child.position);
                self.stack.push(Frame {
                    state: child,
                    path: Vec::new(),
                });
            }
        }
        Ok(seen)
    }
}

/// Landing squares of one capture chain from `start` to `end`, if any exists.
pub fn capture_path(board: &Board, start: Coord, end: Coord, player: Player) -> Option<Vec<Coord>> {
    match CaptureSearch::new(board.clone(), start, player).find(end) {
        Ok(path) => path,
        Err(_) => unreachable!("unbounded search cannot exceed a budget"),
    }
}

/// Every square reachable from `start` by some capture chain.
pub fn reachable_landings(board: &Board, start: Coord, player: Player) -> BTreeSet<Coord> {
    match CaptureSearch::new(board.clone(), start, player).landings() {
        Ok(seen) => seen,
        Err(_) => unreachable!("unbounded search cannot exceed a budget"),
    }
}
