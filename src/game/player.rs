use std::fmt;

use super::board::{Tag, EMPTY};

/// The side asking to move, identified by the tag its pieces carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Player(Tag);

impl Player {
    pub const ONE: Player = Player(1);
    pub const TWO: Player = Player(2);

    pub const fn new(tag: Tag) -> Self {
        Player(tag)
    }

    pub fn tag(self) -> Tag {
        self.0
    }

    /// Get the other player of the standard two-player set
    pub fn other(self) -> Player {
        match self {
            Player::ONE => Player::TWO,
            Player::TWO => Player::ONE,
            Player(tag) => Player(tag),
        }
    }

    /// True if a cell holding `tag` belongs to this player.
    pub fn owns(self, tag: Tag) -> bool {
        tag == self.0
    }

    /// Anything on the board that is not ours can be jumped.
    pub fn can_capture(self, tag: Tag) -> bool {
        tag != EMPTY && tag != self.0
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::ONE
    }
}

impl From<Tag> for Player {
    fn from(tag: Tag) -> Self {
        Player(tag)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
