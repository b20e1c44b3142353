//! Player data structure and the bye sentinel id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches, standings and pairings).
pub type PlayerId = Uuid;

/// Sentinel id in the second slot of a bye pairing. Never assigned to a real player.
pub const BYE_ID: PlayerId = Uuid::nil();

/// A registered player. Never mutated after registration.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a new player with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
