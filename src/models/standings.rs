//! StandingsRow: computed, read-only ranking projection.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// One player's line in the standings. Recomputed from match history on every request.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    /// Matches played, byes included.
    pub matches: u32,
    pub draws: u32,
    /// Opponent Match Wins: sum of the current win counts of every opponent faced.
    pub omw: u32,
}

impl StandingsRow {
    /// A row for a player with no recorded matches.
    pub fn empty(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wins: 0,
            matches: 0,
            draws: 0,
            omw: 0,
        }
    }

    pub fn losses(&self) -> u32 {
        self.matches.saturating_sub(self.wins + self.draws)
    }
}
