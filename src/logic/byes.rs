//! Bye tracking: no player receives more than one bye per tournament.

use crate::models::{PlayerId, StandingsRow};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Players who have already received a bye. Only grows until the tournament is reset.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ByeTracker {
    byed: HashSet<PlayerId>,
}

impl ByeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_had_bye(&self, player_id: PlayerId) -> bool {
        self.byed.contains(&player_id)
    }

    /// Mark a player as having had a bye. Returns false if already recorded.
    pub fn record_bye(&mut self, player_id: PlayerId) -> bool {
        self.byed.insert(player_id)
    }

    /// Rows of `standings` whose player has not had a bye, in standings order.
    pub fn eligible<'a>(&self, standings: &'a [StandingsRow]) -> Vec<&'a StandingsRow> {
        standings
            .iter()
            .filter(|row| !self.has_had_bye(row.id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.byed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.byed.is_empty()
    }

    /// Forget all byes (tournament reset only).
    pub fn clear(&mut self) {
        self.byed.clear();
    }
}
