//! Recorded match results and bye credits.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a recorded match.
pub type MatchId = Uuid;

/// Round number, starting at 1 for the first generated round.
pub type Round = u32;

/// Outcome of a match from player one's side.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerOneWins,
    PlayerTwoWins,
    Draw,
}

/// A played match between two players. Append-only.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: MatchId,
    pub player_one: PlayerId,
    pub player_one_points: u32,
    pub player_two: PlayerId,
    pub player_two_points: u32,
    pub round: Round,
    pub reported_at: DateTime<Utc>,
}

impl MatchResult {
    pub fn new(
        player_one: PlayerId,
        player_one_points: u32,
        player_two: PlayerId,
        player_two_points: u32,
        round: Round,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_one,
            player_one_points,
            player_two,
            player_two_points,
            round,
            reported_at: Utc::now(),
        }
    }

    /// More points wins; equal points is a draw.
    pub fn outcome(&self) -> Outcome {
        match self.player_one_points.cmp(&self.player_two_points) {
            std::cmp::Ordering::Greater => Outcome::PlayerOneWins,
            std::cmp::Ordering::Less => Outcome::PlayerTwoWins,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// The winner's id, or None for a draw.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome() {
            Outcome::PlayerOneWins => Some(self.player_one),
            Outcome::PlayerTwoWins => Some(self.player_two),
            Outcome::Draw => None,
        }
    }

    /// The other player in this match, if `player` took part.
    pub fn opponent_of(&self, player: PlayerId) -> Option<PlayerId> {
        if self.player_one == player {
            Some(self.player_two)
        } else if self.player_two == player {
            Some(self.player_one)
        } else {
            None
        }
    }
}

/// An unplayed match credited to one player: one win, one match, no opponent.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ByeCredit {
    pub player: PlayerId,
    pub round: Round,
    pub reported_at: DateTime<Utc>,
}

impl ByeCredit {
    pub fn new(player: PlayerId, round: Round) -> Self {
        Self {
            player,
            round,
            reported_at: Utc::now(),
        }
    }
}
