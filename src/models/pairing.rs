//! Pairing: one entry of a round's pairing list.

use crate::models::player::{PlayerId, BYE_ID};
use crate::models::standings::StandingsRow;
use serde::{Deserialize, Serialize};

/// A player's slot in a pairing (id and display name).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
}

impl From<&StandingsRow> for Seat {
    fn from(row: &StandingsRow) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
        }
    }
}

impl From<StandingsRow> for Seat {
    fn from(row: StandingsRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

/// Either a real game between two players or a bye for one.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pairing {
    Game { one: Seat, two: Seat },
    Bye { player: Seat },
}

impl Pairing {
    pub fn is_bye(&self) -> bool {
        matches!(self, Pairing::Bye { .. })
    }

    pub fn player_id(&self) -> PlayerId {
        match self {
            Pairing::Game { one, .. } => one.id,
            Pairing::Bye { player } => player.id,
        }
    }

    pub fn player_name(&self) -> &str {
        match self {
            Pairing::Game { one, .. } => &one.name,
            Pairing::Bye { player } => &player.name,
        }
    }

    /// Second slot id; `BYE_ID` for a bye.
    pub fn opponent_id(&self) -> PlayerId {
        match self {
            Pairing::Game { two, .. } => two.id,
            Pairing::Bye { .. } => BYE_ID,
        }
    }

    /// Second slot name; empty for a bye.
    pub fn opponent_name(&self) -> &str {
        match self {
            Pairing::Game { two, .. } => &two.name,
            Pairing::Bye { .. } => "",
        }
    }

    /// Real player ids in this pairing (one for a bye, two for a game).
    pub fn player_ids(&self) -> Vec<PlayerId> {
        match self {
            Pairing::Game { one, two } => vec![one.id, two.id],
            Pairing::Bye { player } => vec![player.id],
        }
    }

    /// Flat `(id1, name1, id2, name2)` form, with the sentinel in slot two for a bye.
    pub fn to_tuple(&self) -> (PlayerId, String, PlayerId, String) {
        (
            self.player_id(),
            self.player_name().to_string(),
            self.opponent_id(),
            self.opponent_name().to_string(),
        )
    }
}
