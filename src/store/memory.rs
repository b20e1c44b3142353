//! In-memory store: players and match history in vectors, standings computed on demand.

use crate::logic::standings::compute_standings;
use crate::models::{
    ByeCredit, MatchId, MatchResult, Player, PlayerId, Round, StandingsRow, TournamentError,
    TournamentResult, BYE_ID,
};
use crate::store::TournamentStore;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    players: Vec<Player>,
    matches: Vec<MatchResult>,
    byes: Vec<ByeCredit>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from saved contents.
    pub fn from_parts(players: Vec<Player>, matches: Vec<MatchResult>, byes: Vec<ByeCredit>) -> Self {
        Self {
            players,
            matches,
            byes,
        }
    }

    fn require_player(&self, id: PlayerId) -> TournamentResult<()> {
        if id == BYE_ID {
            return Err(TournamentError::ByePlayer);
        }
        if !self.players.iter().any(|p| p.id == id) {
            return Err(TournamentError::PlayerNotFound(id));
        }
        Ok(())
    }
}

impl TournamentStore for MemoryStore {
    fn register_player(&mut self, name: &str) -> TournamentResult<PlayerId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        let player = Player::new(name);
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    fn players(&self) -> Vec<Player> {
        self.players.clone()
    }

    fn count_players(&self) -> usize {
        self.players.len()
    }

    fn standings(&self) -> Vec<StandingsRow> {
        compute_standings(&self.players, &self.matches, &self.byes)
    }

    fn record_match(
        &mut self,
        player_one: PlayerId,
        player_one_points: u32,
        player_two: PlayerId,
        player_two_points: u32,
        round: Round,
    ) -> TournamentResult<MatchId> {
        self.require_player(player_one)?;
        self.require_player(player_two)?;
        if player_one == player_two {
            return Err(TournamentError::SelfPairing(player_one));
        }
        let result = MatchResult::new(
            player_one,
            player_one_points,
            player_two,
            player_two_points,
            round,
        );
        let id = result.id;
        self.matches.push(result);
        Ok(id)
    }

    fn record_bye(&mut self, player: PlayerId, round: Round) -> TournamentResult<()> {
        self.require_player(player)?;
        if self.byes.iter().any(|b| b.player == player && b.round == round) {
            return Err(TournamentError::ByeAlreadyCredited(player));
        }
        self.byes.push(ByeCredit::new(player, round));
        Ok(())
    }

    fn matches(&self) -> Vec<MatchResult> {
        self.matches.clone()
    }

    fn bye_credits(&self) -> Vec<ByeCredit> {
        self.byes.clone()
    }

    fn reset_matches(&mut self) {
        self.matches.clear();
        self.byes.clear();
    }

    fn reset_players(&mut self) {
        self.reset_matches();
        self.players.clear();
    }
}
