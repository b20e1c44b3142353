//! JSON snapshots of a whole tournament: players, history, byes and round state.

use crate::config::TournamentConfig;
use crate::logic::{ByeSelector, ByeTracker};
use crate::models::{ByeCredit, MatchResult, Pairing, Player, Round, Tournament, TournamentResult};
use crate::store::{MemoryStore, TournamentStore};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: TournamentConfig,
    pub players: Vec<Player>,
    pub matches: Vec<MatchResult>,
    #[serde(default)]
    pub bye_credits: Vec<ByeCredit>,
    #[serde(default)]
    pub byes: ByeTracker,
    pub round: Round,
    #[serde(default)]
    pub current_pairings: Vec<Pairing>,
    /// Eligible-set sizes of past random bye picks, replayed on restore.
    #[serde(default)]
    pub bye_draws: Vec<usize>,
}

impl Snapshot {
    /// Capture the state of any tournament.
    pub fn capture<S: TournamentStore>(tournament: &Tournament<S>) -> Self {
        let store = tournament.store();
        Self {
            config: tournament.config().clone(),
            players: store.players(),
            matches: store.matches(),
            bye_credits: store.bye_credits(),
            byes: tournament.byes().clone(),
            round: tournament.round(),
            current_pairings: tournament.current_pairings().to_vec(),
            bye_draws: tournament.selector.draws().to_vec(),
        }
    }

    /// Rebuild an in-memory tournament.
    ///
    /// The bye RNG is reseeded from the config and advanced past the recorded
    /// draws, so a seeded tournament picks the same next bye as before saving.
    /// Unseeded tournaments draw from fresh entropy either way.
    pub fn restore(self) -> Tournament<MemoryStore> {
        let store = MemoryStore::from_parts(self.players, self.matches, self.bye_credits);
        let mut tournament = Tournament::with_store(store, self.config);
        tournament.byes = self.byes;
        tournament.round = self.round;
        tournament.current_pairings = self.current_pairings;
        tournament.selector = ByeSelector::replay(&tournament.config, &self.bye_draws);
        tournament
    }

    pub fn to_json(&self) -> TournamentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> TournamentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self, path: &Path) -> TournamentResult<()> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("saved tournament snapshot to {}", path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> TournamentResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}
