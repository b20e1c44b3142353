//! Tournament and TournamentError.

use crate::config::TournamentConfig;
use crate::logic::{ByeSelector, ByeTracker};
use crate::models::game::{MatchId, Round};
use crate::models::pairing::Pairing;
use crate::models::player::{Player, PlayerId};
use crate::models::standings::StandingsRow;
use crate::store::roster::read_roster;
use crate::store::{MemoryStore, TournamentStore};
use std::io::Read;
use thiserror::Error;

/// Errors that can occur during tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Odd field, and every player has already had a bye.
    #[error("No player is eligible for a bye: every player has already had one")]
    NoEligibleByeCandidate,

    /// Standings and player count disagree.
    #[error("Standings list {actual} player(s) but {expected} are registered")]
    InconsistentStandings { expected: usize, actual: usize },

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Player name must not be empty")]
    EmptyPlayerName,

    #[error("Player {0} cannot play against themself")]
    SelfPairing(PlayerId),

    /// The bye sentinel was used where a real player is required.
    #[error("The bye placeholder is not a player")]
    ByePlayer,

    /// A bye credit for a player who was not given this round's bye.
    #[error("Player {0} did not receive the bye this round")]
    NotByeRecipient(PlayerId),

    #[error("Player {0} has already been credited this round's bye")]
    ByeAlreadyCredited(PlayerId),

    #[error("Roster error: {0}")]
    Roster(#[from] csv::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TournamentResult<T> = Result<T, TournamentError>;

/// A Swiss tournament: the store holding players and results, plus the bye
/// tracker and round state that live only for this tournament instance.
#[derive(Debug)]
pub struct Tournament<S = MemoryStore> {
    pub(crate) store: S,
    pub(crate) byes: ByeTracker,
    pub(crate) selector: ByeSelector,
    pub(crate) config: TournamentConfig,
    /// Last generated round; 0 before the first pairing.
    pub(crate) round: Round,
    pub(crate) current_pairings: Vec<Pairing>,
}

impl Tournament<MemoryStore> {
    /// Create an empty tournament backed by an in-memory store.
    pub fn new(config: TournamentConfig) -> Self {
        Self::with_store(MemoryStore::new(), config)
    }
}

impl<S: TournamentStore> Tournament<S> {
    pub fn with_store(store: S, config: TournamentConfig) -> Self {
        Self {
            store,
            byes: ByeTracker::new(),
            selector: ByeSelector::new(&config),
            config,
            round: 0,
            current_pairings: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn byes(&self) -> &ByeTracker {
        &self.byes
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn round(&self) -> Round {
        self.round
    }

    /// Pairings of the last generated round.
    pub fn current_pairings(&self) -> &[Pairing] {
        &self.current_pairings
    }

    /// Register a player (name trimmed, must be non-empty; duplicates allowed).
    pub fn register_player(&mut self, name: &str) -> TournamentResult<PlayerId> {
        let id = self.store.register_player(name)?;
        log::debug!("registered player {} ({})", name.trim(), id);
        Ok(id)
    }

    /// Register every player from a CSV roster. Nothing is registered if the roster is invalid.
    pub fn register_roster<R: Read>(&mut self, reader: R) -> TournamentResult<Vec<PlayerId>> {
        let names = read_roster(reader)?;
        let ids = names
            .iter()
            .map(|name| self.store.register_player(name))
            .collect::<TournamentResult<Vec<_>>>()?;
        log::info!("registered {} player(s) from roster", ids.len());
        Ok(ids)
    }

    pub fn players(&self) -> Vec<Player> {
        self.store.players()
    }

    pub fn count_players(&self) -> usize {
        self.store.count_players()
    }

    pub fn standings(&self) -> Vec<StandingsRow> {
        self.store.standings()
    }

    /// Record a played match in the current round. More points wins; equal points is a draw.
    pub fn report_match(
        &mut self,
        player_one: PlayerId,
        player_one_points: u32,
        player_two: PlayerId,
        player_two_points: u32,
    ) -> TournamentResult<MatchId> {
        self.store.record_match(
            player_one,
            player_one_points,
            player_two,
            player_two_points,
            self.round,
        )
    }

    /// Credit the current round's bye (a win with no opponent) to `player`.
    ///
    /// Only the bye recipient of the current pairings may be credited, once.
    pub fn report_bye(&mut self, player: PlayerId) -> TournamentResult<()> {
        let is_recipient = self
            .current_pairings
            .iter()
            .any(|p| p.is_bye() && p.player_id() == player);
        if !is_recipient {
            return Err(TournamentError::NotByeRecipient(player));
        }
        self.store.record_bye(player, self.round)
    }

    /// Generate the next round's pairings. See `logic::generate_pairings`.
    pub fn generate_pairings(&mut self) -> TournamentResult<Vec<Pairing>> {
        crate::logic::generate_pairings(self)
    }

    /// Clear match history and start over with the same players. Bye history is cleared too.
    pub fn reset_matches(&mut self) {
        self.store.reset_matches();
        self.clear_round_state();
        log::info!("match history reset");
    }

    /// Remove all players (and their matches). Bye history is cleared too.
    pub fn reset_players(&mut self) {
        self.store.reset_players();
        self.clear_round_state();
        log::info!("players reset");
    }

    fn clear_round_state(&mut self) {
        self.byes.clear();
        self.round = 0;
        self.current_pairings.clear();
    }

    /// Recommended number of Swiss rounds for the registered field.
    pub fn rounds(&self) -> u32 {
        u32::try_from((self.count_players() + 7) / 5).unwrap_or(u32::MAX)
    }

    /// Current leader (first in standings), if anyone is registered.
    pub fn winner(&self) -> Option<StandingsRow> {
        self.standings().into_iter().next()
    }

    /// A statement naming the current leader with their record.
    pub fn winner_announcement(&self) -> Option<String> {
        self.winner().map(|w| {
            format!(
                "The winner of this tournament is {}. With {} wins, {} draws and {} opponent match wins in {} rounds.",
                w.name, w.wins, w.draws, w.omw, w.matches
            )
        })
    }
}
