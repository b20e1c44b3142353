//! Persistence boundary: players, match history, and the derived standings.

mod memory;
pub mod roster;
pub mod snapshot;

pub use memory::MemoryStore;
pub use snapshot::Snapshot;

use crate::models::{ByeCredit, MatchId, MatchResult, Player, PlayerId, Round, StandingsRow, TournamentResult};

/// Storage the tournament runs against.
///
/// Implementations must return `standings` ranked by wins then OMW (see
/// `logic::standings::compare_rows`) and in the same order on repeated calls
/// with no writes in between.
pub trait TournamentStore {
    /// Add a player; the store assigns the id.
    fn register_player(&mut self, name: &str) -> TournamentResult<PlayerId>;

    /// Registered players in registration order.
    fn players(&self) -> Vec<Player>;

    fn count_players(&self) -> usize;

    fn standings(&self) -> Vec<StandingsRow>;

    /// Append a played match. Both players must be registered and distinct.
    fn record_match(
        &mut self,
        player_one: PlayerId,
        player_one_points: u32,
        player_two: PlayerId,
        player_two_points: u32,
        round: Round,
    ) -> TournamentResult<MatchId>;

    /// Credit a bye (one win, one match, no opponent) to a registered player.
    /// At most one credit per player per round.
    fn record_bye(&mut self, player: PlayerId, round: Round) -> TournamentResult<()>;

    fn matches(&self) -> Vec<MatchResult>;

    fn bye_credits(&self) -> Vec<ByeCredit>;

    /// Clear match history and bye credits; players stay registered.
    fn reset_matches(&mut self);

    /// Clear players and, with them, all match history.
    fn reset_players(&mut self);
}
