//! Swiss-system tournament: library with models, standings/pairing logic and storage.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::{ByePolicy, TournamentConfig};
pub use logic::{compare_rows, compute_standings, generate_pairings, pair_round, ByeSelector, ByeTracker};
pub use models::{
    ByeCredit, MatchId, MatchResult, Outcome, Pairing, Player, PlayerId, Round, Seat, StandingsRow,
    Tournament, TournamentError, TournamentResult, BYE_ID,
};
pub use store::{MemoryStore, Snapshot, TournamentStore};
