//! Data structures for the Swiss tournament: players, results, standings, pairings, tournament.

mod game;
mod pairing;
mod player;
mod standings;
mod tournament;

pub use game::{ByeCredit, MatchId, MatchResult, Outcome, Round};
pub use pairing::{Pairing, Seat};
pub use player::{Player, PlayerId, BYE_ID};
pub use standings::StandingsRow;
pub use tournament::{Tournament, TournamentError, TournamentResult};
