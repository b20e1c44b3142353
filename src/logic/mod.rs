//! Tournament business logic: standings ranking, bye tracking, pairing.

mod byes;
mod pairing;
pub mod standings;

pub use byes::ByeTracker;
pub use pairing::{generate_pairings, pair_round, ByeSelector};
pub use standings::{compare_rows, compute_standings};
