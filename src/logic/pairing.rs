//! Swiss pairing: optional bye for an odd field, then adjacent players in the standings meet.

use crate::config::{ByePolicy, TournamentConfig};
use crate::logic::byes::ByeTracker;
use crate::models::{Pairing, Seat, StandingsRow, Tournament, TournamentError, TournamentResult};
use crate::store::TournamentStore;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Chooses the bye recipient among eligible players according to a `ByePolicy`.
///
/// Remembers the size of every set it drew from at random so a seeded
/// selector can be rebuilt in the same RNG state (see `replay`).
#[derive(Clone, Debug)]
pub struct ByeSelector {
    policy: ByePolicy,
    rng: StdRng,
    draws: Vec<usize>,
}

impl ByeSelector {
    pub fn new(config: &TournamentConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            policy: config.bye_policy,
            rng,
            draws: Vec::new(),
        }
    }

    /// Rebuild a selector and advance its RNG past `draws` earlier random picks.
    pub fn replay(config: &TournamentConfig, draws: &[usize]) -> Self {
        let mut selector = Self::new(config);
        for &len in draws {
            let _ = vec![(); len].choose(&mut selector.rng);
        }
        selector.draws = draws.to_vec();
        selector
    }

    /// Sizes of the eligible sets drawn from at random so far.
    pub fn draws(&self) -> &[usize] {
        &self.draws
    }

    /// Pick one of `eligible` (in standings order). None only when `eligible` is empty.
    pub fn select<'a>(&mut self, eligible: &[&'a StandingsRow]) -> Option<&'a StandingsRow> {
        match self.policy {
            ByePolicy::Random => {
                let picked = eligible.choose(&mut self.rng).copied();
                if picked.is_some() {
                    self.draws.push(eligible.len());
                }
                picked
            }
            ByePolicy::LowestRanked => eligible.last().copied(),
        }
    }
}

/// Build the pairing list for one round from ranked standings.
///
/// For an odd `player_count` one eligible player gets a bye, which is recorded
/// in `byes`; the rest are paired 0-1, 2-3, ... in standings order. On error
/// `byes` is unchanged.
pub fn pair_round(
    player_count: usize,
    mut standings: Vec<StandingsRow>,
    byes: &mut ByeTracker,
    selector: &mut ByeSelector,
) -> TournamentResult<Vec<Pairing>> {
    if standings.len() != player_count {
        return Err(TournamentError::InconsistentStandings {
            expected: player_count,
            actual: standings.len(),
        });
    }

    let mut pairings = Vec::with_capacity(player_count.div_ceil(2));

    if player_count % 2 != 0 {
        let bye_id = {
            let eligible = byes.eligible(&standings);
            selector
                .select(&eligible)
                .map(|row| row.id)
                .ok_or(TournamentError::NoEligibleByeCandidate)?
        };
        let idx = standings
            .iter()
            .position(|row| row.id == bye_id)
            .ok_or(TournamentError::PlayerNotFound(bye_id))?;
        let row = standings.remove(idx);
        byes.record_bye(row.id);
        log::info!("bye goes to {} ({})", row.name, row.id);
        pairings.push(Pairing::Bye { player: row.into() });
    }

    for pair in standings.chunks_exact(2) {
        let (one, two) = (Seat::from(&pair[0]), Seat::from(&pair[1]));
        log::debug!("pairing {} vs {}", one.name, two.name);
        pairings.push(Pairing::Game { one, two });
    }

    Ok(pairings)
}

/// Generate the next round's pairings from the tournament's current standings.
///
/// Advances the round counter and stores the pairings as the current round on
/// success. On failure nothing changes.
pub fn generate_pairings<S: TournamentStore>(
    tournament: &mut Tournament<S>,
) -> TournamentResult<Vec<Pairing>> {
    let player_count = tournament.store.count_players();
    let standings = tournament.store.standings();
    let round = tournament.round + 1;

    let pairings = pair_round(
        player_count,
        standings,
        &mut tournament.byes,
        &mut tournament.selector,
    )
    .inspect_err(|e| log::warn!("could not pair round {}: {}", round, e))?;

    log::info!(
        "round {}: {} pairing(s) for {} player(s)",
        round,
        pairings.len(),
        player_count
    );
    tournament.round = round;
    tournament.current_pairings = pairings.clone();
    Ok(pairings)
}
