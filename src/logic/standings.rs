//! Standings: win/draw/OMW tallies and the ranking comparator.

use crate::models::{ByeCredit, MatchResult, Outcome, Player, PlayerId, StandingsRow};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Ranking order: wins descending, then OMW descending.
///
/// Rows equal on both keys compare `Equal`; callers sort stably so the input
/// (registration) order decides among them.
pub fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.wins.cmp(&a.wins).then_with(|| b.omw.cmp(&a.omw))
}

/// Sort rows in place by `compare_rows`, keeping input order among ties.
pub fn rank(rows: &mut [StandingsRow]) {
    rows.sort_by(compare_rows);
}

/// Compute ranked standings for `players` (in registration order) from match history.
///
/// Results naming an unknown player are skipped; stores validate ids on insert.
pub fn compute_standings(
    players: &[Player],
    matches: &[MatchResult],
    byes: &[ByeCredit],
) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = players
        .iter()
        .map(|p| StandingsRow::empty(p.id, p.name.clone()))
        .collect();
    let index: HashMap<PlayerId, usize> = rows.iter().enumerate().map(|(i, r)| (r.id, i)).collect();

    for m in matches {
        let (Some(&one), Some(&two)) = (index.get(&m.player_one), index.get(&m.player_two)) else {
            log::warn!("skipping match {} with unregistered player", m.id);
            continue;
        };
        rows[one].matches += 1;
        rows[two].matches += 1;
        match m.outcome() {
            Outcome::PlayerOneWins => rows[one].wins += 1,
            Outcome::PlayerTwoWins => rows[two].wins += 1,
            Outcome::Draw => {
                rows[one].draws += 1;
                rows[two].draws += 1;
            }
        }
    }

    for bye in byes {
        if let Some(&i) = index.get(&bye.player) {
            rows[i].matches += 1;
            rows[i].wins += 1;
        }
    }

    // OMW needs every player's final win count, so it is a second pass.
    let wins: Vec<u32> = rows.iter().map(|r| r.wins).collect();
    for m in matches {
        let (Some(&one), Some(&two)) = (index.get(&m.player_one), index.get(&m.player_two)) else {
            continue;
        };
        rows[one].omw += wins[two];
        rows[two].omw += wins[one];
    }

    rank(&mut rows);
    rows
}
