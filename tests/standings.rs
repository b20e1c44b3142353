//! Integration tests for standings: tallies, OMW tie-break, ordering stability.

use std::cmp::Ordering;
use swiss_tournament::{
    compare_rows, compute_standings, ByeCredit, MatchResult, Player, StandingsRow, Tournament,
    TournamentConfig,
};

fn tournament_with_players(n: usize) -> (Tournament, Vec<swiss_tournament::PlayerId>) {
    let mut t = Tournament::new(TournamentConfig::default());
    let ids = (0..n)
        .map(|i| t.register_player(&format!("P{i}")).unwrap())
        .collect();
    (t, ids)
}

#[test]
fn new_players_start_level_in_registration_order() {
    let (t, ids) = tournament_with_players(4);
    let standings = t.standings();
    assert_eq!(standings.len(), 4);
    for (row, id) in standings.iter().zip(&ids) {
        assert_eq!(row.id, *id);
        assert_eq!((row.wins, row.matches, row.draws, row.omw), (0, 0, 0, 0));
    }
}

#[test]
fn equal_wins_rank_higher_omw_first() {
    let (mut t, ids) = tournament_with_players(4);
    t.report_match(ids[3], 2, ids[2], 0).unwrap();
    t.report_match(ids[0], 1, ids[1], 1).unwrap();

    let standings = t.standings();
    let order: Vec<_> = standings.iter().map(|r| r.id).collect();
    // P2 lost to a one-win player, so outranks P0 and P1 on OMW.
    assert_eq!(order, vec![ids[3], ids[2], ids[0], ids[1]]);
    assert_eq!(standings[1].omw, 1);
    assert_eq!(standings[2].omw, 0);
}

#[test]
fn compare_rows_orders_by_wins_then_omw() {
    let mut a = StandingsRow::empty(uuid::Uuid::new_v4(), "A");
    let mut b = StandingsRow::empty(uuid::Uuid::new_v4(), "B");
    a.wins = 2;
    b.wins = 2;
    a.omw = 3;
    b.omw = 5;
    assert_eq!(compare_rows(&a, &b), Ordering::Greater);
    assert_eq!(compare_rows(&b, &a), Ordering::Less);

    b.wins = 1;
    assert_eq!(compare_rows(&a, &b), Ordering::Less);

    b.wins = 2;
    b.omw = 3;
    assert_eq!(compare_rows(&a, &b), Ordering::Equal);
}

#[test]
fn draws_count_as_matches_not_wins() {
    let (mut t, ids) = tournament_with_players(2);
    t.report_match(ids[0], 2, ids[1], 2).unwrap();
    for row in t.standings() {
        assert_eq!(row.wins, 0);
        assert_eq!(row.draws, 1);
        assert_eq!(row.matches, 1);
        assert_eq!(row.losses(), 0);
    }
}

#[test]
fn omw_counts_each_meeting_with_an_opponent() {
    let players: Vec<Player> = ["A", "B", "C"].iter().map(|n| Player::new(*n)).collect();
    let (a, b, c) = (players[0].id, players[1].id, players[2].id);
    let matches = vec![
        MatchResult::new(a, 1, b, 0, 1),
        MatchResult::new(a, 1, b, 0, 2),
        MatchResult::new(c, 1, a, 0, 3),
    ];
    let standings = compute_standings(&players, &matches, &[]);

    let row = |id| standings.iter().find(|r| r.id == id).unwrap();
    assert_eq!(row(a).wins, 2);
    assert_eq!(row(a).matches, 3);
    // B met A (2 wins) twice.
    assert_eq!(row(b).omw, 4);
    assert_eq!(row(c).omw, 2);
    assert_eq!(row(a).omw, 1);
    assert_eq!(standings[0].id, a);
    assert_eq!(row(b).losses(), 2);
}

#[test]
fn bye_credit_is_a_win_without_opponent() {
    let players: Vec<Player> = ["A", "B", "C"].iter().map(|n| Player::new(*n)).collect();
    let (a, b, c) = (players[0].id, players[1].id, players[2].id);
    let matches = vec![MatchResult::new(a, 0, b, 1, 1)];
    let byes = vec![ByeCredit::new(c, 1)];
    let standings = compute_standings(&players, &matches, &byes);

    let row = |id| standings.iter().find(|r| r.id == id).unwrap();
    assert_eq!((row(c).wins, row(c).matches, row(c).omw), (1, 1, 0));
    assert_eq!(row(a).omw, 1);
    assert_eq!(row(b).omw, 0);

    let total: u32 = standings.iter().map(|r| r.matches).sum();
    assert_eq!(total as usize, 2 * matches.len() + byes.len());
}

#[test]
fn standings_are_stable_between_reads() {
    let (mut t, ids) = tournament_with_players(8);
    t.report_match(ids[0], 1, ids[1], 0).unwrap();
    t.report_match(ids[2], 1, ids[3], 0).unwrap();
    t.report_match(ids[4], 1, ids[5], 1).unwrap();
    assert_eq!(t.standings(), t.standings());
}

#[test]
fn standings_cover_every_registered_player() {
    let (mut t, ids) = tournament_with_players(5);
    t.report_match(ids[1], 1, ids[4], 0).unwrap();
    let mut seen: Vec<_> = t.standings().iter().map(|r| r.id).collect();
    let mut expected = ids.clone();
    seen.sort();
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn winner_and_rounds() {
    let (mut t, ids) = tournament_with_players(8);
    assert_eq!(t.rounds(), 3);
    t.report_match(ids[5], 3, ids[0], 1).unwrap();

    let winner = t.winner().unwrap();
    assert_eq!(winner.id, ids[5]);
    let statement = t.winner_announcement().unwrap();
    assert!(statement.contains("P5"));
    assert!(statement.contains("1 wins"));

    t.reset_players();
    assert!(t.winner().is_none());
    assert!(t.winner_announcement().is_none());
    assert_eq!(t.rounds(), 1);
}
