//! Whole-run properties of generated schedules.

use std::collections::HashSet;

use doubles_rotation::parser::{parse_roster_text, with_bye};
use doubles_rotation::schedule::{
    generate_schedule, target_round_count, Match, PairingHistory, Player, PlayerId, Schedule,
};

fn roster(n: usize) -> Vec<Player> {
    with_bye((0..n).map(|i| format!("P{i}")).collect())
}

fn rounds(schedule: &Schedule) -> Vec<Vec<&Match>> {
    (1..=schedule.round_count())
        .map(|r| schedule.round(r).collect())
        .collect()
}

#[test]
fn fewer_than_four_entries_gives_nothing() {
    for n in 0..4 {
        let players: Vec<Player> = (0..n).map(|i| Player::new(i, format!("P{i}"))).collect();
        for courts in 0..3 {
            assert!(generate_schedule(&players, courts).is_empty());
        }
    }
}

#[test]
fn players_within_a_match_are_distinct() {
    let players = roster(11);
    for m in &generate_schedule(&players, 3).matches {
        let ids: HashSet<PlayerId> = m.player_ids().into_iter().collect();
        assert_eq!(ids.len(), 4, "match {} repeats a player", m.id);
    }
}

#[test]
fn nobody_plays_twice_in_a_round() {
    for (n, courts) in [(6, 1), (9, 2), (13, 3), (16, 4), (10, 6)] {
        let players = roster(n);
        let schedule = generate_schedule(&players, courts);
        for round in rounds(&schedule) {
            let mut seen = HashSet::new();
            for m in round {
                for id in m.player_ids() {
                    assert!(seen.insert(id), "player {id} twice in round {}", m.round);
                }
            }
        }
    }
}

#[test]
fn rounds_never_exceed_courts_or_players() {
    for (n, courts) in [(5, 1), (7, 3), (10, 2), (12, 6), (17, 4)] {
        let players = roster(n);
        let schedule = generate_schedule(&players, courts);
        assert!(!schedule.is_empty());
        for round in rounds(&schedule) {
            assert!(round.len() <= courts);
            assert!(round.len() <= n / 4);
        }
    }
}

#[test]
fn runs_full_target_when_courts_can_be_filled() {
    let players = roster(10);
    let schedule = generate_schedule(&players, 2);
    assert_eq!(schedule.round_count() as usize, target_round_count(players.len(), 2));
}

#[test]
fn identical_input_gives_identical_schedule() {
    let players = parse_roster_text("Ann, Ben, Cat, Dan, Eve, Fay, Gus, Hal, Ivy").unwrap();
    let first = generate_schedule(&players, 2);
    let second = generate_schedule(&players, 2);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn replayed_history_never_decreases() {
    let players = roster(9);
    let schedule = generate_schedule(&players, 2);
    let ids: Vec<PlayerId> = players.iter().filter(|p| !p.is_bye()).map(|p| p.id).collect();

    let snapshot = |h: &PairingHistory| -> Vec<u32> {
        let mut counts = Vec::new();
        for &a in &ids {
            counts.push(h.play_count(a));
            for &b in &ids {
                counts.push(h.partner_count(a, b));
                counts.push(h.opponent_count(a, b));
            }
        }
        counts
    };

    let mut history = PairingHistory::new();
    let mut previous = snapshot(&history);
    for round in rounds(&schedule) {
        for m in round {
            history.record_match(m);
        }
        let current = snapshot(&history);
        assert!(previous.iter().zip(&current).all(|(before, after)| after >= before));
        previous = current;
    }
}

#[test]
fn eight_players_two_courts_rotate_every_partner_before_repeating() {
    let players = roster(8);
    let schedule = generate_schedule(&players, 2);
    assert_eq!(schedule.round_count(), 9);

    let mut partnered = HashSet::new();
    for m in &schedule.matches {
        for team in [&m.team_a, &m.team_b] {
            if partnered.len() < 28 {
                assert!(partnered.insert(team.key()), "{:?} repeated early", team.key());
            }
        }
    }
    assert_eq!(partnered.len(), 28);
}

#[test]
fn four_players_cycle_through_each_split() {
    let players = parse_roster_text("A, B, C, D").unwrap();
    let schedule = generate_schedule(&players, 1);
    assert_eq!(schedule.round_count(), 3);

    let splits: HashSet<[(PlayerId, PlayerId); 2]> = schedule
        .matches
        .iter()
        .map(|m| {
            let mut keys = [m.team_a.key(), m.team_b.key()];
            keys.sort();
            keys
        })
        .collect();
    assert_eq!(splits.len(), 3);
}

#[test]
fn odd_roster_sits_out_one_real_player_per_round() {
    let players = parse_roster_text("A, B, C, D, E").unwrap();
    assert_eq!(players.len(), 6);
    let bye = players.iter().find(|p| p.is_bye()).map(|p| p.id).unwrap();

    let schedule = generate_schedule(&players, 1);
    assert_eq!(schedule.round_count(), 7);
    for m in &schedule.matches {
        assert!(!m.involves(bye));
    }

    // play time stays within one game of everyone else
    let games: Vec<usize> = players
        .iter()
        .filter(|p| !p.is_bye())
        .map(|p| schedule.matches.iter().filter(|m| m.involves(p.id)).count())
        .collect();
    let most = games.iter().max().unwrap();
    let least = games.iter().min().unwrap();
    assert!(most - least <= 1);
}

#[test]
fn zero_courts_gives_nothing() {
    assert!(generate_schedule(&roster(12), 0).is_empty());
}
