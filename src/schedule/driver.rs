use log::debug;
use super::history::PairingHistory;
use super::round::select_round;
use super::teams::enumerate_teams;
use super::types::{Match, Player, Schedule};

/// Smallest roster (placeholder included) that can produce a match
pub const MIN_PLAYERS: usize = 4;

/// Hard ceiling on generated rounds
pub const MAX_ROUNDS: usize = 50;

/// Number of rounds to aim for.
/// `players - 1` rounds cover a full rotation of partners; the buffer gives
/// larger rosters extra rounds to cycle through limited courts.
pub fn target_round_count(player_count: usize, courts: usize) -> usize {
    let base = player_count.saturating_sub(1).max(1);
    let overflow = player_count.saturating_sub(4);
    let buffer = overflow.div_ceil(courts.max(1));
    (base + buffer).min(MAX_ROUNDS)
}

/// Builds the full rotation for `roster` on `courts` simultaneous courts.
///
/// The roster must already contain the Bye placeholder when its size is odd.
/// Rosters under four entries give an empty schedule, as does a court count
/// of zero. Generation stops early once a round can no longer be filled.
/// Identical input always gives an identical schedule.
pub fn generate_schedule(roster: &[Player], courts: usize) -> Schedule {
    if roster.len() < MIN_PLAYERS {
        debug!("roster of {} is too small to schedule", roster.len());
        return Schedule::default();
    }

    let teams = enumerate_teams(roster);
    let rounds = target_round_count(roster.len(), courts);
    debug!("{} teams, targeting {} rounds on {} courts", teams.len(), rounds, courts);

    let mut history = PairingHistory::new();
    let mut matches: Vec<Match> = Vec::new();

    for round in 1..=rounds as u32 {
        let selected = select_round(&teams, &history, courts);
        if selected.is_empty() {
            debug!("no match available for round {round}, stopping");
            break;
        }

        debug!("round {round}: {} matches", selected.len());
        for (court, (team_a, team_b)) in selected.into_iter().enumerate() {
            let m = Match {
                id: matches.len() as u32 + 1,
                round,
                court: court as u32 + 1,
                team_a,
                team_b,
            };
            history.record_match(&m);
            matches.push(m);
        }
    }

    Schedule { matches }
}
