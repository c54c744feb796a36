use std::cmp::Ordering;
use std::collections::HashSet;
use super::history::PairingHistory;
use super::scoring::match_penalty;
use super::types::{PlayerId, Team};

/// Writes the decimal digits of `n` into the tail of `buf`
fn decimal_digits(n: u32, buf: &mut [u8; 10]) -> &[u8] {
    let mut n = n;
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    &buf[start..]
}

/// Orders ids as their decimal strings would sort, so 10 comes before 2
fn decimal_cmp(a: PlayerId, b: PlayerId) -> Ordering {
    let mut buf_a = [0u8; 10];
    let mut buf_b = [0u8; 10];
    decimal_digits(a, &mut buf_a).cmp(decimal_digits(b, &mut buf_b))
}

/// A possible match for the round being built
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub team_a: &'a Team,
    pub team_b: &'a Team,
    pub penalty: u32,
    /// The four ids in decimal-string order. Comparing these element-wise
    /// orders candidates the same way as their joined `tie_key` strings.
    key_ids: [PlayerId; 4],
}

impl<'a> Candidate<'a> {
    fn new(team_a: &'a Team, team_b: &'a Team, history: &PairingHistory) -> Self {
        let [a1, a2] = team_a.ids();
        let [b1, b2] = team_b.ids();
        let mut key_ids = [a1, a2, b1, b2];
        key_ids.sort_by(|x, y| decimal_cmp(*x, *y));

        Self {
            team_a,
            team_b,
            penalty: match_penalty(team_a, team_b, history),
            key_ids,
        }
    }

    /// Tie-break key: the four ids as strings, sorted, joined with '-'
    pub fn tie_key(&self) -> String {
        let ids: Vec<String> = self.key_ids.iter().map(|id| id.to_string()).collect();
        ids.join("-")
    }

    fn cmp_key(&self, other: &Self) -> Ordering {
        self.key_ids
            .iter()
            .zip(&other.key_ids)
            .map(|(a, b)| decimal_cmp(*a, *b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    fn player_ids(&self) -> [PlayerId; 4] {
        let [a1, a2] = self.team_a.ids();
        let [b1, b2] = self.team_b.ids();
        [a1, a2, b1, b2]
    }

    fn by_penalty_then_key(&self, other: &Self) -> Ordering {
        self.penalty
            .cmp(&other.penalty)
            .then_with(|| self.cmp_key(other))
    }
}

/// Every pair of teams that share no player, scored against `history`
/// and sorted best first
pub fn ranked_candidates<'a>(teams: &'a [Team], history: &PairingHistory) -> Vec<Candidate<'a>> {
    let mut candidates = Vec::new();
    for (i, team_a) in teams.iter().enumerate() {
        for team_b in &teams[i + 1..] {
            if team_a.is_disjoint(team_b) {
                candidates.push(Candidate::new(team_a, team_b, history));
            }
        }
    }

    // Stable sort: candidates with equal penalty and key keep enumeration order
    candidates.sort_by(|a, b| a.by_penalty_then_key(b));
    candidates
}

/// Picks up to `courts` matches for one round so that nobody plays twice.
/// Returned in acceptance order, which is also court order.
pub fn select_round(teams: &[Team], history: &PairingHistory, courts: usize) -> Vec<(Team, Team)> {
    if courts == 0 || teams.len() < 2 {
        return Vec::new();
    }

    let mut selected = Vec::new();
    let mut used_players: HashSet<PlayerId> = HashSet::new();

    for candidate in ranked_candidates(teams, history) {
        let ids = candidate.player_ids();
        if ids.iter().any(|id| used_players.contains(id)) {
            continue;
        }

        used_players.extend(ids);
        selected.push((candidate.team_a.clone(), candidate.team_b.clone()));

        if selected.len() == courts {
            break;
        }
    }

    selected
}
