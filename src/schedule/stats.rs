use std::collections::{BTreeSet, HashSet};
use serde::{Serialize, Deserialize};
use super::types::{Player, PlayerId, Schedule};

/// Per-player view of a finished schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub player_id: PlayerId,
    pub name: String,
    pub games_played: u32,
    pub rounds_sat_out: u32,
    pub distinct_partners: u32,
    pub distinct_opponents: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStats {
    pub rounds: u32,
    pub matches: u32,
    /// Distinct partnerships that occurred at least once
    pub partnerships_covered: u32,
    /// All partnerships the real players could form
    pub partnerships_possible: u32,
    pub players: Vec<PlayerSummary>,
}

/// Summarizes how evenly a schedule spread games, partners and opponents
pub fn summarize(roster: &[Player], schedule: &Schedule) -> ScheduleStats {
    let rounds = schedule.round_count();
    let real: Vec<&Player> = roster.iter().filter(|p| !p.is_bye()).collect();
    let n = real.len() as u32;

    let partnerships: HashSet<(PlayerId, PlayerId)> = schedule
        .matches
        .iter()
        .flat_map(|m| [m.team_a.key(), m.team_b.key()])
        .collect();

    let players = real
        .iter()
        .map(|p| {
            let mut partners = BTreeSet::new();
            let mut opponents = BTreeSet::new();
            let mut games_played = 0;

            for m in schedule.matches.iter().filter(|m| m.involves(p.id)) {
                games_played += 1;
                let (own, other) = if m.team_a.contains(p.id) {
                    (&m.team_a, &m.team_b)
                } else {
                    (&m.team_b, &m.team_a)
                };
                partners.extend(own.ids().into_iter().filter(|&id| id != p.id));
                opponents.extend(other.ids());
            }

            PlayerSummary {
                player_id: p.id,
                name: p.name.clone(),
                games_played,
                rounds_sat_out: rounds - games_played,
                distinct_partners: partners.len() as u32,
                distinct_opponents: opponents.len() as u32,
            }
        })
        .collect();

    ScheduleStats {
        rounds,
        matches: schedule.matches.len() as u32,
        partnerships_covered: partnerships.len() as u32,
        partnerships_possible: n * n.saturating_sub(1) / 2,
        players,
    }
}
