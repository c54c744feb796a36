use std::collections::HashMap;
use super::types::{Match, PlayerId};

/// Pair key with the smaller id first, so lookups are order-independent
fn pair_key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Running counters of who has partnered, opposed and played.
/// Strictly additive for the lifetime of one schedule run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingHistory {
    partners: HashMap<(PlayerId, PlayerId), u32>,
    opponents: HashMap<(PlayerId, PlayerId), u32>,
    plays: HashMap<PlayerId, u32>,
}

impl PairingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_partnership(&mut self, a: PlayerId, b: PlayerId) {
        *self.partners.entry(pair_key(a, b)).or_insert(0) += 1;
    }

    pub fn add_opposition(&mut self, a: PlayerId, b: PlayerId) {
        *self.opponents.entry(pair_key(a, b)).or_insert(0) += 1;
    }

    pub fn add_play(&mut self, player: PlayerId) {
        *self.plays.entry(player).or_insert(0) += 1;
    }

    pub fn partner_count(&self, a: PlayerId, b: PlayerId) -> u32 {
        self.partners.get(&pair_key(a, b)).copied().unwrap_or(0)
    }

    pub fn opponent_count(&self, a: PlayerId, b: PlayerId) -> u32 {
        self.opponents.get(&pair_key(a, b)).copied().unwrap_or(0)
    }

    pub fn play_count(&self, player: PlayerId) -> u32 {
        self.plays.get(&player).copied().unwrap_or(0)
    }

    /// Commits one played match: each side's partnership, the four
    /// cross-team oppositions and a play for each of the four players
    pub fn record_match(&mut self, m: &Match) {
        let [a1, a2] = m.team_a.ids();
        let [b1, b2] = m.team_b.ids();

        self.add_partnership(a1, a2);
        self.add_partnership(b1, b2);

        for a in [a1, a2] {
            for b in [b1, b2] {
                self.add_opposition(a, b);
            }
        }

        for p in m.player_ids() {
            self.add_play(p);
        }
    }
}
