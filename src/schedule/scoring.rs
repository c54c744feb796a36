use super::history::PairingHistory;
use super::types::Team;

/// Weight of a repeated partnership
pub const PARTNER_WEIGHT: u32 = 5;
/// Weight of a repeated opposition
pub const OPPONENT_WEIGHT: u32 = 3;
/// Weight of games already played
pub const PLAY_WEIGHT: u32 = 1;

/// Penalty for putting `team_a` against `team_b` given what has been played so far.
/// Lower is better. The teams must not share a player.
pub fn match_penalty(team_a: &Team, team_b: &Team, history: &PairingHistory) -> u32 {
    let [a1, a2] = team_a.ids();
    let [b1, b2] = team_b.ids();

    let partners = history.partner_count(a1, a2) + history.partner_count(b1, b2);

    let opponents: u32 = [a1, a2]
        .iter()
        .flat_map(|&a| [b1, b2].map(|b| history.opponent_count(a, b)))
        .sum();

    let plays: u32 = [a1, a2, b1, b2]
        .iter()
        .map(|&p| history.play_count(p))
        .sum();

    PARTNER_WEIGHT * partners + OPPONENT_WEIGHT * opponents + PLAY_WEIGHT * plays
}
