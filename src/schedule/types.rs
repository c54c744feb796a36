use serde::{Serialize, Deserialize};

/// Stable identifier of a player within one roster
pub type PlayerId = u32;

/// Display name of the synthetic placeholder used to even out odd rosters
pub const BYE_NAME: &str = "Bye";

/// A roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }

    /// The placeholder player appended to odd rosters
    pub fn bye(id: PlayerId) -> Self {
        Self::new(id, BYE_NAME)
    }

    /// True for the placeholder; it fills a seat in the roster count but never plays
    pub fn is_bye(&self) -> bool {
        self.name == BYE_NAME
    }
}

/// Two distinct players playing on the same side.
/// Stored as an ordered pair for display; identity is the unordered pair of ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub first: Player,
    pub second: Player,
}

impl Team {
    pub fn new(first: Player, second: Player) -> Self {
        Self { first, second }
    }

    pub fn ids(&self) -> [PlayerId; 2] {
        [self.first.id, self.second.id]
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.first.id == id || self.second.id == id
    }

    /// True when the two teams have no player in common
    pub fn is_disjoint(&self, other: &Team) -> bool {
        !other.contains(self.first.id) && !other.contains(self.second.id)
    }

    /// Unordered identity of the team: the two ids, smallest first
    pub fn key(&self) -> (PlayerId, PlayerId) {
        let [a, b] = self.ids();
        (a.min(b), a.max(b))
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Team {}

/// One team against another on a court within a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: u32,
    pub round: u32,  // 1-based
    pub court: u32,  // 1-based within the round
    pub team_a: Team,
    pub team_b: Team,
}

impl Match {
    /// The four players of the match, team A first
    pub fn player_ids(&self) -> [PlayerId; 4] {
        let [a1, a2] = self.team_a.ids();
        let [b1, b2] = self.team_b.ids();
        [a1, a2, b1, b2]
    }

    pub fn involves(&self, id: PlayerId) -> bool {
        self.team_a.contains(id) || self.team_b.contains(id)
    }
}

/// Every committed match of one run, round-major then court-minor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub matches: Vec<Match>,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of rounds actually produced
    pub fn round_count(&self) -> u32 {
        self.matches.last().map(|m| m.round).unwrap_or(0)
    }

    /// Matches of a single round, in court order
    pub fn round(&self, round: u32) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.round == round)
    }

    pub fn find(&self, match_id: u32) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }
}
