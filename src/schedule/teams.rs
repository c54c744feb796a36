use super::types::{Player, Team};

/// Builds every two-player team from the roster, skipping the Bye placeholder.
/// Order is stable: by roster position, then by partner position.
pub fn enumerate_teams(roster: &[Player]) -> Vec<Team> {
    let real: Vec<&Player> = roster.iter().filter(|p| !p.is_bye()).collect();
    if real.len() < 2 {
        return Vec::new();
    }

    let mut teams = Vec::with_capacity(real.len() * (real.len() - 1) / 2);
    for (i, first) in real.iter().enumerate() {
        for second in &real[i + 1..] {
            teams.push(Team::new((*first).clone(), (*second).clone()));
        }
    }
    teams
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<Player> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Player::new(i as u32, *n))
            .collect()
    }

    #[test]
    fn yields_every_pair_once() {
        let teams = enumerate_teams(&roster(&["A", "B", "C", "D", "E"]));
        assert_eq!(teams.len(), 10);
        for (i, t) in teams.iter().enumerate() {
            assert!(teams[i + 1..].iter().all(|other| other != t));
        }
    }

    #[test]
    fn order_follows_roster() {
        let teams = enumerate_teams(&roster(&["A", "B", "C"]));
        let keys: Vec<_> = teams.iter().map(|t| t.key()).collect();
        assert_eq!(keys, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn bye_never_forms_a_team() {
        let teams = enumerate_teams(&roster(&["A", "B", "C", "D", "E", "Bye"]));
        assert_eq!(teams.len(), 10);
        assert!(teams.iter().all(|t| !t.first.is_bye() && !t.second.is_bye()));
    }

    #[test]
    fn fewer_than_two_real_players_gives_nothing() {
        assert!(enumerate_teams(&roster(&["A", "Bye"])).is_empty());
        assert!(enumerate_teams(&[]).is_empty());
    }
}
