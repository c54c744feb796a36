use csv::ReaderBuilder;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::schedule::{Player, BYE_NAME};

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("no player names given")]
    Empty,
    #[error("not enough players to schedule a match (found {found}, need at least 4)")]
    TooFewPlayers { found: usize },
    #[error("player \"{0}\" is listed more than once")]
    DuplicateName(String),
    #[error("\"{0}\" is reserved for the placeholder player")]
    ReservedName(String),
    #[error("failed to read roster CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
}

/// Turns validated names into players with ids in input order,
/// appending the Bye placeholder when the count is odd
pub fn with_bye(names: Vec<String>) -> Vec<Player> {
    let mut players: Vec<Player> = names
        .into_iter()
        .enumerate()
        .map(|(i, name)| Player::new(i as u32, name))
        .collect();

    if players.len() % 2 == 1 {
        players.push(Player::bye(players.len() as u32));
    }
    players
}

/// Checks names for blanks, duplicates (ignoring case) and the reserved Bye name
fn validate_names(raw: impl IntoIterator<Item = String>) -> Result<Vec<String>, RosterError> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for name in raw {
        let name = name.trim().to_string();
        if name.is_empty() {
            continue;
        }
        if name.eq_ignore_ascii_case(BYE_NAME) {
            return Err(RosterError::ReservedName(name));
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(RosterError::DuplicateName(name));
        }
        names.push(name);
    }

    if names.is_empty() {
        return Err(RosterError::Empty);
    }
    Ok(names)
}

/// Parses a free-text roster: one name per line or comma-separated
pub fn parse_roster_text(text: &str) -> Result<Vec<Player>, RosterError> {
    let raw = text
        .lines()
        .flat_map(|line| line.split(','))
        .map(str::to_string);
    Ok(with_bye(validate_names(raw)?))
}

/// Loads a roster from disk.
/// `.csv` files take names from the first column; a header cell of
/// `name` or `player` is skipped. Any other file is parsed as free text.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<Player>, RosterError> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if !is_csv {
        let text = std::fs::read_to_string(path)?;
        return parse_roster_text(&text);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut raw = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let cell = record.get(0).unwrap_or("").trim();
        if i == 0 && (cell.eq_ignore_ascii_case("name") || cell.eq_ignore_ascii_case("player")) {
            continue;
        }
        raw.push(cell.to_string());
    }

    Ok(with_bye(validate_names(raw)?))
}
