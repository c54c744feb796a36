use serde::{Deserialize, Serialize};

/// Courts offered by the form unless configured otherwise
pub const DEFAULT_MAX_COURTS: usize = 6;

/// Schedule request from the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Free-text player list, one per line or comma-separated
    pub players: String,
    pub courts: i64,
}

/// A score entered for a played match. Kept for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub score_a: u32,
    pub score_b: u32,
}

/// Validates a schedule request
pub fn validate_request(req: &ScheduleRequest) -> Result<(), String> {
    if req.players.trim().is_empty() {
        return Err("Player list is required".to_string());
    }
    if req.players.split(|c| c == '\n' || c == ',').all(|name| name.trim().is_empty()) {
        return Err("Player list contains no names".to_string());
    }
    Ok(())
}

/// Clamps a requested court count into `1..=max_courts`
pub fn clamp_courts(courts: i64, max_courts: usize) -> usize {
    let max = max_courts.max(1) as i64;
    courts.clamp(1, max) as usize
}

/// Clamps a court count given as an unsigned number, as the CLI does
pub fn clamp_court_count(courts: usize, max_courts: usize) -> usize {
    clamp_courts(i64::try_from(courts).unwrap_or(i64::MAX), max_courts)
}
