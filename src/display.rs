use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::schedule::{Player, Schedule, ScheduleStats, Team};

/// Formats a team as "First & Second"
pub fn format_team(team: &Team) -> String {
    format!("{} & {}", team.first.name, team.second.name)
}

/// Real players with no match in the given round
pub fn sitting_out<'a>(roster: &'a [Player], schedule: &Schedule, round: u32) -> Vec<&'a Player> {
    roster
        .iter()
        .filter(|p| !p.is_bye())
        .filter(|p| !schedule.round(round).any(|m| m.involves(p.id)))
        .collect()
}

/// Renders the schedule round by round
pub fn render_schedule(roster: &[Player], schedule: &Schedule) -> Vec<String> {
    let mut lines = Vec::new();
    for round in 1..=schedule.round_count() {
        lines.push(format!("Round {}", round));
        for m in schedule.round(round) {
            lines.push(format!(
                "  Court {}: {} vs {}",
                m.court,
                format_team(&m.team_a),
                format_team(&m.team_b)
            ));
        }

        let resting = sitting_out(roster, schedule, round);
        if !resting.is_empty() {
            let names: Vec<&str> = resting.iter().map(|p| p.name.as_str()).collect();
            lines.push(format!("  Sitting out: {}", names.join(", ")));
        }
    }
    lines
}

/// Writes the rendered schedule to a file
pub fn write_schedule_to_file<P: AsRef<Path>>(
    roster: &[Player],
    schedule: &Schedule,
    filename: P,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;

    writeln!(file, "** Doubles Rotation **")?;
    for line in render_schedule(roster, schedule) {
        writeln!(file, "{}", line)?;
    }

    Ok(())
}

/// Prints the schedule and its summary in a readable format
pub fn print_schedule(roster: &[Player], schedule: &Schedule, stats: &ScheduleStats) {
    println!("\n=== Schedule ===");
    println!("Rounds: {}, matches: {}", stats.rounds, stats.matches);
    println!(
        "Partnerships covered: {}/{}",
        stats.partnerships_covered, stats.partnerships_possible
    );

    println!();
    for line in render_schedule(roster, schedule) {
        println!("{}", line);
    }

    println!("\n=== Players ===");
    for p in &stats.players {
        println!(
            "  {} (ID: {}) played {}, sat out {}, partners {}, opponents {}",
            p.name, p.player_id, p.games_played, p.rounds_sat_out, p.distinct_partners, p.distinct_opponents
        );
    }
}
