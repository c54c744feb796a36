use crate::display::format_team;
use crate::form::request::MatchScore;
use crate::schedule::Schedule;
use csv::WriterBuilder;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 7] = ["round", "court", "team_a", "team_b", "score_a", "score_b", "exported_at"];

/// Writes one CSV row per match. Score cells stay empty for matches
/// without a recorded score.
pub fn write_schedule_csv<W: Write>(
    schedule: &Schedule,
    scores: &HashMap<u32, MatchScore>,
    exported_at: &str,
    writer: W,
) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(HEADER)?;

    for m in &schedule.matches {
        let score = scores.get(&m.id);
        let score_a = score.map(|s| s.score_a.to_string()).unwrap_or_default();
        let score_b = score.map(|s| s.score_b.to_string()).unwrap_or_default();
        let round = m.round.to_string();
        let court = m.court.to_string();
        let team_a = format_team(&m.team_a);
        let team_b = format_team(&m.team_b);

        wtr.write_record([
            round.as_str(),
            court.as_str(),
            team_a.as_str(),
            team_b.as_str(),
            score_a.as_str(),
            score_b.as_str(),
            exported_at,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports the schedule, with any recorded scores, to a CSV file
pub fn export_schedule_to_csv(
    schedule: &Schedule,
    scores: &HashMap<u32, MatchScore>,
    csv_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::File::create(csv_path)?;
    let exported_at = chrono::Local::now().to_rfc3339();
    write_schedule_csv(schedule, scores, &exported_at, file)?;
    Ok(())
}

/// The CSV export as bytes, stamped with the current time
pub fn schedule_csv_bytes(
    schedule: &Schedule,
    scores: &HashMap<u32, MatchScore>,
) -> Result<Vec<u8>, csv::Error> {
    let mut buf = Vec::new();
    let exported_at = chrono::Local::now().to_rfc3339();
    write_schedule_csv(schedule, scores, &exported_at, &mut buf)?;
    Ok(buf)
}
