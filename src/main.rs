use std::collections::HashMap;
use std::path::Path;

use doubles_rotation::config::{AppConfig, Mode};
use doubles_rotation::display::{print_schedule, write_schedule_to_file};
use doubles_rotation::form::{clamp_court_count, export_schedule_to_csv};
use doubles_rotation::parser::{load_roster, RosterError};
use doubles_rotation::schedule::{generate_schedule, summarize};
use doubles_rotation::web;
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    match config.mode {
        Mode::Web { port } => {
            info!("Starting web server on {}:{}", config.bind_address, port);
            println!("Access the site at http://localhost:{}", port);
            web::start_server(&config.bind_address, port, config.max_courts).await?;
        }
        Mode::Cli { roster_path, courts } => {
            let roster = load_roster(&roster_path)?;
            let courts = clamp_court_count(courts, config.max_courts);
            info!("Loaded {} roster entries from {}", roster.len(), roster_path);

            let schedule = generate_schedule(&roster, courts);
            if schedule.is_empty() {
                let found = roster.iter().filter(|p| !p.is_bye()).count();
                return Err(RosterError::TooFewPlayers { found }.into());
            }

            let stats = summarize(&roster, &schedule);
            print_schedule(&roster, &schedule, &stats);

            write_schedule_to_file(&roster, &schedule, "schedule.txt")?;
            export_schedule_to_csv(&schedule, &HashMap::new(), Path::new("schedule.csv"))?;
            println!("\nSchedule saved to:");
            println!("  - schedule.txt");
            println!("  - schedule.csv");
        }
        Mode::Usage => {
            println!("Usage:");
            println!("  doubles-rotation <roster-file> [courts]   schedule a roster from a text or CSV file");
            println!("  doubles-rotation web [port]               start the web server (default port 8080)");
        }
    }

    Ok(())
}
