pub mod types;
pub mod teams;
pub mod history;
pub mod scoring;
pub mod round;
pub mod driver;
pub mod stats;

pub use types::{Match, Player, PlayerId, Schedule, Team, BYE_NAME};
pub use history::PairingHistory;
pub use driver::{generate_schedule, target_round_count};
pub use stats::{summarize, ScheduleStats};
