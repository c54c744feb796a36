pub mod request;
pub mod export;

pub use request::{ScheduleRequest, MatchScore, validate_request, clamp_courts, clamp_court_count, DEFAULT_MAX_COURTS};
pub use export::{export_schedule_to_csv, schedule_csv_bytes, write_schedule_csv};
