use crate::form::DEFAULT_MAX_COURTS;
use log::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// `web [port]`
    Web { port: u16 },
    /// `<roster-file> [courts]`
    Cli { roster_path: String, courts: usize },
    Usage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: Mode,
    pub bind_address: String,
    pub max_courts: usize,
}

impl AppConfig {
    /// Reads the process arguments and environment
    pub fn from_env() -> Self {
        let args: Vec<String> = std::env::args().collect();
        Self::from_parts(&args, |key| std::env::var(key).ok())
    }

    /// `args[0]` is the program name. `env` looks up environment variables.
    pub fn from_parts<F>(args: &[String], env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match args.get(1).map(String::as_str) {
            Some("web") => Mode::Web {
                port: args
                    .get(2)
                    .and_then(|p| p.parse::<u16>().ok())
                    .unwrap_or(DEFAULT_PORT),
            },
            Some(path) => match args.get(2).map(|c| c.parse::<usize>()) {
                None => Mode::Cli { roster_path: path.to_string(), courts: 1 },
                Some(Ok(courts)) => Mode::Cli { roster_path: path.to_string(), courts },
                Some(Err(_)) => {
                    warn!("court count \"{}\" is not a number", args[2]);
                    Mode::Usage
                }
            },
            None => Mode::Usage,
        };

        let bind_address = env("ROTATION_BIND_ADDR")
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let max_courts = env("ROTATION_MAX_COURTS")
            .and_then(|c| c.parse::<usize>().ok())
            .filter(|&c| c > 0)
            .unwrap_or(DEFAULT_MAX_COURTS);

        Self { mode, bind_address, max_courts }
    }
}
