//! Application configuration loaded from environment variables.

use std::env;

/// Weekly chart window length when not configured.
pub const DEFAULT_WEEKLY_WINDOW_WEEKS: u32 = 104;
/// The weekly window starts in July of the previous year by default.
pub const DEFAULT_SEASON_START_MONTH: u32 = 7;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of weeks in the weekly stats series
    pub weekly_window_weeks: u32,
    /// Month (1-12) of the previous year the weekly window starts in
    pub season_start_month: u32,
    /// Optional JSON snapshot to load into the in-memory store
    pub data_path: Option<String>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            weekly_window_weeks: DEFAULT_WEEKLY_WINDOW_WEEKS,
            season_start_month: DEFAULT_SEASON_START_MONTH,
            data_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local runs.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let weekly_window_weeks = parse_var(
            "TRAINING_LOG_WEEKLY_WEEKS",
            DEFAULT_WEEKLY_WINDOW_WEEKS,
        )?;
        if weekly_window_weeks == 0 {
            return Err(ConfigError::Invalid("TRAINING_LOG_WEEKLY_WEEKS"));
        }

        let season_start_month = parse_var(
            "TRAINING_LOG_SEASON_START_MONTH",
            DEFAULT_SEASON_START_MONTH,
        )?;
        if !(1..=12).contains(&season_start_month) {
            return Err(ConfigError::Invalid("TRAINING_LOG_SEASON_START_MONTH"));
        }

        Ok(Self {
            weekly_window_weeks,
            season_start_month,
            data_path: env::var("TRAINING_LOG_DATA")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }
}

/// Read a numeric variable, falling back to `default` when unset.
fn parse_var(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
