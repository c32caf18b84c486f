mod config;
pub mod database;

pub use config::{ChallengeConfig, Config, TuningConfig};
pub use database::StatsDb;

use std::path::PathBuf;

use crate::error::{CoreError, Result};

/// Returns `~/.config/questline[-<env>]/` based on QUESTLINE_ENV.
///
/// Set QUESTLINE_ENV to anything other than "production" (e.g. "dev") to use
/// an isolated data directory named after it.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("QUESTLINE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "production" {
        base_dir.join("questline")
    } else {
        base_dir.join(format!("questline-{env}"))
    };

    std::fs::create_dir_all(&dir).map_err(CoreError::Io)?;
    Ok(dir)
}
