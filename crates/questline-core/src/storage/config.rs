//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - XP tuning overrides (floor, combo window)
//! - Daily challenge settings
//!
//! Configuration is stored at `~/.config/questline/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, CoreError, Result};

/// XP tuning overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuningConfig {
    /// Minimum XP awarded for any completion
    #[serde(default = "default_xp_floor")]
    pub xp_floor: u32,
    /// Combo window in minutes
    #[serde(default = "default_combo_window_minutes")]
    pub combo_window_minutes: u32,
}

/// Daily challenge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeConfig {
    /// Whether daily challenges are generated
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Multiplier applied to challenge reward XP
    #[serde(default = "default_reward_scale")]
    pub reward_scale: f64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/questline/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tuning: TuningConfig,
    #[serde(default)]
    pub challenge: ChallengeConfig,
}

fn default_xp_floor() -> u32 {
    5
}
fn default_combo_window_minutes() -> u32 {
    60
}
fn default_true() -> bool {
    true
}
fn default_reward_scale() -> f64 {
    1.0
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            xp_floor: default_xp_floor(),
            combo_window_minutes: default_combo_window_minutes(),
        }
    }
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            reward_scale: default_reward_scale(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tuning: TuningConfig::default(),
            challenge: ChallengeConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<()> {
        let unknown = || {
            CoreError::Config(ConfigError::InvalidValue {
                key: key.to_string(),
                message: "unknown config key".to_string(),
            })
        };
        let unparsable = |message: String| {
            CoreError::Config(ConfigError::InvalidValue {
                key: key.to_string(),
                message,
            })
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(CoreError::Config(ConfigError::MissingKey(key.to_string())));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| unparsable(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| {
                                    unparsable(format!("cannot parse '{value}' as number"))
                                })?
                        } else {
                            return Err(unparsable(format!("cannot parse '{value}' as number")));
                        }
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| {
                    CoreError::Config(ConfigError::LoadFailed {
                        path,
                        message: e.to_string(),
                    })
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| {
            CoreError::Config(ConfigError::ParseFailed(e.to_string()))
        })?;
        std::fs::write(&path, content).map_err(|e| {
            CoreError::Config(ConfigError::SaveFailed {
                path,
                message: e.to_string(),
            })
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist. Returns an error if the key is
    /// unknown or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }
}
