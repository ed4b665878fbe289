//! Service configuration loaded from TOML.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_hanoi::{ConfigError, DEFAULT_HISTORY_LIMIT, MAX_DISKS, Pole};
use tracing::{debug, info, instrument};

/// Game rules applied to every session.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct GameSettings {
    /// Smallest disk count accepted for a new game.
    min_disks: u8,

    /// Largest disk count accepted for a new game.
    max_disks: u8,

    /// Disk count used when a request does not specify one.
    default_disks: u8,

    /// Pole that counts as solved.
    target_pole: Pole,

    /// Accepted moves kept per session.
    history_limit: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            min_disks: 1,
            max_disks: 12,
            default_disks: 3,
            target_pole: Pole::Right,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl GameSettings {
    /// Resolves a requested disk count against the configured range.
    ///
    /// `None` means the default. Negative or oversized values are rejected.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn disk_count(&self, requested: Option<i64>) -> Result<u8, ConfigError> {
        let Some(requested) = requested else {
            return Ok(self.default_disks);
        };

        u8::try_from(requested)
            .ok()
            .filter(|n| (self.min_disks..=self.max_disks).contains(n))
            .ok_or_else(|| {
                ConfigError::new(format!(
                    "Disk count {} out of range (must be {}-{})",
                    requested, self.min_disks, self.max_disks
                ))
            })
    }

    /// Checks the settings are self-consistent.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_disks < 1 {
            return Err(ConfigError::new("min_disks must be at least 1"));
        }
        if self.max_disks > MAX_DISKS {
            return Err(ConfigError::new(format!(
                "max_disks {} exceeds the supported maximum {}",
                self.max_disks, MAX_DISKS
            )));
        }
        if !(self.min_disks..=self.max_disks).contains(&self.default_disks) {
            return Err(ConfigError::new(format!(
                "default_disks {} must lie between min_disks {} and max_disks {}",
                self.default_disks, self.min_disks, self.max_disks
            )));
        }
        if self.history_limit < 1 {
            return Err(ConfigError::new("history_limit must be at least 1"));
        }
        Ok(())
    }
}

/// Network settings for the REST server.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct ServerSettings {
    /// Host to bind to.
    host: String,

    /// Port to bind to.
    port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Complete configuration file.
#[derive(Debug, Clone, Default, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct HanoiConfig {
    /// Game rules.
    game: GameSettings,

    /// REST server settings.
    server: ServerSettings,
}

impl HanoiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.game.validate()?;
        info!(
            max_disks = config.game.max_disks,
            target_pole = %config.game.target_pole,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if given and present, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                info!("Config file not found at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }
}
