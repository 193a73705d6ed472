//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use agenda_core::UntimedPolicy;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file.
    pub database_path: PathBuf,
    /// Whether events without a time match on the boundary dates of a check.
    #[serde(default)]
    pub untimed_events: UntimedPolicy,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_path", &self.database_path)
            .field("untimed_events", &self.untimed_events)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            database_path: data_dir.join("agenda.db"),
            untimed_events: UntimedPolicy::default(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (AGENDA_*)
        figment = figment.merge(Env::prefixed("AGENDA_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for agenda.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("agenda"))
}

/// Returns the platform-specific data directory for agenda.
///
/// On Linux: `~/.local/share/agenda`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("agenda"))
}
