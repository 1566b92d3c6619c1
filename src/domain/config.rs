//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the Matrix login, command settings, access lists and the gatekeeper.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub gatekeeper: GatekeeperConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| crate::strings::logs::config_read_error(&path.display().to_string()))?;
        serde_yaml::from_str(&content).context(crate::strings::logs::CONFIG_PARSE_ERROR)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CommandsConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

fn default_prefix() -> String {
    "!".to_string()
}

/// Access lists. Entries are Matrix user ids (`@user:server`).
#[derive(Debug, Default, Deserialize, Clone)]
pub struct SystemConfig {
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub admins: Vec<String>,
    #[serde(default)]
    pub moderators: Vec<String>,
    /// Room that receives operational notices.
    #[serde(default)]
    pub log_room: Option<String>,
    #[serde(default)]
    pub rules_room: Option<String>,
}

/// Reaction-based membership granting.
#[derive(Debug, Deserialize, Clone)]
pub struct GatekeeperConfig {
    /// Event id of the rules message users react to.
    #[serde(default)]
    pub rules_event: Option<String>,
    /// Room reacting users get invited into.
    #[serde(default)]
    pub members_room: Option<String>,
    #[serde(default = "default_emoji")]
    pub emoji: String,
}

impl Default for GatekeeperConfig {
    fn default() -> Self {
        Self {
            rules_event: None,
            members_room: None,
            emoji: default_emoji(),
        }
    }
}

fn default_emoji() -> String {
    "👍".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_data_dir")]
    pub directory: String,
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_data_dir(),
            file: default_log_file(),
        }
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_log_file() -> String {
    "session.log".to_string()
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    pub password: String,
    pub homeserver: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
