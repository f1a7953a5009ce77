//! Akaru configuration.
//!
//! Config file: ~/.config/akaru/config.toml (or an explicit path).
//! Every field is optional; missing values fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{AkaruError, Result};
use crate::store::DEFAULT_MEMORY_FILE;

/// Memory persistence settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Path of the JSON memory document
    pub path: PathBuf,
    /// Entries listed by `/mem` without an argument
    pub recent_count: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MEMORY_FILE),
            recent_count: 5,
        }
    }
}

/// Mock weather values. There is no real weather backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub location: String,
    pub condition: String,
    pub temperature_c: i32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            location: "Banda Aceh".to_string(),
            condition: "cerah berawan".to_string(),
            temperature_c: 30,
        }
    }
}

/// Read-loop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub prompt: String,
    pub exit_words: Vec<String>,
    pub color: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            prompt: "lo: ".to_string(),
            exit_words: ["exit", "quit", "keluar", "e", "q", "k"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            color: true,
        }
    }
}

impl ChatConfig {
    pub fn is_exit_word(&self, input: &str) -> bool {
        let input = input.trim().to_lowercase();
        self.exit_words.iter().any(|w| w.to_lowercase() == input)
    }
}

/// Main Akaru configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AkaruConfig {
    pub memory: MemoryConfig,
    pub weather: WeatherConfig,
    pub chat: ChatConfig,
}

impl AkaruConfig {
    /// Default user config path: ~/.config/akaru/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("akaru").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// Priority:
    /// 1. Explicit path (must exist)
    /// 2. User config, if present
    /// 3. Defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(AkaruError::Config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: AkaruConfig = toml::from_str(contents)?;
        if config.memory.path.as_os_str().is_empty() {
            return Err(AkaruError::Config("memory.path must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Render as TOML (used by `akaructl config`)
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
