use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PLACEHOLDER: char = '•';

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_verse")]
    pub verse: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_confetti")]
    pub confetti: bool,
}

fn default_theme() -> String {
    "grape".to_string()
}
fn default_verse() -> String {
    "weekly".to_string()
}
fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}
fn default_confetti() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            verse: default_verse(),
            placeholder: default_placeholder(),
            confetti: default_confetti(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("versed")
            .join("config.toml")
    }

    /// The glyph hidden words render as. Falls back to the default when the
    /// configured string is empty.
    pub fn placeholder_char(&self) -> char {
        self.placeholder.chars().next().unwrap_or(DEFAULT_PLACEHOLDER)
    }

    /// Validate the verse selection against the loaded pack, resetting a
    /// stale reference to the weekly default. Call after deserialization.
    pub fn normalize_verse(&mut self, known_references: &[&str]) {
        if self.verse != "weekly" && !known_references.contains(&self.verse.as_str()) {
            self.verse = default_verse();
        }
    }
}
