use anyhow::Context;
use mirai_moderation::ModerationSettings;
use mirai_moderation::settings::{DEFAULT_CAPS_RATIO, DEFAULT_MIN_CAPS_LENGTH, DEFAULT_PLACEHOLDER};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Simple configuration for mirai
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub moderation: ModerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationConfig {
    #[serde(default = "default_min_caps_length")]
    pub min_caps_length: usize,

    #[serde(default = "default_caps_ratio")]
    pub caps_ratio: f64,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default)]
    pub extra_blocked: Vec<String>,

    #[serde(default)]
    pub extra_warning: Vec<String>,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            min_caps_length: default_min_caps_length(),
            caps_ratio: default_caps_ratio(),
            placeholder: default_placeholder(),
            extra_blocked: Vec::new(),
            extra_warning: Vec::new(),
        }
    }
}

fn default_min_caps_length() -> usize {
    DEFAULT_MIN_CAPS_LENGTH
}

fn default_caps_ratio() -> f64 {
    DEFAULT_CAPS_RATIO
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl ModerationConfig {
    pub fn to_settings(&self) -> ModerationSettings {
        ModerationSettings {
            min_caps_length: self.min_caps_length,
            caps_ratio: self.caps_ratio,
            placeholder: self.placeholder.clone(),
            extra_blocked: self.extra_blocked.clone(),
            extra_warning: self.extra_warning.clone(),
        }
    }
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            config.save(&path)?;
            tracing::debug!(path = %path.display(), "wrote default config");
            Ok(config)
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "remirai", "mirai") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.mirai/config.toml")
        }
    }
}
