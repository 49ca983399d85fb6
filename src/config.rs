use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_BASE_URL;
use crate::core::{Adjustment, Crop, ImageFormat, Orientation};

/// Environment variable that overrides `api.access_key`
pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(skip)]
    pub config_path: PathBuf,

    /// Access key taken from the environment. Never written to disk.
    #[serde(skip)]
    env_access_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Adjustments applied to every image before command-line flags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crop: Vec<Crop>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            secret_key: None,
            base_url: default_base_url(),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn optional_dimension(value: &str) -> Result<Option<u32>> {
    if value.is_empty() {
        return Ok(None);
    }
    let parsed: u32 = value.parse().context("Invalid dimension, expected a positive integer")?;
    if parsed == 0 {
        anyhow::bail!("Invalid dimension, expected a positive integer");
    }
    Ok(Some(parsed))
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "unsplash-cli", "unsplash")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location, creating it if missing
    pub fn load_or_create() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            let mut config = Config::default();
            config.config_path = config_path;
            config.save()?;
            config
        };

        // Environment variable takes precedence
        config.apply_env();
        Ok(config)
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Pick up `UNSPLASH_ACCESS_KEY`, which takes precedence over `api.access_key`
    pub fn apply_env(&mut self) {
        self.override_access_key(std::env::var(ACCESS_KEY_ENV).ok());
    }

    fn override_access_key(&mut self, key: Option<String>) {
        self.env_access_key = key.filter(|k| !k.is_empty());
        if self.env_access_key.is_some() {
            tracing::debug!("Using access key from {}", ACCESS_KEY_ENV);
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(&self.config_path, content)
            .context("Failed to write config file")?;

        Ok(())
    }

    pub fn access_key(&self) -> Option<&str> {
        self.env_access_key
            .as_deref()
            .or(self.api.access_key.as_deref())
            .filter(|k| !k.is_empty())
    }

    /// Adjustment built from the `[defaults]` table
    pub fn default_adjustment(&self) -> Adjustment {
        Adjustment {
            width: self.defaults.width,
            height: self.defaults.height,
            format: self.defaults.format,
            crop: if self.defaults.crop.is_empty() {
                None
            } else {
                Some(self.defaults.crop.clone())
            },
            fit: self.defaults.fit.clone(),
        }
    }

    /// Set a config value by key path (e.g., "api.access_key", "defaults.format").
    /// An empty value unsets optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "api.access_key" => self.api.access_key = optional(value),
            "api.secret_key" => self.api.secret_key = optional(value),
            "api.base_url" => {
                if value.is_empty() {
                    self.api.base_url = default_base_url();
                } else if value.starts_with("http://") || value.starts_with("https://") {
                    self.api.base_url = value.trim_end_matches('/').to_string();
                } else {
                    anyhow::bail!("Invalid base URL, expected http:// or https://");
                }
            }
            "defaults.orientation" => {
                self.defaults.orientation = match optional(value) {
                    Some(v) => Some(v.parse()?),
                    None => None,
                };
            }
            "defaults.format" => {
                self.defaults.format = match optional(value) {
                    Some(v) => Some(v.parse()?),
                    None => None,
                };
            }
            "defaults.width" => self.defaults.width = optional_dimension(value)?,
            "defaults.height" => self.defaults.height = optional_dimension(value)?,
            "defaults.fit" => self.defaults.fit = optional(value),
            "defaults.crop" => {
                self.defaults.crop = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| s.parse::<Crop>())
                    .collect::<Result<Vec<Crop>, _>>()?;
            }
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
        Ok(())
    }

    /// Get a config value by key path
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api.access_key" => self.access_key().map(|_| "****".to_string()), // Mask credentials
            "api.secret_key" => self.api.secret_key.as_ref().map(|_| "****".to_string()),
            "api.base_url" => Some(self.api.base_url.clone()),
            "defaults.orientation" => self.defaults.orientation.map(|o| o.to_string()),
            "defaults.format" => self.defaults.format.map(|f| f.to_string()),
            "defaults.width" => self.defaults.width.map(|w| w.to_string()),
            "defaults.height" => self.defaults.height.map(|h| h.to_string()),
            "defaults.fit" => self.defaults.fit.clone(),
            "defaults.crop" => {
                if self.defaults.crop.is_empty() {
                    None
                } else {
                    let tags: Vec<&str> = self.defaults.crop.iter().map(|c| c.as_str()).collect();
                    Some(tags.join(","))
                }
            }
            _ => None,
        }
    }

    /// Get all config keys
    pub fn keys() -> &'static [&'static str] {
        &[
            "api.access_key",
            "api.secret_key",
            "api.base_url",
            "defaults.orientation",
            "defaults.format",
            "defaults.width",
            "defaults.height",
            "defaults.fit",
            "defaults.crop",
        ]
    }
}
