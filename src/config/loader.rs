//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Root directory; each album gets its own folder below it.
    #[serde(default = "default_download_directory")]
    pub download_directory: PathBuf,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whether to replace path-unsafe characters in album titles.
    #[serde(default = "default_true")]
    pub sanitize_titles: bool,

    /// Whether to show download progress.
    #[serde(default = "default_true")]
    pub show_downloads: bool,

    /// Whether to show skipped downloads.
    #[serde(default = "default_true")]
    pub show_skipped_downloads: bool,

    /// Whether to clear the terminal before printing the final summary.
    #[serde(default)]
    pub clear_screen: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: default_download_directory(),
            user_agent: default_user_agent(),
            sanitize_titles: true,
            show_downloads: true,
            show_skipped_downloads: true,
            clear_screen: false,
        }
    }
}

fn default_download_directory() -> PathBuf {
    PathBuf::from("downloads")
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> &Path {
        &self.options.download_directory
    }
}
