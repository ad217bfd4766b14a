use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const APP_NAME: &str = "getgo";
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_LISTING_URL: &str = "https://golang.org/dl/";
pub const DEFAULT_INSTALL_DIR: &str = "/usr/local/go";
pub const DEFAULT_VERSION: &str = "1.18";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Page enumerating downloadable release archives; also the base the
    /// per-version archive URLs are derived from.
    #[serde(default = "default_listing_url")]
    pub listing_url: String,

    /// Directory the toolchain is extracted into. Wiped and recreated on
    /// every install.
    #[serde(default = "default_install_dir")]
    pub install_dir: String,

    /// Version installed when none is given on the command line.
    #[serde(default = "default_version")]
    pub default_version: String,
}

fn default_listing_url() -> String {
    DEFAULT_LISTING_URL.to_string()
}
fn default_install_dir() -> String {
    DEFAULT_INSTALL_DIR.to_string()
}
fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listing_url: default_listing_url(),
            install_dir: default_install_dir(),
            default_version: default_version(),
        }
    }
}

pub fn config_file_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("GETGO_CONFIG_FILE") {
        return Ok(PathBuf::from(path));
    }

    let path = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
        .join(APP_NAME)
        .join(CONFIG_FILE_NAME);
    tracing::debug!("Config file path: {}", path.display());
    Ok(path)
}

/// Load settings from the config file if one exists, then apply environment
/// variable overrides.
pub fn load_settings() -> Result<Settings> {
    let config_path = config_file_path()?;

    let mut settings = if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Could not read config file at {}", config_path.display()))?;
        serde_json::from_str(&content).with_context(|| "Could not parse config file as JSON")?
    } else {
        Settings::default()
    };

    if let Ok(url) = std::env::var("GETGO_LISTING_URL") {
        settings.listing_url = url;
    }

    if let Ok(dir) = std::env::var("GETGO_INSTALL_DIR") {
        settings.install_dir = dir;
    }

    if let Ok(version) = std::env::var("GETGO_DEFAULT_VERSION") {
        settings.default_version = version;
    }

    Ok(settings)
}
