//! Configuration loading functionality.
//!
//! Handles locating `daylight.toml`, creating it on first run, and loading the message
//! catalog with its optional `messages.toml` override.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::validation::{validate_catalog, validate_config};
use super::{Config, private_path, sibling_path};
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, MESSAGES_FILE_NAME};
use crate::message::MessageCatalog;

/// Global configuration directory, set once at startup
static CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Set the configuration directory for the current process.
/// This can only be called once, typically at startup.
/// Returns an error if already set.
pub fn set_config_dir(dir: Option<String>) -> Result<()> {
    CONFIG_DIR
        .set(dir.map(PathBuf::from))
        .map_err(|_| anyhow::anyhow!("Configuration directory already set"))
}

/// Get the custom configuration directory if one was set.
/// Returns None if using the default directory.
pub fn get_custom_config_dir() -> Option<PathBuf> {
    CONFIG_DIR.get().and_then(|d| d.clone())
}

/// Get the directory containing daylight.toml and messages.toml.
pub fn get_config_base_dir() -> Result<PathBuf> {
    let config_path = get_config_path()?;
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// Get the configuration file path.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(custom_dir) = get_custom_config_dir() {
        return Ok(custom_dir.join(CONFIG_FILE_NAME));
    }

    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration using automatic path detection.
///
/// This function will create a default configuration file if none exists.
pub fn load() -> Result<Config> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        super::builder::create_default_config(&config_path)
            .context("Failed to create default config during load")?;
    }

    load_from_path(&config_path).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            private_path(&config_path)
        )
    })
}

/// Load configuration from a specific path.
///
/// This version does NOT create a default config if the path doesn't exist.
pub fn load_from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!(
            "Configuration file not found at specified path: {}",
            private_path(path)
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", private_path(path)))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", private_path(path)))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load the message catalog for the active configuration directory.
pub fn load_catalog() -> Result<MessageCatalog> {
    load_catalog_from_path(&sibling_path(MESSAGES_FILE_NAME)?)
}

/// Load `messages.toml` from `path`, or the built-in catalog when it does not exist.
pub fn load_catalog_from_path(path: &Path) -> Result<MessageCatalog> {
    let catalog = if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read messages from {}", private_path(path)))?;
        MessageCatalog::from_toml(&content)
            .with_context(|| format!("Failed to parse messages from {}", private_path(path)))?
    } else {
        MessageCatalog::builtin()?
    };

    validate_catalog(&catalog)?;

    Ok(catalog)
}
