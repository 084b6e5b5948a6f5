//! Last known location persistence.
//!
//! When no coordinates are configured for a run, the most recent ones are read back from
//! a small TOML file so the daily report keeps working.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::Location;
use crate::constants::{CONFIG_DIR_NAME, LOCATION_CACHE_FILE_NAME};

#[derive(Debug, Serialize, Deserialize)]
struct CachedLocation {
    latitude: f64,
    longitude: f64,
}

/// File-backed store for the last known location.
#[derive(Debug, Clone)]
pub struct LocationCache {
    path: PathBuf,
}

impl LocationCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Cache in the user's state directory (falling back to the cache directory).
    pub fn default_location() -> Result<Self> {
        let base = dirs::state_dir()
            .or_else(dirs::cache_dir)
            .context("Could not determine a state or cache directory")?;
        Ok(Self::new(
            base.join(CONFIG_DIR_NAME).join(LOCATION_CACHE_FILE_NAME),
        ))
    }

    /// Cache stored next to a custom configuration directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(LOCATION_CACHE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self, location: &Location) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string(&CachedLocation {
            latitude: location.latitude(),
            longitude: location.longitude(),
        })
        .context("Failed to serialize cached location")?;

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    /// Read the cached location.
    ///
    /// A missing file is not an error. A file that no longer parses or holds
    /// out-of-range coordinates is reported so the caller can warn about it.
    pub fn load(&self) -> Result<Option<Location>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let cached: CachedLocation = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        let location = Location::new(cached.latitude, cached.longitude)
            .with_context(|| format!("Invalid coordinates in {}", self.path.display()))?;
        Ok(Some(location))
    }
}
