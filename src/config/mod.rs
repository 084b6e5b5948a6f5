//! Configuration system for daylight.
//!
//! Settings live in `daylight.toml` under `$XDG_CONFIG_HOME/daylight/`, or in the
//! directory passed with `--config`. A commented default file is written on first run.
//!
//! ```toml
//! #[Location]
//! latitude = 59.91              # Geographic latitude (-90 to 90)
//! longitude = 10.75             # Geographic longitude (-180 to 180)
//! location_name = "Oslo"        # Label shown with the report (optional)
//! timezone = "Europe/Oslo"      # IANA zone for the calendar date (default: zone at the coordinates)
//!
//! #[Notifications]
//! notifications = true          # Include the notification and next wake-up in the report
//! ```
//!
//! ## Message catalog
//!
//! The message templates, unit words, palette and phase names ship with the binary. A
//! `messages.toml` in the same directory replaces the built-in catalog as a whole; it is
//! validated so that every pool the selector may ask for is present and non-empty.

pub mod builder;
pub mod loading;
pub mod validation;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_NOTIFICATIONS;
use crate::geo::{FixedLabel, Location, determine_timezone_from_coordinates};

pub use builder::create_default_config;
pub use loading::{
    get_config_base_dir, get_config_path, get_custom_config_dir, load, load_catalog,
    load_catalog_from_path, load_from_path, set_config_dir,
};

/// Contents of `daylight.toml`.
///
/// Every field is optional. A missing location is not an error here; the caller falls
/// back to the last cached location.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Human-readable place name used as the report label
    pub location_name: Option<String>,
    /// IANA timezone name deciding the calendar date
    pub timezone: Option<String>,
    pub notifications: Option<bool>,
}

impl Config {
    /// Load configuration using the module's load function
    pub fn load() -> Result<Self> {
        load()
    }

    /// Load from path using the module's load_from_path function
    pub fn load_from_path(path: &Path) -> Result<Self> {
        load_from_path(path)
    }

    /// The configured location, if both coordinates are present.
    pub fn location(&self) -> Result<Option<Location>> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Ok(Some(Location::new(lat, lon)?)),
            (None, None) => Ok(None),
            _ => anyhow::bail!("latitude and longitude must be configured together"),
        }
    }

    /// The configured timezone, parsed.
    pub fn timezone(&self) -> Result<Option<chrono_tz::Tz>> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<chrono_tz::Tz>().map_err(|_| {
                    anyhow::anyhow!(
                        "timezone '{name}' is not a valid IANA timezone name (e.g. \"Europe/Oslo\")"
                    )
                })
            })
            .transpose()
    }

    /// Zone deciding the calendar date at `location`: the configured one, otherwise the
    /// zone the coordinates fall in.
    pub fn timezone_for(&self, location: &Location) -> Result<chrono_tz::Tz> {
        Ok(self.timezone()?.unwrap_or_else(|| {
            determine_timezone_from_coordinates(location.latitude(), location.longitude())
        }))
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications.unwrap_or(DEFAULT_NOTIFICATIONS)
    }

    /// Labeler for the configured place name; a blank name defers to coordinates.
    pub fn labeler(&self) -> FixedLabel {
        FixedLabel(self.location_name.clone().unwrap_or_default())
    }

    pub fn log_config(&self, path: &Path) {
        log_block_start!("Loaded configuration");
        log_indented!("Source: {}", private_path(path));

        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => log_indented!("Coordinates: {lat:.4}, {lon:.4}"),
            _ => log_indented!("Coordinates: not configured, using last known location"),
        }
        if let Some(name) = self.location_name.as_deref().filter(|n| !n.trim().is_empty()) {
            log_indented!("Location name: {name}");
        }
        log_indented!(
            "Timezone: {}",
            self.timezone.as_deref().unwrap_or("from coordinates")
        );
        log_indented!(
            "Notifications: {}",
            if self.notifications_enabled() {
                "enabled"
            } else {
                "disabled"
            }
        );
    }
}

/// Path for display, with the home directory shortened to `~`.
pub(crate) fn private_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        return format!("~/{}", rest.display());
    }
    path.display().to_string()
}

/// Resolve the path of a sibling file next to `daylight.toml`.
pub(crate) fn sibling_path(file_name: &str) -> Result<PathBuf> {
    Ok(get_config_base_dir()
        .context("Could not determine config directory")?
        .join(file_name))
}
