//! Default config creation.
//!
//! Writes a first-run `daylight.toml` with every setting documented. Coordinates are left
//! commented out: there is no way to guess them, and an unset location falls back to the
//! last cached one.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::private_path;
use crate::constants::DEFAULT_NOTIFICATIONS;

/// Create a default config file at `path`, including missing parent directories.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let config_content = ConfigBuilder::new()
        .add_section("Location")
        .add_commented_setting("latitude", "59.91", "Geographic latitude (-90 to 90)")
        .add_commented_setting("longitude", "10.75", "Geographic longitude (-180 to 180)")
        .add_commented_setting(
            "location_name",
            "\"Oslo\"",
            "Label shown with the report (default: coordinates)",
        )
        .add_commented_setting(
            "timezone",
            "\"Europe/Oslo\"",
            "IANA zone deciding the calendar date (default: zone at the coordinates)",
        )
        .add_section("Notifications")
        .add_setting(
            "notifications",
            &DEFAULT_NOTIFICATIONS.to_string(),
            "Include the notification and next wake-up in the report",
        )
        .build();

    fs::write(path, config_content + "\n")
        .with_context(|| format!("Failed to write default config to {}", private_path(path)))?;

    log_indented!("Created default configuration: {}", private_path(path));

    Ok(())
}

struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

#[derive(Clone)]
struct ConfigEntry {
    content: String,
    entry_type: EntryType,
}

#[derive(Clone)]
enum EntryType {
    Section,
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry {
            content: format!("#[{title}]"),
            entry_type: EntryType::Section,
        });
        self
    }

    fn add_setting(self, key: &str, value: &str, comment: &str) -> Self {
        self.push_setting(format!("{key} = {value}"), comment)
    }

    /// A setting shown as an example but left disabled.
    fn add_commented_setting(self, key: &str, value: &str, comment: &str) -> Self {
        self.push_setting(format!("# {key} = {value}"), comment)
    }

    fn push_setting(mut self, line: String, comment: &str) -> Self {
        self.entries.push(ConfigEntry {
            content: line.clone(),
            entry_type: EntryType::Setting {
                line,
                comment: format!("# {comment}"),
            },
        });
        self
    }

    fn build(self) -> String {
        // Align comments one space past the longest setting line
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match &entry.entry_type {
                EntryType::Setting { line, .. } => Some(line.len()),
                EntryType::Section => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut result = Vec::new();
        let mut first_section = true;

        for entry in self.entries {
            match entry.entry_type {
                EntryType::Section => {
                    if !first_section {
                        result.push(String::new());
                    }
                    result.push(entry.content);
                    first_section = false;
                }
                EntryType::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{line}{padding}{comment}"));
                }
            }
        }

        result.join("\n")
    }
}
