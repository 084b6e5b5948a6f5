//! Configuration validation functionality.
//!
//! Rejects settings that cannot produce a report: out-of-range or half-specified
//! coordinates, unknown timezones, and message catalogs with pools missing.

use anyhow::Result;

use super::Config;
use crate::message::MessageCatalog;
use crate::phase::PhaseKind;

/// Validate `daylight.toml` contents.
///
/// Coordinates and timezone are checked by parsing them the way a run will use them.
pub fn validate_config(config: &Config) -> Result<()> {
    config.location()?;
    config.timezone()?;
    Ok(())
}

/// Validate a message catalog.
///
/// Every pool the selector can ask for must be present and non-empty, and phase styles
/// may only be given for known phases.
pub fn validate_catalog(catalog: &MessageCatalog) -> Result<()> {
    let missing = catalog.missing_pools();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|key| key.name()).collect();
        anyhow::bail!(
            "message catalog is missing or has empty pools: {}",
            names.join(", ")
        );
    }

    let unknown = catalog.phases.unknown_keys();
    if !unknown.is_empty() {
        let known: Vec<&str> = PhaseKind::ALL.iter().map(PhaseKind::as_str).collect();
        anyhow::bail!(
            "unknown phase name(s) in [phases]: {} (expected one of: {})",
            unknown.join(", "),
            known.join(", ")
        );
    }

    Ok(())
}
