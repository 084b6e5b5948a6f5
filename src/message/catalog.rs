//! Message templates and the presentation data that goes with them.
//!
//! A catalog is plain configuration: ten named template pools, the singular/plural unit
//! words, the colour palette, and per-phase display names. The built-in catalog lives in
//! `src/config/default_messages.toml`; a `messages.toml` next to the user's config
//! replaces it wholesale.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

use super::PoolKey;
use crate::error::SolError;
use crate::phase::{PhaseStyles, ThemeColor};

const BUILTIN_CATALOG: &str = include_str!("../config/default_messages.toml");

/// Localised unit words used for `{minutes}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Units {
    pub singular: String,
    pub plural: String,
}

impl Default for Units {
    fn default() -> Self {
        Self {
            singular: "minute".to_string(),
            plural: "minutes".to_string(),
        }
    }
}

impl Units {
    /// Singular for exactly one minute; everything else, zero included, is plural.
    pub fn for_minutes(&self, minutes: u32) -> &str {
        if minutes == 1 {
            &self.singular
        } else {
            &self.plural
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageCatalog {
    #[serde(default)]
    pub units: Units,

    /// Value substituted for `{color}`, keyed by theme token name
    #[serde(default)]
    pub palette: BTreeMap<String, String>,

    #[serde(default)]
    pub phases: PhaseStyles,

    #[serde(default)]
    pub pools: BTreeMap<String, Vec<String>>,
}

impl MessageCatalog {
    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_CATALOG).context("Built-in message catalog is malformed")
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse message catalog")
    }

    /// Templates of one pool.
    pub fn pool(&self, key: PoolKey) -> Result<&[String], SolError> {
        match self.pools.get(key.name()) {
            Some(templates) if !templates.is_empty() => Ok(templates),
            _ => Err(SolError::MissingPool(key)),
        }
    }

    /// What to substitute for `{color}`. Unmapped tokens render as their own name.
    pub fn color_value(&self, color: ThemeColor) -> &str {
        self.palette
            .get(color.as_str())
            .map(String::as_str)
            .unwrap_or(color.as_str())
    }

    /// Every pool the selector can ask for that is missing or empty.
    pub fn missing_pools(&self) -> Vec<PoolKey> {
        PoolKey::all()
            .into_iter()
            .filter(|key| self.pool(*key).is_err())
            .collect()
    }
}
