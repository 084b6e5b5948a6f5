//! Validated geographic coordinates.

use serde::Serialize;
use std::fmt;

use crate::error::{Result, SolError};

/// A point on the earth's surface, in degrees.
///
/// Construction goes through [`Location::new`], so every value in circulation has a
/// latitude within -90..=90 and a longitude within -180..=180.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(SolError::InvalidLocation(format!(
                "latitude must be between -90 and 90 degrees (got {latitude})"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(SolError::InvalidLocation(format!(
                "longitude must be between -180 and 180 degrees (got {longitude})"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Pick the location to compute for.
    ///
    /// A fresh fix always wins; otherwise the last cached one is used. With neither there
    /// is nothing sensible to guess, so this fails instead of picking a default.
    pub fn resolve(current: Option<Location>, cached: Option<Location>) -> Result<Location> {
        current.or(cached).ok_or_else(|| {
            SolError::InvalidLocation("no current or cached location available".to_string())
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}°{ns}, {:.4}°{ew}",
            self.latitude.abs(),
            self.longitude.abs()
        )
    }
}
