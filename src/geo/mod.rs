//! Geographic location handling and sunrise/sunset calculations.
//!
//! ## Module Structure
//!
//! - [`location`]: Validated coordinates and fresh-fix/cached-fix resolution
//! - [`cache`]: Persistence of the last known location between runs
//! - [`label`]: Display labels for a location (the reverse-geocoding seam)
//! - [`solar`]: Per-date solar events via the `sunrise` crate, with polar day/night markers,
//!   and the timezone at a pair of coordinates

pub mod cache;
pub mod label;
pub mod location;
pub mod solar;

pub use cache::LocationCache;
pub use label::{CoordinateLabel, FixedLabel, LocationLabeler};
pub use location::Location;
pub use solar::{day_phases, determine_timezone_from_coordinates, polar_condition};

#[cfg(test)]
mod tests;
