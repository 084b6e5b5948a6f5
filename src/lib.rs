//! # Daylight Library
//!
//! Internal library for the daylight binary application
//!
//! This library exists to enable testing of the solar and messaging internals and to keep a
//! clean separation between CLI dispatch (main.rs) and application logic.
//!
//! ## Architecture
//!
//! - **Geographic**: `geo` module for validated locations, the last-known location cache,
//!   location labels and the sunrise/sunset calculations backed by the `sunrise` crate
//! - **Phases**: `phase` module with the three-day `PhaseWindow`, current phase detection and
//!   day-length deltas
//! - **Messages**: `message` module with the template catalog and the day-of-year rotation
//! - **Report**: `report` module assembling everything the notification layer consumes
//! - **Configuration**: `config` module for TOML-based settings and message overrides
//! - **Infrastructure**: argument parsing, time source, logging

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod geo;
pub mod message;
pub mod phase;
pub mod report;
pub mod time_source;

pub use error::SolError;
pub use geo::Location;
pub use message::{MessageCatalog, MessageSelector, ResolvedMessage};
pub use phase::{CurrentPhase, DayLengthDelta, DayPair, PhaseKind, PhaseWindow};
pub use report::DailyReport;
