//! Daily message selection.
//!
//! The selector turns a phase and a day-length delta into one message:
//!
//! 1. classify: night or day, getting longer or shorter, whole minutes of change
//! 2. pick the pool for that classification (a "less than a minute" variant is used when
//!    the change rounds to zero, and a polar pool when the change is indeterminate)
//! 3. pick the template at `day_of_year % pool length`, so the message is stable for the
//!    whole day and rotates from one day to the next
//! 4. substitute `{color}`, `{numMinutes}` and `{minutes}`
//!
//! The rotation restarts every January 1st. A pool of N templates repeats every N days
//! within a year, not across year boundaries.

pub mod catalog;

pub use catalog::{MessageCatalog, Units};

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::Result;
use crate::phase::{CurrentPhase, DayLengthDelta, DayPair, PhaseWindow};

/// Identifies one template pool of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKey {
    Daily {
        night: bool,
        longer: bool,
        under_a_minute: bool,
    },
    /// Fallback for days where the sun never sets
    MidnightSun,
    /// Fallback for days where the sun never rises
    PolarNight,
}

impl PoolKey {
    pub fn all() -> Vec<PoolKey> {
        let mut keys = Vec::with_capacity(10);
        for night in [false, true] {
            for longer in [true, false] {
                for under_a_minute in [false, true] {
                    keys.push(PoolKey::Daily {
                        night,
                        longer,
                        under_a_minute,
                    });
                }
            }
        }
        keys.push(PoolKey::MidnightSun);
        keys.push(PoolKey::PolarNight);
        keys
    }

    /// Name of the pool in the catalog's `[pools]` table.
    pub fn name(&self) -> &'static str {
        match *self {
            Self::Daily {
                night: false,
                longer: true,
                under_a_minute: false,
            } => "day_positive",
            Self::Daily {
                night: false,
                longer: true,
                under_a_minute: true,
            } => "day_positive_less_than_one_minute",
            Self::Daily {
                night: false,
                longer: false,
                under_a_minute: false,
            } => "day_negative",
            Self::Daily {
                night: false,
                longer: false,
                under_a_minute: true,
            } => "day_negative_less_than_one_minute",
            Self::Daily {
                night: true,
                longer: true,
                under_a_minute: false,
            } => "night_positive",
            Self::Daily {
                night: true,
                longer: true,
                under_a_minute: true,
            } => "night_positive_less_than_one_minute",
            Self::Daily {
                night: true,
                longer: false,
                under_a_minute: false,
            } => "night_negative",
            Self::Daily {
                night: true,
                longer: false,
                under_a_minute: true,
            } => "night_negative_less_than_one_minute",
            Self::MidnightSun => "midnight_sun",
            Self::PolarNight => "polar_night",
        }
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for PoolKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A fully substituted message and how it was chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedMessage {
    pub text: String,
    pub pool: PoolKey,
    pub template_index: usize,
    /// Whole minutes of change; zero for polar fallbacks
    pub minutes: u32,
    pub getting_longer: bool,
}

impl ResolvedMessage {
    /// The message with markup tags removed, for plain-text surfaces like notifications.
    pub fn plain_text(&self) -> String {
        strip_markup(&self.text)
    }
}

/// Picks and fills in message templates from a catalog.
#[derive(Debug, Clone, Copy)]
pub struct MessageSelector<'a> {
    catalog: &'a MessageCatalog,
}

impl<'a> MessageSelector<'a> {
    pub fn new(catalog: &'a MessageCatalog) -> Self {
        Self { catalog }
    }

    /// Choose today's message for `phase` given the relevant day-length `delta`.
    pub fn select(
        &self,
        phase: &CurrentPhase,
        delta: DayLengthDelta,
        day_of_year: u32,
    ) -> Result<ResolvedMessage> {
        let night = phase.is_night();
        let (pool, minutes, getting_longer) = match delta {
            DayLengthDelta::Known(_) => {
                let minutes = delta.rounded_minutes().unwrap_or_default();
                let longer = delta.is_getting_longer();
                let key = PoolKey::Daily {
                    night,
                    longer,
                    under_a_minute: minutes == 0,
                };
                (key, minutes, longer)
            }
            DayLengthDelta::Indeterminate if night => (PoolKey::PolarNight, 0, false),
            DayLengthDelta::Indeterminate => (PoolKey::MidnightSun, 0, false),
        };

        let templates = self.catalog.pool(pool)?;
        let template_index = day_of_year as usize % templates.len();
        let text = self.fill(&templates[template_index], phase, minutes);

        Ok(ResolvedMessage {
            text,
            pool,
            template_index,
            minutes,
            getting_longer,
        })
    }

    /// Choose the message for `phase`, comparing the pair of days that fits it.
    pub fn select_for_window(
        &self,
        window: &PhaseWindow,
        phase: &CurrentPhase,
        day_of_year: u32,
    ) -> Result<ResolvedMessage> {
        let delta = window.day_length_delta(DayPair::for_phase(phase.kind));
        self.select(phase, delta, day_of_year)
    }

    fn fill(&self, template: &str, phase: &CurrentPhase, minutes: u32) -> String {
        template
            .replace("{color}", self.catalog.color_value(phase.color))
            .replace("{numMinutes}", &minutes.to_string())
            .replace("{minutes}", self.catalog.units.for_minutes(minutes))
    }
}

/// Drop everything between `<` and `>`, keeping the text content.
pub fn strip_markup(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_tag = false;

    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }

    result
}
