//! Sun phases for a location: per-day transition boundaries and the three-day window.
//!
//! A [`DayPhases`] holds every solar event of one local calendar date as absolute (UTC)
//! instants. Only two kinds of boundary change the current phase: a `Sunrise` opens
//! `Day` and a `Sunset` opens `Night`. Twilight boundaries are kept for display and
//! never flip the phase on their own.
//!
//! When the sun does not cross the horizon on a date (midnight sun, polar night) the day
//! carries a [`PolarCondition`] in place of the missing sunrise/sunset.

pub mod style;
pub mod window;

pub use style::{PhaseStyle, PhaseStyles, ThemeColor};
pub use window::{DayLengthDelta, DayPair, PhaseWindow};

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a solar phase, or of the boundary at which that phase begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Night,
    AstronomicalTwilight,
    NauticalTwilight,
    CivilTwilight,
    Sunrise,
    Day,
    Sunset,
}

impl PhaseKind {
    pub const ALL: [PhaseKind; 7] = [
        PhaseKind::Night,
        PhaseKind::AstronomicalTwilight,
        PhaseKind::NauticalTwilight,
        PhaseKind::CivilTwilight,
        PhaseKind::Sunrise,
        PhaseKind::Day,
        PhaseKind::Sunset,
    ];

    /// Configuration key for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Night => "night",
            Self::AstronomicalTwilight => "astronomical_twilight",
            Self::NauticalTwilight => "nautical_twilight",
            Self::CivilTwilight => "civil_twilight",
            Self::Sunrise => "sunrise",
            Self::Day => "day",
            Self::Sunset => "sunset",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Night => "Night",
            Self::AstronomicalTwilight => "Astronomical twilight",
            Self::NauticalTwilight => "Nautical twilight",
            Self::CivilTwilight => "Civil twilight",
            Self::Sunrise => "Sunrise",
            Self::Day => "Day",
            Self::Sunset => "Sunset",
        }
    }

    /// The phase that begins at a boundary of this kind, if it changes the phase at all.
    pub fn opens(&self) -> Option<PhaseKind> {
        match self {
            Self::Sunrise => Some(Self::Day),
            Self::Sunset => Some(Self::Night),
            _ => None,
        }
    }

    pub fn is_night(&self) -> bool {
        matches!(self, Self::Night)
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One transition boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseInstant {
    pub kind: PhaseKind,
    pub time: DateTime<Utc>,
}

impl PhaseInstant {
    pub fn new(kind: PhaseKind, time: DateTime<Utc>) -> Self {
        Self { kind, time }
    }
}

/// Why a day has no sunrise or sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolarCondition {
    /// The sun stays above the horizon all day
    MidnightSun,
    /// The sun stays below the horizon all day
    PolarNight,
}

impl PolarCondition {
    /// The phase that holds for the whole day.
    pub fn phase(&self) -> PhaseKind {
        match self {
            Self::MidnightSun => PhaseKind::Day,
            Self::PolarNight => PhaseKind::Night,
        }
    }
}

/// All solar events of one local calendar date, ordered by time.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPhases {
    date: NaiveDate,
    transitions: Vec<PhaseInstant>,
    polar: Option<PolarCondition>,
}

impl DayPhases {
    /// Assemble a day from its boundaries.
    ///
    /// Boundaries are sorted by time. The solar calculation guarantees that a day with
    /// both a sunrise and a sunset has the sunrise first, and that `polar` is set whenever
    /// either one is missing.
    pub(crate) fn assemble(
        date: NaiveDate,
        mut transitions: Vec<PhaseInstant>,
        polar: Option<PolarCondition>,
    ) -> Self {
        transitions.sort_by_key(|t| t.time);
        Self {
            date,
            transitions,
            polar,
        }
    }

    /// Build a day from hand-picked boundaries, for tests outside this crate.
    #[cfg(any(test, feature = "testing-support"))]
    pub fn new(
        date: NaiveDate,
        transitions: Vec<PhaseInstant>,
        polar: Option<PolarCondition>,
    ) -> Self {
        Self::assemble(date, transitions, polar)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn transitions(&self) -> &[PhaseInstant] {
        &self.transitions
    }

    pub fn polar_condition(&self) -> Option<PolarCondition> {
        self.polar
    }

    fn first_of(&self, kind: PhaseKind) -> Option<DateTime<Utc>> {
        self.transitions
            .iter()
            .find(|t| t.kind == kind)
            .map(|t| t.time)
    }

    pub fn sunrise(&self) -> Option<DateTime<Utc>> {
        self.first_of(PhaseKind::Sunrise)
    }

    pub fn sunset(&self) -> Option<DateTime<Utc>> {
        self.first_of(PhaseKind::Sunset)
    }

    /// Midpoint between sunrise and sunset.
    pub fn solar_noon(&self) -> Option<DateTime<Utc>> {
        let (sunrise, sunset) = (self.sunrise()?, self.sunset()?);
        Some(sunrise + (sunset - sunrise) / 2)
    }

    /// Time between sunrise and sunset, when the day has both.
    pub fn day_length(&self) -> Option<TimeDelta> {
        Some(self.sunset()? - self.sunrise()?)
    }

    /// The phase opened by the last phase-changing boundary at or before `now`.
    pub fn phase_at(&self, now: DateTime<Utc>) -> Option<PhaseKind> {
        self.transitions
            .iter()
            .take_while(|t| t.time <= now)
            .filter_map(|t| t.kind.opens())
            .last()
    }
}

/// The phase "now" falls into, with its presentation attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentPhase {
    pub kind: PhaseKind,
    pub name: String,
    pub color: ThemeColor,
}

impl CurrentPhase {
    pub fn styled(kind: PhaseKind, styles: &PhaseStyles) -> Self {
        let style = styles.style_for(kind);
        Self {
            kind,
            name: style.name,
            color: style.color,
        }
    }

    pub fn is_night(&self) -> bool {
        self.kind.is_night()
    }
}
