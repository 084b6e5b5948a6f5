//! Three consecutive days of sun phases around a reference instant.
//!
//! The window is anchored on the calendar date of "now" in the zone it is expressed in,
//! and holds the day before, that day, and the day after. Phase lookups and day-length
//! comparisons are done on absolute instants, so DST shifts never move a boundary.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Utc};
use serde::Serialize;

use super::{CurrentPhase, DayPhases, PhaseKind, PhaseStyles};
use crate::geo::{Location, solar};

/// Which two adjacent days of the window to compare.
///
/// Yesterday and tomorrow are never compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPair {
    YesterdayToToday,
    TodayToTomorrow,
}

impl DayPair {
    /// The comparison that matters for a message shown during `phase`.
    ///
    /// At night the message looks ahead to the coming day; during the day it reports on
    /// today against yesterday.
    pub fn for_phase(phase: PhaseKind) -> Self {
        if phase.is_night() {
            Self::TodayToTomorrow
        } else {
            Self::YesterdayToToday
        }
    }
}

/// Signed change in day length between two adjacent days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLengthDelta {
    /// Later day's length minus earlier day's length; positive means the later day is longer
    Known(TimeDelta),
    /// At least one of the two days has no sunrise or no sunset
    Indeterminate,
}

impl DayLengthDelta {
    pub fn is_getting_longer(&self) -> bool {
        matches!(self, Self::Known(delta) if *delta > TimeDelta::zero())
    }

    /// Whole minutes of change, rounded half away from zero.
    pub fn rounded_minutes(&self) -> Option<u32> {
        match self {
            Self::Known(delta) => Some(round_minutes(*delta)),
            Self::Indeterminate => None,
        }
    }
}

/// `|delta|` in whole minutes, with exact half minutes rounded up (90 s is 2 minutes).
pub fn round_minutes(delta: TimeDelta) -> u32 {
    let minutes = (delta.num_milliseconds() as f64 / 60_000.0).abs();
    minutes.round() as u32
}

/// Sun phases for yesterday, today and tomorrow at one location.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseWindow {
    location: Location,
    yesterday: DayPhases,
    today: DayPhases,
    tomorrow: DayPhases,
}

impl PhaseWindow {
    /// Compute the window around `now`, using `now`'s zone to decide what "today" is.
    pub fn compute<Tz: TimeZone>(location: Location, now: &DateTime<Tz>) -> Self {
        let today = now.date_naive();
        Self {
            location,
            yesterday: solar::day_phases(&location, today - TimeDelta::days(1)),
            today: solar::day_phases(&location, today),
            tomorrow: solar::day_phases(&location, today + TimeDelta::days(1)),
        }
    }

    /// Build a window from hand-picked days, for tests outside this crate.
    #[cfg(any(test, feature = "testing-support"))]
    pub fn from_days(
        location: Location,
        yesterday: DayPhases,
        today: DayPhases,
        tomorrow: DayPhases,
    ) -> Self {
        debug_assert_eq!(yesterday.date().succ_opt(), Some(today.date()));
        debug_assert_eq!(today.date().succ_opt(), Some(tomorrow.date()));
        Self {
            location,
            yesterday,
            today,
            tomorrow,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn yesterday(&self) -> &DayPhases {
        &self.yesterday
    }

    pub fn today(&self) -> &DayPhases {
        &self.today
    }

    pub fn tomorrow(&self) -> &DayPhases {
        &self.tomorrow
    }

    /// The local calendar date the window is anchored on.
    pub fn date(&self) -> NaiveDate {
        self.today.date()
    }

    /// Day of the year of the anchor date, starting at 1 on January 1st.
    pub fn day_of_year(&self) -> u32 {
        self.today.date().ordinal()
    }

    pub fn today_sunrise(&self) -> Option<DateTime<Utc>> {
        self.today.sunrise()
    }

    pub fn today_sunset(&self) -> Option<DateTime<Utc>> {
        self.today.sunset()
    }

    /// When the next day's sun comes up; the natural wake-up time for tomorrow's message.
    pub fn tomorrow_sunrise(&self) -> Option<DateTime<Utc>> {
        self.tomorrow.sunrise()
    }

    /// Phase in effect at `now`.
    ///
    /// A boundary belongs to the phase it opens: at the exact instant of sunrise it is
    /// already day. Before today's first boundary the phase carries over from yesterday.
    /// A day with neither crossing is in its polar condition all day, so the first day of
    /// midnight sun is day even though yesterday ended with a sunset.
    pub fn current_phase_kind<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> PhaseKind {
        let now = now.with_timezone(&Utc);
        let today_is_polar = self.today.sunrise().is_none() && self.today.sunset().is_none();

        self.today
            .phase_at(now)
            .or_else(|| {
                self.today
                    .polar_condition()
                    .filter(|_| today_is_polar)
                    .map(|polar| polar.phase())
            })
            .or_else(|| self.yesterday.phase_at(now))
            .or_else(|| {
                self.today
                    .polar_condition()
                    .or(self.yesterday.polar_condition())
                    .map(|polar| polar.phase())
            })
            .unwrap_or(PhaseKind::Night)
    }

    /// Phase in effect at `now`, with the name and colour configured for it.
    pub fn current_phase<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        styles: &PhaseStyles,
    ) -> CurrentPhase {
        CurrentPhase::styled(self.current_phase_kind(now), styles)
    }

    /// Day length of the later day of `pair` minus that of the earlier one.
    pub fn day_length_delta(&self, pair: DayPair) -> DayLengthDelta {
        let (earlier, later) = match pair {
            DayPair::YesterdayToToday => (&self.yesterday, &self.today),
            DayPair::TodayToTomorrow => (&self.today, &self.tomorrow),
        };

        match (earlier.day_length(), later.day_length()) {
            (Some(earlier), Some(later)) => DayLengthDelta::Known(later - earlier),
            _ => DayLengthDelta::Indeterminate,
        }
    }
}
