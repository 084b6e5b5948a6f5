//! Solar events for one location and one calendar date.
//!
//! Event instants come from the `sunrise` crate. In polar regions the sun may not
//! cross the horizon at all on a given date, and the library then has no meaningful
//! answer. Such results are dropped and the day is marked with a [`PolarCondition`]
//! instead, so callers always get a `DayPhases` and never an error.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use sunrise::{Coordinates, DawnType, SolarDay, SolarEvent};
use tzf_rs::DefaultFinder;

use super::Location;
use crate::constants::{AXIAL_TILT_DEGREES, SUNRISE_ALTITUDE_DEGREES};
use crate::phase::{DayPhases, PhaseInstant, PhaseKind, PolarCondition};

/// Events reported outside this window around the date cannot belong to it.
const PLAUSIBLE_DAYS_BEFORE_DATE: i64 = 1;
const PLAUSIBLE_DAYS_AFTER_DATE: i64 = 2;

/// Timezone boundary data, loaded on first lookup.
static TIMEZONE_FINDER: Lazy<DefaultFinder> = Lazy::new(DefaultFinder::new);

const TWILIGHTS: [(DawnType, PhaseKind); 3] = [
    (DawnType::Astronomical, PhaseKind::AstronomicalTwilight),
    (DawnType::Nautical, PhaseKind::NauticalTwilight),
    (DawnType::Civil, PhaseKind::CivilTwilight),
];

/// Compute every solar event of `date` at `location`.
pub fn day_phases(location: &Location, date: NaiveDate) -> DayPhases {
    let latitude = location.latitude();
    let Some(coordinates) = Coordinates::new(latitude, location.longitude()) else {
        // Location is range-checked on construction; treat a rejection like a day
        // without horizon crossings rather than failing.
        return DayPhases::assemble(date, Vec::new(), Some(classify_polar(latitude, date)));
    };

    let solar_day = SolarDay::new(coordinates, date);
    let event = |event: SolarEvent| plausible(date, solar_day.event_time(event));

    let (sunrise, sunset) = match (event(SolarEvent::Sunrise), event(SolarEvent::Sunset)) {
        (Some(rise), Some(set)) if rise < set => (Some(rise), Some(set)),
        // A lone or inverted crossing means the sun only grazes the horizon
        _ => (None, None),
    };
    let polar = sunrise.is_none().then(|| classify_polar(latitude, date));

    let mut transitions = Vec::with_capacity(8);
    transitions.extend(sunrise.map(|t| PhaseInstant::new(PhaseKind::Sunrise, t)));
    transitions.extend(sunset.map(|t| PhaseInstant::new(PhaseKind::Sunset, t)));
    for (dawn_type, kind) in TWILIGHTS {
        for twilight in [SolarEvent::Dawn(dawn_type), SolarEvent::Dusk(dawn_type)] {
            transitions.extend(event(twilight).map(|t| PhaseInstant::new(kind, t)));
        }
    }

    DayPhases::assemble(date, transitions, polar)
}

/// IANA timezone the coordinates fall in, for deciding the local calendar date.
///
/// Points the boundary data has no zone for, or whose zone chrono-tz does not know,
/// fall back to UTC.
pub fn determine_timezone_from_coordinates(latitude: f64, longitude: f64) -> Tz {
    TIMEZONE_FINDER
        .get_tz_name(longitude, latitude)
        .parse::<Tz>()
        .unwrap_or(Tz::UTC)
}

/// Whether the sun stays above or below the horizon for the whole of `date`, from an
/// approximate declination.
///
/// Returns `None` on ordinary days. [`day_phases`] trusts the `sunrise` crate for the
/// crossings and only uses this to name the condition of a day without them.
pub fn polar_condition(latitude: f64, date: NaiveDate) -> Option<PolarCondition> {
    let cos_hour_angle = sunrise_hour_angle_cosine(latitude, date);
    if cos_hour_angle > 1.0 {
        Some(PolarCondition::PolarNight)
    } else if cos_hour_angle < -1.0 {
        Some(PolarCondition::MidnightSun)
    } else {
        None
    }
}

/// Side of the horizon the sun stays on for a day the library found no crossings for.
///
/// The approximate declination can lag the real edge of the polar season by a few
/// days, so near the edge the side the sun spends most of `date` on decides.
fn classify_polar(latitude: f64, date: NaiveDate) -> PolarCondition {
    polar_condition(latitude, date).unwrap_or_else(|| {
        if sunrise_hour_angle_cosine(latitude, date) <= 0.0 {
            PolarCondition::MidnightSun
        } else {
            PolarCondition::PolarNight
        }
    })
}

/// Cosine of the sunrise hour angle; outside [-1, 1] the sun never reaches the horizon.
fn sunrise_hour_angle_cosine(latitude: f64, date: NaiveDate) -> f64 {
    let phi = latitude.to_radians();
    let delta = solar_declination_degrees(date).to_radians();

    let numerator = SUNRISE_ALTITUDE_DEGREES.to_radians().sin() - phi.sin() * delta.sin();
    let denominator = phi.cos() * delta.cos();

    if denominator.abs() < f64::EPSILON {
        // At the poles only the sign of the numerator matters
        return if numerator > 0.0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        };
    }
    numerator / denominator
}

/// Approximate solar declination for the date, in degrees.
fn solar_declination_degrees(date: NaiveDate) -> f64 {
    let day_of_year = f64::from(date.ordinal());
    -AXIAL_TILT_DEGREES * (360.0 / 365.0 * (day_of_year + 10.0)).to_radians().cos()
}

fn plausible(date: NaiveDate, time: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    let window = (midnight - TimeDelta::days(PLAUSIBLE_DAYS_BEFORE_DATE))
        ..(midnight + TimeDelta::days(PLAUSIBLE_DAYS_AFTER_DATE));
    window.contains(&time).then_some(time)
}
