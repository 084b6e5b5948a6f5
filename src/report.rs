//! The daily report: everything the notification and alarm layers need from one run.
//!
//! Generating a report is a pure function of the location, the reference instant, the
//! message catalog and the labeler. Showing the notification and scheduling tomorrow's
//! wake-up are left to whoever consumes the report.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::Serialize;

use crate::constants::APP_NAME;
use crate::error::Result;
use crate::geo::Location;
use crate::geo::label::{LocationLabeler, label_or_coordinates};
use crate::message::{MessageCatalog, MessageSelector, ResolvedMessage};
use crate::phase::{CurrentPhase, DayPair, PhaseWindow};

/// Options that shape a report beyond its inputs.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Include the notification payload and the wake-up time for tomorrow
    pub notifications: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            notifications: crate::constants::DEFAULT_NOTIFICATIONS,
        }
    }
}

/// Plain-text notification content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Current phase as presented to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseSummary {
    #[serde(flatten)]
    pub phase: CurrentPhase,
    /// Palette value for the phase's colour token
    pub color_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReport {
    pub location: Location,
    pub location_label: String,
    pub day_of_year: u32,
    pub phase: PhaseSummary,
    /// Which days the message compares
    pub compared: DayPair,
    pub message: ResolvedMessage,
    pub today_sunrise: Option<DateTime<Utc>>,
    pub today_sunset: Option<DateTime<Utc>>,
    pub tomorrow_sunrise: Option<DateTime<Utc>>,
    /// When to run again: tomorrow's sunrise, only with notifications enabled
    pub wakeup: Option<DateTime<Utc>>,
    pub notification: Option<Notification>,
}

impl DailyReport {
    /// Build the report for `location` at `now`.
    ///
    /// The calendar date and day of year are taken from `now`'s zone.
    pub fn generate<Tz: TimeZone>(
        location: Location,
        now: &DateTime<Tz>,
        catalog: &MessageCatalog,
        labeler: &dyn LocationLabeler,
        options: ReportOptions,
    ) -> Result<Self> {
        let window = PhaseWindow::compute(location, now);
        let phase = window.current_phase(now, &catalog.phases);
        let compared = DayPair::for_phase(phase.kind);
        let day_of_year = now.ordinal();

        let message = MessageSelector::new(catalog).select(
            &phase,
            window.day_length_delta(compared),
            day_of_year,
        )?;

        let notification = options.notifications.then(|| Notification {
            title: APP_NAME.to_string(),
            body: message.plain_text(),
        });
        let wakeup = window
            .tomorrow_sunrise()
            .filter(|_| options.notifications);

        Ok(Self {
            location,
            location_label: label_or_coordinates(labeler, &location),
            day_of_year,
            phase: PhaseSummary {
                color_value: catalog.color_value(phase.color).to_string(),
                phase,
            },
            compared,
            message,
            today_sunrise: window.today_sunrise(),
            today_sunset: window.today_sunset(),
            tomorrow_sunrise: window.tomorrow_sunrise(),
            wakeup,
            notification,
        })
    }
}
