//! Human-readable output for a daily report.
//!
//! All times are shown in the zone the report was computed for, so the printed sunrise
//! matches the calendar date the message talks about.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use std::fmt::Display;

use crate::geo::Location;
use crate::phase::{DayPair, PhaseWindow};
use crate::report::DailyReport;

/// Log the report as a block: location, today's sun times, phase, message.
pub fn log_report<Tz>(report: &DailyReport, tz: &Tz)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    log_block_start!("{}", report.location_label);
    log_indented!("Coordinates: {}", report.location);
    log_indented!("Day of year: {}", report.day_of_year);

    match (report.today_sunrise, report.today_sunset) {
        (Some(sunrise), Some(sunset)) => {
            log_indented!("    Sunrise: {}", format_time(sunrise, tz));
            log_indented!("     Sunset: {}", format_time(sunset, tz));
            log_indented!("   Daylight: {}", format_duration(sunset - sunrise));
        }
        _ => log_indented!("The sun does not cross the horizon today"),
    }

    log_block_start!(
        "Current phase: {} ({})",
        report.phase.phase.name,
        report.phase.color_value
    );
    log_indented!(
        "Comparing {}",
        match report.compared {
            DayPair::YesterdayToToday => "today with yesterday",
            DayPair::TodayToTomorrow => "tomorrow with today",
        }
    );

    log_block_start!("Today's message");
    log_decorated!("{}", report.message.plain_text());
    log_indented!(
        "Pool: {} (template {})",
        report.message.pool,
        report.message.template_index
    );

    match report.wakeup {
        Some(wakeup) => log_indented!("Next update: {}", format_date_time(wakeup, tz)),
        None if report.notification.is_some() => {
            log_indented!("Next update: no sunrise tomorrow")
        }
        None => {}
    }
}

/// Log every solar event of the three days around `now`, for `--debug`.
pub fn log_solar_debug_info<Tz>(location: Location, now: &DateTime<Tz>)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let tz = now.timezone();
    let window = PhaseWindow::compute(location, now);

    log_pipe!();
    log_debug!("Solar calculation details:");
    log_indented!("Raw coordinates: {:.4}°, {:.4}°", location.latitude(), location.longitude());

    for (label, day) in [
        ("Yesterday", window.yesterday()),
        ("Today", window.today()),
        ("Tomorrow", window.tomorrow()),
    ] {
        log_indented!("--- {label} ({}) ---", day.date());
        if let Some(polar) = day.polar_condition() {
            log_indented!("Polar condition: {polar:?}");
        }
        for transition in day.transitions() {
            log_indented!(
                "{:>22}: {}",
                transition.kind.display_name(),
                format_date_time(transition.time, &tz)
            );
        }
        if let Some(length) = day.day_length() {
            log_indented!("{:>22}: {}", "Day length", format_duration(length));
        }
    }
}

fn format_time<Tz>(time: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.with_timezone(tz).format("%H:%M:%S").to_string()
}

fn format_date_time<Tz>(time: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.with_timezone(tz).format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

/// Format a duration as "13h 05m".
pub fn format_duration(duration: TimeDelta) -> String {
    let total_minutes = duration.num_minutes();
    let sign = if total_minutes < 0 { "-" } else { "" };
    let total_minutes = total_minutes.abs();
    format!("{sign}{}h {:02}m", total_minutes / 60, total_minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::minutes(785)), "13h 05m");
        assert_eq!(format_duration(TimeDelta::seconds(59)), "0h 00m");
        assert_eq!(format_duration(TimeDelta::minutes(-90)), "-1h 30m");
    }

    #[test]
    fn test_format_time_uses_zone() {
        let time = DateTime::parse_from_rfc3339("2024-06-21T01:45:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_time(time, &chrono_tz::Europe::Oslo), "03:45:00");
        assert_eq!(
            format_date_time(time, &chrono_tz::America::New_York),
            "2024-06-20 21:45:00 EDT"
        );
    }
}
