//! Main application entry point and high-level flow coordination.
//!
//! One run produces one daily report:
//!
//! 1. Argument parsing and early exit for help/version
//! 2. Configuration and message catalog loading
//! 3. Location resolution, falling back to the last cached location
//! 4. Timezone of the location and time source setup (`--at` pins the clock)
//! 5. Report generation and output, either as a log block or as JSON
//!
//! Showing the notification and scheduling the next run at tomorrow's sunrise belong to
//! whatever launches daylight; the report carries both the notification text and the
//! wake-up instant for that purpose.

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::sync::Arc;

use daylight::args::{self, CliAction, ParsedArgs};
use daylight::config::{self, Config};
use daylight::constants::EXIT_FAILURE;
use daylight::display;
use daylight::geo::{Location, LocationCache};
use daylight::logger::Log;
use daylight::message::MessageCatalog;
use daylight::report::{DailyReport, ReportOptions};
use daylight::time_source::{self, FixedTimeSource, RealTimeSource};
use daylight::{
    log_block_start, log_debug, log_end, log_error_exit, log_indented, log_info, log_pipe,
    log_version, log_warning,
};

/// Settings for one run, taken from the command line.
struct RunOptions {
    debug_enabled: bool,
    config_dir: Option<String>,
    at: Option<String>,
    json: bool,
}

fn main() {
    let parsed = ParsedArgs::from_env();

    match parsed.action {
        CliAction::ShowVersion => args::display_version_info(),
        CliAction::ShowHelp => args::display_help(),
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Run {
            debug_enabled,
            config_dir,
            at,
            json,
            quiet,
        } => {
            // JSON goes to stdout on its own; the log would corrupt it
            Log::set_enabled(!json && !quiet);

            let options = RunOptions {
                debug_enabled,
                config_dir,
                at,
                json,
            };
            if let Err(e) = run(options) {
                if Log::is_enabled() {
                    log_pipe!();
                    log_error_exit!("{e:#}");
                    log_end!();
                } else {
                    eprintln!("daylight: {e:#}");
                }
                std::process::exit(EXIT_FAILURE);
            }
        }
    }
}

fn run(options: RunOptions) -> Result<()> {
    log_version!();
    if options.debug_enabled {
        log_pipe!();
        log_debug!("Debug mode enabled - showing solar calculation details");
    }

    config::set_config_dir(options.config_dir.clone())?;
    let config = Config::load()?;
    if options.debug_enabled {
        config.log_config(&config::get_config_path()?);
    }
    let catalog = config::load_catalog()?;

    let location = resolve_location(&config, options.config_dir.is_some())?;
    // The location's own zone decides what "today" is, whatever zone the host runs in
    let tz = config.timezone_for(&location)?;
    if options.debug_enabled {
        log_pipe!();
        log_debug!("Calendar date taken in {tz}");
    }

    match &options.at {
        Some(at) => {
            let instant = time_source::parse_instant(at, Some(tz))
                .map_err(|e| anyhow::anyhow!(e))
                .with_context(|| format!("Invalid --at value '{at}'"))?;
            time_source::init_time_source(Arc::new(FixedTimeSource::new(instant)));
        }
        None => time_source::init_time_source(Arc::new(RealTimeSource)),
    }
    let now = time_source::now().with_timezone(&tz);

    report(&options, &config, &catalog, location, now)
}

fn report<Tz>(
    options: &RunOptions,
    config: &Config,
    catalog: &MessageCatalog,
    location: Location,
    now: DateTime<Tz>,
) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if options.debug_enabled {
        display::log_solar_debug_info(location, &now);
    }

    let report = DailyReport::generate(
        location,
        &now,
        catalog,
        &config.labeler(),
        ReportOptions {
            notifications: config.notifications_enabled(),
        },
    )?;

    if options.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        display::log_report(&report, &now.timezone());
        log_end!();
    }

    Ok(())
}

/// Configured coordinates win and are remembered; otherwise use the remembered ones.
fn resolve_location(config: &Config, custom_config_dir: bool) -> Result<Location> {
    let cache = if custom_config_dir {
        LocationCache::in_dir(&config::get_config_base_dir()?)
    } else {
        LocationCache::default_location()?
    };

    let configured = config.location()?;
    let cached = match cache.load() {
        Ok(cached) => cached,
        Err(e) => {
            log_pipe!();
            log_warning!("Ignoring unreadable location cache: {e:#}");
            None
        }
    };

    let location = Location::resolve(configured, cached).context(
        "No location available. Set latitude and longitude in daylight.toml",
    )?;

    if configured.is_some() && configured != cached {
        match cache.store(&location) {
            Ok(()) => {
                log_pipe!();
                log_info!("Remembered location for runs without coordinates");
            }
            Err(e) => {
                log_pipe!();
                log_warning!("Could not remember location: {e:#}");
            }
        }
    }

    if configured.is_none() {
        log_block_start!("Using last known location");
        log_indented!("{location}");
    }

    Ok(location)
}
