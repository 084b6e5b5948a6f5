//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. It supports the standard help,
//! version, and debug flags while gracefully handling unknown options.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Compute and print the daily report
    Run {
        debug_enabled: bool,
        config_dir: Option<String>,
        /// Instant to compute for instead of the current time
        at: Option<String>,
        json: bool,
        quiet: bool,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown or incomplete arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name and is skipped. Help and version flags take
    /// precedence over everything else, in that order: version, then help.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut json = false;
        let mut quiet = false;
        let mut unknown_arg_found = false;
        let mut config_dir: Option<String> = None;
        let mut at: Option<String> = None;

        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut iter = args_vec.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => debug_enabled = true,
                "--json" | "-j" => json = true,
                "--quiet" | "-q" => quiet = true,
                "--config" | "-c" => match iter.next() {
                    Some(dir) if !dir.starts_with('-') => config_dir = Some(dir.clone()),
                    _ => unknown_arg_found = true,
                },
                "--at" | "-a" => match iter.next() {
                    Some(instant) => at = Some(instant.clone()),
                    None => unknown_arg_found = true,
                },
                other => {
                    if let Some(dir) = other.strip_prefix("--config=") {
                        config_dir = Some(dir.to_string());
                    } else if let Some(instant) = other.strip_prefix("--at=") {
                        at = Some(instant.to_string());
                    } else {
                        unknown_arg_found = true;
                    }
                }
            }
        }

        let action = if display_version {
            CliAction::ShowVersion
        } else if display_help {
            CliAction::ShowHelp
        } else if unknown_arg_found {
            CliAction::ShowHelpDueToError
        } else {
            CliAction::Run {
                debug_enabled,
                config_dir,
                at,
                json,
                quiet,
            }
        };

        ParsedArgs { action }
    }

    /// Parse the process's own arguments.
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using logger methods.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    log_end!();
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("daylight [OPTIONS]");
    log_block_start!("Options:");
    log_indented!("-a, --at <time>        Compute for an instant instead of now");
    log_indented!("                       RFC 3339, or \"YYYY-MM-DD HH:MM:SS\" in the configured zone");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-h, --help             Print help information");
    log_indented!("-j, --json             Print the report as JSON on stdout");
    log_indented!("-q, --quiet            Suppress log output");
    log_indented!("-V, --version          Print version information");
    log_end!();
}
