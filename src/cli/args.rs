//! Command-line argument parsing.

use std::time::Duration;

use crate::startup::config::parse_timeout_secs;

/// Overrides collected from flags for a TUI run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    /// `--endpoint <url>`
    pub endpoint: Option<String>,
    /// `--timeout <secs>`
    pub timeout: Option<Duration>,
    /// `--log-level <filter>`
    pub log_level: Option<String>,
    /// `--no-cache`
    pub no_cache: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(CliOptions),
    /// The arguments could not be understood
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first item is the program name and is skipped.
///
/// # Examples
///
/// ```
/// use graphqlconf::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["graphqlconf".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--no-cache" => options.no_cache = true,
            "--endpoint" | "--log-level" | "--timeout" => {
                let Some(value) = inline.or_else(|| args.next()) else {
                    return CliCommand::Invalid(format!("{} requires a value", flag));
                };
                match flag.as_str() {
                    "--endpoint" => options.endpoint = Some(value),
                    "--log-level" => options.log_level = Some(value),
                    _ => match parse_timeout_secs(&value) {
                        Some(timeout) => options.timeout = Some(timeout),
                        None => {
                            return CliCommand::Invalid(format!(
                                "--timeout expects a positive number of seconds, got '{}'",
                                value
                            ))
                        }
                    },
                }
            }
            other => return CliCommand::Invalid(format!("unknown argument '{}'", other)),
        }
    }

    CliCommand::RunTui(options)
}
