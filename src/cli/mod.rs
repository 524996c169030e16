//! CLI module.
//!
//! Handles flags before the TUI starts:
//!
//! ```ignore
//! use graphqlconf::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     // --version / --help / invalid arguments: exit
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOptions};
pub use version::{handle_help_command, handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// * `None` - the command is `RunTui` (no CLI action needed)
/// * `Some(Err(e))` - the arguments were invalid
///
/// `Version` and `Help` never return.
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Invalid(message) => {
            Some(Err(eyre!("{}\n\nRun with --help for usage.", message)))
        }
        CliCommand::RunTui(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        let result = run_cli_command(&CliCommand::RunTui(CliOptions::default()));
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_returns_error() {
        let result = run_cli_command(&CliCommand::Invalid("unknown argument '--x'".into()));
        let err = result.unwrap().unwrap_err();
        assert!(err.to_string().contains("--help"));
    }
}
