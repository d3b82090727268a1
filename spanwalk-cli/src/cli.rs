//! Command-line surface of the `spanwalk` binary.

use clap::Parser;
use thiserror::Error;

/// Message reported whenever the binary is run.
pub const DIRECT_EXECUTION_MESSAGE: &str =
    "this program only exposes tests and benchmarks; run `cargo test` or `cargo bench` instead";

/// Arguments accepted by `spanwalk`. There are none beyond `--help` and
/// `--version`.
#[derive(Debug, Parser)]
#[command(
    name = "spanwalk",
    version,
    about = "Greedy spanning-path construction over weighted graphs",
    long_about = None,
)]
pub struct Cli {}

/// Errors surfaced by [`run_cli`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// The binary was executed directly.
    #[error("{}", DIRECT_EXECUTION_MESSAGE)]
    DirectExecution,
}

impl CliError {
    /// Stable machine-readable code for the error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DirectExecution => "CLI_DIRECT_EXECUTION",
        }
    }
}

/// Runs the parsed command.
///
/// # Errors
/// Always returns [`CliError::DirectExecution`].
pub const fn run_cli(_cli: &Cli) -> Result<(), CliError> {
    Err(CliError::DirectExecution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn running_always_refuses() {
        let cli = Cli::try_parse_from(["spanwalk"]).expect("no arguments are required");
        let err = run_cli(&cli).expect_err("direct execution is refused");
        assert_eq!(err, CliError::DirectExecution);
        assert_eq!(err.to_string(), DIRECT_EXECUTION_MESSAGE);
        assert_eq!(err.code(), "CLI_DIRECT_EXECUTION");
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["spanwalk", "--nodes", "10"]).is_err());
    }
}
