//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the command line to a command

use std::io::Write;

use crate::cli::args::Cli;
use crate::config::Settings;
use crate::error::Result;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `out` - Where the command's regular output goes (stdout in the binary)
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Routes the parsed command line to a command implementation.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// Usage errors are returned before the command writes anything.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        if let Some(shell) = cli.completions {
            return super::completions::CompletionsCommand::new(shell).execute(out);
        }
        if cli.wants_help() {
            return super::help::HelpCommand::new().execute(out);
        }

        let settings = Settings::from_cli(cli)?;
        if cli.list {
            super::list::ListCommand::new(settings).execute(out)
        } else {
            super::report::ReportCommand::new(settings).execute(out)
        }
    }
}
