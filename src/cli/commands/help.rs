//! Help requested with the bare word `help`.

use std::io::Write;

use crate::cli::args::Cli;

use super::dispatcher::{Command, CommandResult};

/// Prints the same text as `--help`.
#[derive(Debug, Default)]
pub struct HelpCommand;

impl HelpCommand {
    /// Create a new help command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, out: &mut dyn Write) -> crate::error::Result<CommandResult> {
        let help = Cli::command_with_sections().render_long_help();
        writeln!(out, "{}", help)?;
        Ok(CommandResult::success())
    }
}
