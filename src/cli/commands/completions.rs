//! Shell completions generation.
//!
//! `rustdoctor --completions <SHELL>` prints a completion script.

use std::io::Write;

use clap_complete::Shell;

use crate::cli::args::Cli;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    shell: Shell,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, out: &mut dyn Write) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command_with_sections();
        clap_complete::generate(self.shell, &mut cmd, "rustdoctor", out);
        Ok(CommandResult::success())
    }
}
