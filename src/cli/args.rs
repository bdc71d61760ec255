//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{CommandFactory, FromArgMatches, Parser};
use clap_complete::Shell;

use crate::report::ReportFormat;
use crate::sections::{BuiltinSection, DEFAULT_ENV_PATTERN};

/// rustdoctor - Show useful things about a Rust installation.
#[derive(Debug, Parser)]
#[command(name = "rustdoctor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sections to show, or "all" (default: all)
    #[arg(value_name = "SECTION")]
    pub sections: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Regex selecting the environment variables listed in the os section
    #[arg(long, env = "RUSTDOCTOR_ENV_PATTERN", default_value = DEFAULT_ENV_PATTERN)]
    pub env_pattern: String,

    /// List available sections and exit
    #[arg(long)]
    pub list: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The clap command, with the section list appended to its help.
    pub fn command_with_sections() -> clap::Command {
        Self::command().after_help(sections_help())
    }

    /// Parse the process arguments; exits on `--help`, `--version` and
    /// malformed flags the way clap does.
    pub fn parse_with_sections() -> Self {
        let matches = Self::command_with_sections().get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Whether the bare word `help` was given as a section.
    pub fn wants_help(&self) -> bool {
        self.sections.iter().any(|s| s == "help")
    }
}

/// Help text listing every built-in section.
pub fn sections_help() -> String {
    let width = BuiltinSection::ALL
        .iter()
        .map(|s| s.name().len())
        .max()
        .unwrap_or(0);

    let mut help = String::from("Sections:\n");
    for section in BuiltinSection::ALL {
        help.push_str(&format!(
            "  {:<width$}  {}\n",
            section.name(),
            section.title(),
            width = width
        ));
    }
    help.push_str(&format!(
        "  {:<width$}  Every section (default)",
        "all",
        width = width
    ));
    help
}
