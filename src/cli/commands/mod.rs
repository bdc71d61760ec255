//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! rustdoctor has no subcommands; [`CommandDispatcher`] picks the command
//! from the flags and words on the command line:
//! - `--completions <SHELL>` → [`completions`]
//! - `help` as a section word → [`help`]
//! - `--list` → [`list`]
//! - anything else → [`report`]

pub mod completions;
pub mod dispatcher;
pub mod help;
pub mod list;
pub mod report;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
