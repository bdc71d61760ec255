//! External program execution.

use std::process::{Command, Stdio};
use std::time::Instant;

use crate::error::{DoctorError, Result};

use super::Host;

/// Captured result of running an external program.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandOutput {
    /// Create a success result.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }
}

/// Run `program` directly (no shell) and capture stdout and stderr.
///
/// A program that cannot be started maps to [`DoctorError::ProgramNotFound`].
pub fn execute(program: &str, args: &[&str]) -> Result<CommandOutput> {
    let start = Instant::now();

    tracing::debug!("Running {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            tracing::debug!("Failed to start {}: {}", program, e);
            DoctorError::ProgramNotFound {
                program: program.to_string(),
            }
        })?;

    let duration = start.elapsed();
    tracing::debug!(
        "{} exited with {:?} after {:?}",
        program,
        output.status.code(),
        duration
    );

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}

/// Run a program through `host` and return its stdout, treating a
/// non-zero exit as [`DoctorError::CommandFailed`].
pub fn run_checked(host: &dyn Host, program: &str, args: &[&str]) -> Result<String> {
    let output = host.run(program, args)?;
    if output.success {
        Ok(output.stdout)
    } else {
        let command = if args.is_empty() {
            program.to_string()
        } else {
            format!("{} {}", program, args.join(" "))
        };
        Err(DoctorError::CommandFailed {
            command,
            code: output.exit_code,
            stderr: output.stderr,
        })
    }
}
