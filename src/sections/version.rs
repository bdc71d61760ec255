//! The `version` section: which Rust toolchain is installed and how.

use std::path::Path;

use crate::error::Result;
use crate::host::{run_checked, Host};

use super::symlink_lines;

/// Toolchain locations reported when set.
const HOME_VARS: &[&str] = &["RUSTUP_HOME", "CARGO_HOME"];

/// Gather rustc, cargo and rustup facts.
///
/// Fails only when `rustc` itself can't be run; every other fact degrades
/// to an inline note.
pub fn produce(host: &dyn Host) -> Result<Vec<String>> {
    let rustc = run_checked(host, "rustc", &["-vV"])?;

    let mut lines = vec!["rustc version:".to_string()];
    lines.extend(
        rustc
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| format!("    {}", l)),
    );

    match run_checked(host, "cargo", &["-V"]) {
        Ok(out) => lines.push(format!("cargo version: {}", out.trim())),
        Err(e) => lines.push(format!("cargo version: unavailable ({})", e)),
    }

    match host.find_program("rustc") {
        Some(exe) => {
            lines.push(format!("rustc executable: {:?}", exe));
            lines.extend(symlink_lines(host, &exe));
        }
        None => lines.push("rustc executable: not found on PATH".to_string()),
    }

    lines.extend(rustup_lines(host));

    for var in HOME_VARS {
        if let Some(value) = host.var(var) {
            lines.push(format!("{}: {:?}", var, value));
            lines.extend(symlink_lines(host, Path::new(&value)));
        }
    }

    lines.push(format!("rustdoctor version: {}", env!("CARGO_PKG_VERSION")));
    Ok(lines)
}

fn rustup_lines(host: &dyn Host) -> Vec<String> {
    let override_line = match host.var("RUSTUP_TOOLCHAIN") {
        Some(toolchain) => format!("  RUSTUP_TOOLCHAIN override: {:?}", toolchain),
        None => "  RUSTUP_TOOLCHAIN override: none".to_string(),
    };

    if host.find_program("rustup").is_none() {
        return vec![
            "This is not a rustup-managed installation.".to_string(),
            override_line,
        ];
    }

    let active = match run_checked(host, "rustup", &["show", "active-toolchain"]) {
        Ok(out) => format!("{:?}", out.trim()),
        Err(e) => format!("unavailable ({})", e),
    };
    vec![
        "This is a rustup-managed installation.".to_string(),
        format!("  The active toolchain is: {}", active),
        override_line,
    ]
}
