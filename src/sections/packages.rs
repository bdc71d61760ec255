//! The `packages` section: binaries installed with `cargo install`.

use crate::error::Result;
use crate::host::{run_checked, Host};

/// List installed packages as cargo reports them.
///
/// Unavailable when cargo can't be run or refuses to list.
pub fn produce(host: &dyn Host) -> Result<Vec<String>> {
    let listing = run_checked(host, "cargo", &["install", "--list"])?;

    let lines: Vec<String> = listing
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    // Package lines are flush left and end with ':'; binaries are indented.
    let count = lines
        .iter()
        .filter(|l| !l.starts_with(char::is_whitespace) && l.ends_with(':'))
        .count();

    if count == 0 {
        return Ok(vec!["No packages installed with cargo install".to_string()]);
    }

    let mut out = vec![format!(
        "{} package{} installed:",
        count,
        if count == 1 { "" } else { "s" }
    )];
    out.extend(lines.into_iter().map(|l| format!("  {}", l)));
    Ok(out)
}
