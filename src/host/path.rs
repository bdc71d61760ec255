//! PATH parsing and executable lookup.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Split the process's PATH into entries.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Split a PATH-style value using the platform separator.
pub fn split_path(value: &str) -> Vec<PathBuf> {
    std::env::split_paths(OsStr::new(value)).collect()
}

/// Check whether a file has any execute bit set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a program by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. The platform's
/// executable suffix (`.exe` on Windows) is appended when missing.
pub fn resolve_program(name: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let suffix = std::env::consts::EXE_SUFFIX;
    let file_name = if suffix.is_empty() || name.ends_with(suffix) {
        name.to_string()
    } else {
        format!("{}{}", name, suffix)
    };

    path_entries
        .iter()
        .map(|dir| dir.join(&file_name))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}
