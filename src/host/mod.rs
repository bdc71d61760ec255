//! Read-only access to the inspected host.
//!
//! Every fact rustdoctor reports comes through the [`Host`] trait, which
//! allows the section producers to be exercised against a [`MockHost`]
//! in tests.
//!
//! # Architecture
//!
//! - [`command`] - Running external programs with captured output
//! - [`detection`] - CI, codespace and container detection
//! - [`mock`] - In-memory host for tests
//! - [`path`] - PATH parsing and executable lookup
//! - [`platform`] - OS, kernel and architecture identifiers

pub mod command;
pub mod detection;
pub mod mock;
pub mod path;
pub mod platform;

pub use command::{run_checked, CommandOutput};
pub use detection::{detect_environment, DetectedEnvironment};
pub use mock::MockHost;
pub use platform::PlatformInfo;

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Read-only view of the host's runtime environment.
///
/// Implementations must not mutate host state; each call is an
/// independent query.
pub trait Host {
    /// Look up a single environment variable.
    fn var(&self, key: &str) -> Option<String>;

    /// All environment variables, in no particular order.
    fn vars(&self) -> Vec<(String, String)>;

    /// The process's current working directory.
    fn current_dir(&self) -> Result<PathBuf>;

    /// Target of a symlink, or `None` if `path` is not a symlink.
    fn read_link(&self, path: &Path) -> Option<PathBuf>;

    /// Whether `path` exists at all.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Locate an executable on PATH.
    fn find_program(&self, name: &str) -> Option<PathBuf>;

    /// Run a program with arguments, capturing its output.
    ///
    /// A non-zero exit is not an error at this level; see [`run_checked`].
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;

    /// Platform identifiers.
    fn platform(&self) -> PlatformInfo;
}

/// The real host this process runs on.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl SystemHost {
    /// Create a handle to the running host.
    pub fn new() -> Self {
        Self
    }
}

impl Host for SystemHost {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn vars(&self) -> Vec<(String, String)> {
        // vars_os so a single non-UTF-8 value can't panic the whole section
        std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    fn current_dir(&self) -> Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }

    fn read_link(&self, path: &Path) -> Option<PathBuf> {
        let meta = std::fs::symlink_metadata(path).ok()?;
        if meta.file_type().is_symlink() {
            std::fs::read_link(path).ok()
        } else {
            None
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn find_program(&self, name: &str) -> Option<PathBuf> {
        path::resolve_program(name, &path::parse_system_path())
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        command::execute(program, args)
    }

    fn platform(&self) -> PlatformInfo {
        platform::detect_platform()
    }
}
