//! In-memory host for testing.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::error::{DoctorError, Result};

use super::{CommandOutput, Host, PlatformInfo};

/// A [`Host`] whose every answer is configured up front.
///
/// Unconfigured queries behave like an empty machine: no variables, no
/// files, no programs.
///
/// # Example
///
/// ```
/// use rustdoctor::host::{CommandOutput, Host, MockHost};
///
/// let host = MockHost::new()
///     .with_var("CARGO_HOME", "/home/me/.cargo")
///     .with_command("cargo", &["-V"], CommandOutput::success("cargo 1.80.0\n"));
///
/// assert_eq!(host.var("CARGO_HOME").as_deref(), Some("/home/me/.cargo"));
/// assert!(host.run("cargo", &["-V"]).unwrap().success);
/// assert!(host.run("rustc", &["-vV"]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MockHost {
    vars: BTreeMap<String, String>,
    cwd: Option<PathBuf>,
    links: HashMap<PathBuf, PathBuf>,
    paths: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
    programs: HashMap<String, PathBuf>,
    commands: HashMap<String, CommandOutput>,
    platform: PlatformInfo,
}

impl MockHost {
    /// Create an empty host.
    pub fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
            cwd: None,
            links: HashMap::new(),
            paths: HashSet::new(),
            dirs: HashSet::new(),
            programs: HashMap::new(),
            commands: HashMap::new(),
            platform: PlatformInfo {
                family: "unix".to_string(),
                os: "linux".to_string(),
                arch: "x86_64".to_string(),
                long_os_version: Some("Linux (Test 1.0)".to_string()),
                kernel_version: Some("6.0.0-test".to_string()),
                hostname: Some("testhost".to_string()),
                elevated: Some(false),
            },
        }
    }

    /// Set an environment variable.
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Set the current working directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Make `link` a symlink pointing at `target`.
    pub fn with_symlink(mut self, link: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        let link = link.into();
        self.paths.insert(link.clone());
        self.links.insert(link, target.into());
        self
    }

    /// Mark a path as existing (as a plain file).
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(path.into());
        self
    }

    /// Mark a path as an existing directory.
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.paths.insert(path.clone());
        self.dirs.insert(path);
        self
    }

    /// Put a program on PATH at `location`.
    pub fn with_program(mut self, name: &str, location: impl Into<PathBuf>) -> Self {
        let location = location.into();
        self.paths.insert(location.clone());
        self.programs.insert(name.to_string(), location);
        self
    }

    /// Configure the output of running `program args...`.
    pub fn with_command(mut self, program: &str, args: &[&str], output: CommandOutput) -> Self {
        self.commands.insert(command_key(program, args), output);
        self
    }

    /// Replace the platform identifiers.
    pub fn with_platform(mut self, platform: PlatformInfo) -> Self {
        self.platform = platform;
        self
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

fn command_key(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Host for MockHost {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn current_dir(&self) -> Result<PathBuf> {
        self.cwd.clone().ok_or_else(|| {
            DoctorError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "current directory has been removed",
            ))
        })
    }

    fn read_link(&self, path: &Path) -> Option<PathBuf> {
        self.links.get(path).cloned()
    }

    fn exists(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn find_program(&self, name: &str) -> Option<PathBuf> {
        self.programs.get(name).cloned()
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        self.commands
            .get(&command_key(program, args))
            .cloned()
            .ok_or_else(|| DoctorError::ProgramNotFound {
                program: program.to_string(),
            })
    }

    fn platform(&self) -> PlatformInfo {
        self.platform.clone()
    }
}
