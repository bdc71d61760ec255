//! Built-in report sections.
//!
//! Each built-in section is one [`BuiltinSection`] variant; the mapping
//! from command-line name to producer is the explicit `match` in
//! [`BuiltinProducer`].
//!
//! # Sections
//!
//! - [`version`] - rustc, cargo and rustup details
//! - [`os`] - working directory, platform and toolchain environment variables
//! - [`sizes`] - integer and pointer sizes of this build
//! - [`encoding`] - character and string encodings, locale variables
//! - [`path`] - PATH entries
//! - [`packages`] - binaries installed with `cargo install`

pub mod encoding;
pub mod os;
pub mod packages;
pub mod path;
pub mod sizes;
pub mod version;

use std::path::{Component, Path, PathBuf};

use regex::Regex;

use crate::error::{DoctorError, Result};
use crate::host::Host;
use crate::report::Producer;
use crate::secrets::SecretMatcher;

/// Environment variables shown by the `os` section unless overridden.
pub const DEFAULT_ENV_PATTERN: &str = "^(RUST|CARGO)";

/// The built-in sections, in canonical report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinSection {
    Version,
    Os,
    Sizes,
    Encoding,
    Path,
    Packages,
}

impl BuiltinSection {
    /// Every built-in section, in registration order.
    pub const ALL: &'static [BuiltinSection] = &[
        BuiltinSection::Version,
        BuiltinSection::Os,
        BuiltinSection::Sizes,
        BuiltinSection::Encoding,
        BuiltinSection::Path,
        BuiltinSection::Packages,
    ];

    /// Command-line name.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinSection::Version => "version",
            BuiltinSection::Os => "os",
            BuiltinSection::Sizes => "sizes",
            BuiltinSection::Encoding => "encoding",
            BuiltinSection::Path => "path",
            BuiltinSection::Packages => "packages",
        }
    }

    /// Display heading.
    pub fn title(self) -> &'static str {
        match self {
            BuiltinSection::Version => "Rust toolchain",
            BuiltinSection::Os => "Operating system",
            BuiltinSection::Sizes => "Sizes",
            BuiltinSection::Encoding => "Encoding",
            BuiltinSection::Path => "Search path",
            BuiltinSection::Packages => "Installed packages",
        }
    }

}

/// Settings that shape what built-in sections report.
#[derive(Debug, Clone)]
pub struct SectionOptions {
    /// Selects which environment variables the `os` section lists.
    pub env_pattern: Regex,
    /// Decides which of those values are redacted.
    pub secrets: SecretMatcher,
}

impl SectionOptions {
    /// Options with a custom environment variable pattern.
    pub fn with_env_pattern(pattern: &str) -> Result<Self> {
        let env_pattern = Regex::new(pattern).map_err(|e| DoctorError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            env_pattern,
            secrets: SecretMatcher::with_builtins(),
        })
    }
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            env_pattern: Regex::new(DEFAULT_ENV_PATTERN).expect("default env pattern is valid"),
            secrets: SecretMatcher::with_builtins(),
        }
    }
}

/// Producer for a built-in section.
#[derive(Debug, Clone)]
pub struct BuiltinProducer {
    section: BuiltinSection,
    options: SectionOptions,
}

impl BuiltinProducer {
    /// Create the producer for `section`.
    pub fn new(section: BuiltinSection, options: SectionOptions) -> Self {
        Self { section, options }
    }
}

impl Producer for BuiltinProducer {
    fn produce(&self, host: &dyn Host) -> Result<Vec<String>> {
        match self.section {
            BuiltinSection::Version => version::produce(host),
            BuiltinSection::Os => os::produce(host, &self.options),
            BuiltinSection::Sizes => Ok(sizes::produce()),
            BuiltinSection::Encoding => Ok(encoding::produce(host)),
            BuiltinSection::Path => Ok(path::produce(host)),
            BuiltinSection::Packages => packages::produce(host),
        }
    }
}

/// Extra lines describing `path` when it is a symlink: what it links to,
/// and where that lands if the link is relative.
pub(crate) fn symlink_lines(host: &dyn Host, path: &Path) -> Vec<String> {
    let Some(link) = host.read_link(path) else {
        return Vec::new();
    };

    let mut lines = vec![format!("  which is a symlink to: {:?}", link)];
    let resolved = match path.parent() {
        Some(parent) => normalize(&parent.join(&link)),
        None => link.clone(),
    };
    if resolved != link {
        lines.push(format!("    which resolves to: {:?}", resolved));
    }
    lines
}

/// Lexically clean up `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
