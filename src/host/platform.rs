//! Platform identifiers.

use sysinfo::System;

/// Identifiers describing the operating system and hardware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    /// OS family (`unix`, `windows`).
    pub family: String,

    /// Target OS the binary was built for (`linux`, `macos`, `windows`).
    pub os: String,

    /// CPU architecture (`x86_64`, `aarch64`).
    pub arch: String,

    /// Human-readable OS name and version, e.g. `Linux (Ubuntu 24.04)`.
    pub long_os_version: Option<String>,

    /// Kernel release.
    pub kernel_version: Option<String>,

    /// Network host name.
    pub hostname: Option<String>,

    /// Whether the process runs as root/admin, if the platform can tell.
    pub elevated: Option<bool>,
}

impl PlatformInfo {
    /// Platform summary, e.g. `Linux (Ubuntu 24.04) on x86_64`.
    pub fn summary(&self) -> String {
        let name = self.long_os_version.as_deref().unwrap_or(&self.os);
        format!("{} on {}", name, self.arch)
    }

    /// uname-style rendering of the identifiers.
    pub fn uname(&self) -> String {
        format!(
            "system={:?}, node={:?}, release={:?}, machine={:?}",
            self.os,
            self.hostname.as_deref().unwrap_or("unknown"),
            self.kernel_version.as_deref().unwrap_or("unknown"),
            self.arch
        )
    }
}

/// Collect platform identifiers for the running host.
pub fn detect_platform() -> PlatformInfo {
    PlatformInfo {
        family: std::env::consts::FAMILY.to_string(),
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        long_os_version: System::long_os_version(),
        kernel_version: System::kernel_version(),
        hostname: System::host_name(),
        elevated: is_elevated(),
    }
}

/// Check if running as root/admin. `None` where this isn't detected.
pub fn is_elevated() -> Option<bool> {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        Some(unsafe { libc::geteuid() == 0 })
    }

    #[cfg(not(unix))]
    {
        None
    }
}

/// Known interactive shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Cmd,
    Unknown,
}

impl ShellType {
    /// Parse shell type from executable name.
    pub fn from_executable(exe: &str) -> Self {
        let name = std::path::Path::new(exe)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "bash" => ShellType::Bash,
            "zsh" => ShellType::Zsh,
            "fish" => ShellType::Fish,
            "powershell" | "pwsh" => ShellType::PowerShell,
            "cmd" => ShellType::Cmd,
            _ => ShellType::Unknown,
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
            ShellType::PowerShell => "powershell",
            ShellType::Cmd => "cmd",
            ShellType::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlatformInfo {
        PlatformInfo {
            family: "unix".into(),
            os: "linux".into(),
            arch: "x86_64".into(),
            long_os_version: Some("Linux (Ubuntu 24.04)".into()),
            kernel_version: Some("6.8.0".into()),
            hostname: Some("build-box".into()),
            elevated: Some(false),
        }
    }

    #[test]
    fn summary_prefers_long_os_version() {
        assert_eq!(sample().summary(), "Linux (Ubuntu 24.04) on x86_64");
    }

    #[test]
    fn summary_falls_back_to_target_os() {
        let info = PlatformInfo {
            long_os_version: None,
            ..sample()
        };
        assert_eq!(info.summary(), "linux on x86_64");
    }

    #[test]
    fn uname_lists_all_fields() {
        assert_eq!(
            sample().uname(),
            r#"system="linux", node="build-box", release="6.8.0", machine="x86_64""#
        );
    }

    #[test]
    fn uname_marks_missing_fields_unknown() {
        let info = PlatformInfo {
            hostname: None,
            kernel_version: None,
            ..sample()
        };
        assert!(info.uname().contains(r#"node="unknown""#));
        assert!(info.uname().contains(r#"release="unknown""#));
    }

    #[test]
    fn detect_platform_matches_build_target() {
        let info = detect_platform();
        assert_eq!(info.os, std::env::consts::OS);
        assert_eq!(info.arch, std::env::consts::ARCH);
        assert_eq!(info.family, std::env::consts::FAMILY);
    }

    #[test]
    fn elevation_is_known_on_unix() {
        assert_eq!(is_elevated().is_some(), cfg!(unix));
    }

    #[test]
    fn shell_type_from_executable() {
        assert_eq!(ShellType::from_executable("/bin/bash"), ShellType::Bash);
        assert_eq!(ShellType::from_executable("/usr/bin/zsh"), ShellType::Zsh);
        assert_eq!(ShellType::from_executable("/usr/bin/fish"), ShellType::Fish);
        assert_eq!(ShellType::from_executable("pwsh"), ShellType::PowerShell);
        assert_eq!(ShellType::from_executable("cmd.exe"), ShellType::Cmd);
        assert_eq!(ShellType::from_executable("unknown"), ShellType::Unknown);
    }

    #[test]
    fn shell_type_display() {
        assert_eq!(ShellType::PowerShell.to_string(), "powershell");
        assert_eq!(ShellType::Unknown.to_string(), "unknown");
    }
}
