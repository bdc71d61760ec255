//! The `os` section: where and on what the toolchain runs.

use crate::error::Result;
use crate::host::platform::ShellType;
use crate::host::{detect_environment, Host};

use super::{symlink_lines, SectionOptions};

/// Gather working directory, platform and environment facts.
pub fn produce(host: &dyn Host, options: &SectionOptions) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    match host.current_dir() {
        Ok(cwd) => {
            lines.push(format!("Current directory: {:?}", cwd));
            lines.extend(symlink_lines(host, &cwd));
        }
        Err(e) => lines.push(format!("Current directory: unavailable ({})", e)),
    }

    let platform = host.platform();
    lines.push(format!("Platform: {:?}", platform.summary()));
    lines.push(format!("uname: {}", platform.uname()));
    lines.push(format!("OS family: {}", platform.family));
    lines.push(format!(
        "Running as root: {}",
        match platform.elevated {
            Some(true) => "yes",
            Some(false) => "no",
            None => "unknown",
        }
    ));

    match detect_environment(host) {
        Some(env) => lines.push(format!(
            "Detected environment: {} (via {})",
            env.name, env.detected_via
        )),
        None => lines.push("Detected environment: none".to_string()),
    }

    let shell = host.var("SHELL").or_else(|| host.var("COMSPEC"));
    match shell {
        Some(exe) => lines.push(format!(
            "Shell: {:?} ({})",
            exe,
            ShellType::from_executable(&exe)
        )),
        None => lines.push("Shell: unknown".to_string()),
    }

    lines.extend(env_lines(host, options));
    Ok(lines)
}

fn env_lines(host: &dyn Host, options: &SectionOptions) -> Vec<String> {
    let mut vars: Vec<(String, String)> = host
        .vars()
        .into_iter()
        .filter(|(name, _)| options.env_pattern.is_match(name))
        .collect();

    if vars.is_empty() {
        return vec!["Environment variables: none".to_string()];
    }

    vars.sort();
    let mut lines = vec!["Environment variables:".to_string()];
    lines.extend(vars.iter().map(|(name, value)| {
        format!(
            "  {} = {:?}",
            name,
            options.secrets.display_value(name, value)
        )
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MockHost, PlatformInfo};

    fn line_starting<'a>(lines: &'a [String], prefix: &str) -> &'a str {
        lines
            .iter()
            .find(|l| l.starts_with(prefix))
            .unwrap_or_else(|| panic!("no line starting with {prefix:?} in {lines:#?}"))
    }

    #[test]
    fn reports_cwd_and_platform() {
        let host = MockHost::new().with_cwd("/work/project");
        let lines = produce(&host, &SectionOptions::default()).unwrap();

        assert_eq!(lines[0], r#"Current directory: "/work/project""#);
        assert_eq!(
            line_starting(&lines, "Platform:"),
            r#"Platform: "Linux (Test 1.0) on x86_64""#
        );
        assert!(line_starting(&lines, "uname:").contains(r#"node="testhost""#));
        assert_eq!(line_starting(&lines, "Running as root:"), "Running as root: no");
    }

    #[test]
    fn reports_elevation() {
        let root = MockHost::new().with_platform(PlatformInfo {
            elevated: Some(true),
            ..MockHost::new().platform()
        });
        let lines = produce(&root, &SectionOptions::default()).unwrap();
        assert_eq!(line_starting(&lines, "Running as root:"), "Running as root: yes");

        let undetected = MockHost::new().with_platform(PlatformInfo {
            elevated: None,
            ..MockHost::new().platform()
        });
        let lines = produce(&undetected, &SectionOptions::default()).unwrap();
        assert_eq!(
            line_starting(&lines, "Running as root:"),
            "Running as root: unknown"
        );
    }

    #[test]
    fn missing_cwd_degrades_to_note() {
        let lines = produce(&MockHost::new(), &SectionOptions::default()).unwrap();
        assert!(lines[0].starts_with("Current directory: unavailable"));
    }

    #[test]
    fn cwd_symlink_is_described() {
        let host = MockHost::new()
            .with_cwd("/work/link")
            .with_symlink("/work/link", "/real/project");
        let lines = produce(&host, &SectionOptions::default()).unwrap();
        assert_eq!(lines[1], r#"  which is a symlink to: "/real/project""#);
    }

    #[test]
    fn reports_detected_environment() {
        let host = MockHost::new().with_var("GITHUB_ACTIONS", "true");
        let lines = produce(&host, &SectionOptions::default()).unwrap();
        assert_eq!(
            line_starting(&lines, "Detected environment:"),
            "Detected environment: ci (via GITHUB_ACTIONS)"
        );
    }

    #[test]
    fn reports_shell_type() {
        let host = MockHost::new().with_var("SHELL", "/usr/bin/zsh");
        let lines = produce(&host, &SectionOptions::default()).unwrap();
        assert_eq!(line_starting(&lines, "Shell:"), r#"Shell: "/usr/bin/zsh" (zsh)"#);
    }

    #[test]
    fn lists_matching_env_vars_sorted() {
        let host = MockHost::new()
            .with_var("RUSTFLAGS", "-C target-cpu=native")
            .with_var("CARGO_HOME", "/opt/cargo")
            .with_var("HOME", "/home/me");
        let lines = produce(&host, &SectionOptions::default()).unwrap();

        let start = lines
            .iter()
            .position(|l| l == "Environment variables:")
            .unwrap();
        assert_eq!(
            &lines[start + 1..],
            &[
                r#"  CARGO_HOME = "/opt/cargo""#.to_string(),
                r#"  RUSTFLAGS = "-C target-cpu=native""#.to_string(),
            ]
        );
    }

    #[test]
    fn no_matching_env_vars() {
        let host = MockHost::new().with_var("HOME", "/home/me");
        let lines = produce(&host, &SectionOptions::default()).unwrap();
        assert_eq!(lines.last().unwrap(), "Environment variables: none");
    }

    #[test]
    fn secret_values_are_redacted() {
        let host = MockHost::new().with_var("CARGO_REGISTRY_TOKEN", "cio-very-secret");
        let lines = produce(&host, &SectionOptions::default()).unwrap();
        assert!(lines.contains(&r#"  CARGO_REGISTRY_TOKEN = "[REDACTED]""#.to_string()));
        assert!(!lines.iter().any(|l| l.contains("cio-very-secret")));
    }

    #[test]
    fn custom_pattern_selects_other_vars() {
        let host = MockHost::new()
            .with_var("HOME", "/home/me")
            .with_var("CARGO_HOME", "/opt/cargo");
        let options = SectionOptions::with_env_pattern("^HOME$").unwrap();
        let lines = produce(&host, &options).unwrap();
        assert!(lines.contains(&r#"  HOME = "/home/me""#.to_string()));
        assert!(!lines.iter().any(|l| l.contains("CARGO_HOME")));
    }
}
