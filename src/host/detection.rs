//! CI, codespace and container detection.
//!
//! Detects the kind of machine rustdoctor runs on by checking well-known
//! environment variables, which often explains odd toolchain setups in a
//! bug report.

use std::path::Path;

use super::Host;

/// A detected environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedEnvironment {
    /// The environment name ("ci", "codespace" or "docker").
    pub name: String,
    /// The environment variable or file that triggered detection.
    pub detected_via: String,
}

impl DetectedEnvironment {
    fn new(name: &str, detected_via: &str) -> Self {
        Self {
            name: name.to_string(),
            detected_via: detected_via.to_string(),
        }
    }
}

const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "JENKINS_URL",
    "BUILDKITE",
    "TRAVIS",
];

/// Detect the current environment.
///
/// Returns the first match, checking in order:
/// 1. CI (a codespace running CI is classified as CI)
/// 2. Codespace
/// 3. Docker
pub fn detect_environment(host: &dyn Host) -> Option<DetectedEnvironment> {
    if let Some(var) = CI_VARS.iter().find(|var| host.var(var).is_some()) {
        return Some(DetectedEnvironment::new("ci", var));
    }

    // TF_BUILD must equal "True" (Azure DevOps)
    if host.var("TF_BUILD").as_deref() == Some("True") {
        return Some(DetectedEnvironment::new("ci", "TF_BUILD"));
    }

    for var in ["CODESPACES", "GITPOD_WORKSPACE_ID"] {
        if host.var(var).is_some() {
            return Some(DetectedEnvironment::new("codespace", var));
        }
    }

    if host.var("DOCKER_CONTAINER").is_some() {
        return Some(DetectedEnvironment::new("docker", "DOCKER_CONTAINER"));
    }
    if host.exists(Path::new("/.dockerenv")) {
        return Some(DetectedEnvironment::new("docker", "/.dockerenv"));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;

    #[test]
    fn no_markers_detects_nothing() {
        let host = MockHost::new();
        assert_eq!(detect_environment(&host), None);
    }

    #[test]
    fn detects_github_actions_as_ci() {
        let host = MockHost::new().with_var("GITHUB_ACTIONS", "true");
        let detected = detect_environment(&host).unwrap();
        assert_eq!(detected.name, "ci");
        assert_eq!(detected.detected_via, "GITHUB_ACTIONS");
    }

    #[test]
    fn generic_ci_var_wins_over_specific_ones() {
        let host = MockHost::new()
            .with_var("GITLAB_CI", "true")
            .with_var("CI", "true");
        assert_eq!(detect_environment(&host).unwrap().detected_via, "CI");
    }

    #[test]
    fn tf_build_requires_exact_value() {
        let host = MockHost::new().with_var("TF_BUILD", "false");
        assert_eq!(detect_environment(&host), None);

        let host = MockHost::new().with_var("TF_BUILD", "True");
        assert_eq!(detect_environment(&host).unwrap().detected_via, "TF_BUILD");
    }

    #[test]
    fn ci_wins_over_codespace() {
        let host = MockHost::new()
            .with_var("CODESPACES", "true")
            .with_var("CI", "1");
        assert_eq!(detect_environment(&host).unwrap().name, "ci");
    }

    #[test]
    fn detects_gitpod_as_codespace() {
        let host = MockHost::new().with_var("GITPOD_WORKSPACE_ID", "abc");
        let detected = detect_environment(&host).unwrap();
        assert_eq!(detected.name, "codespace");
        assert_eq!(detected.detected_via, "GITPOD_WORKSPACE_ID");
    }

    #[test]
    fn detects_docker_from_marker_file() {
        let host = MockHost::new().with_path("/.dockerenv");
        let detected = detect_environment(&host).unwrap();
        assert_eq!(detected.name, "docker");
        assert_eq!(detected.detected_via, "/.dockerenv");
    }

    #[test]
    fn docker_variable_checked_before_marker_file() {
        let host = MockHost::new()
            .with_var("DOCKER_CONTAINER", "1")
            .with_path("/.dockerenv");
        assert_eq!(
            detect_environment(&host).unwrap().detected_via,
            "DOCKER_CONTAINER"
        );
    }
}
