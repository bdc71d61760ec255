//! Secret detection for environment variable names.
//!
//! Reports are meant to be pasted into public issue trackers, so values of
//! variables such as `CARGO_REGISTRY_TOKEN` are replaced with [`REDACTED`]
//! before they reach the output.
//!
//! # Example
//!
//! ```
//! use rustdoctor::secrets::SecretMatcher;
//!
//! let matcher = SecretMatcher::with_builtins();
//! assert!(matcher.is_secret("CARGO_REGISTRY_TOKEN"));
//! assert!(!matcher.is_secret("CARGO_HOME"));
//! assert_eq!(matcher.display_value("CARGO_REGISTRY_TOKEN", "cio123"), "[REDACTED]");
//! ```

use regex::Regex;

/// Replacement shown instead of a secret value.
pub const REDACTED: &str = "[REDACTED]";

/// Built-in patterns for common secrets.
///
/// Each tuple contains (name, regex_pattern).
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("api_key", r"(?i)^.*_?(API_?KEY|APIKEY)$"),
    ("secret", r"(?i)^.*_?(SECRET|SECRET_KEY)$"),
    ("token", r"(?i)^.*_?(TOKEN|ACCESS_TOKEN|AUTH_TOKEN)$"),
    ("password", r"(?i)^.*_?(PASSWORD|PASSWD)$"),
    // OLDPWD and PWD are directories, MYSQL_PWD is not
    ("pwd", r"(?i)^.+_PWD$"),
    ("credential", r"(?i)^.*_?CREDENTIALS?$"),
    ("private_key", r"(?i)^.*_?PRIVATE_KEY$"),
    (
        "connection_string",
        r"(?i)^.*(CONNECTION_STRING|DATABASE_URL)$",
    ),
];

/// A named pattern over environment variable names.
#[derive(Debug, Clone)]
struct SecretPattern {
    name: &'static str,
    env_pattern: Regex,
}

/// Matches environment variable names against secret patterns.
#[derive(Debug, Clone)]
pub struct SecretMatcher {
    patterns: Vec<SecretPattern>,
}

impl SecretMatcher {
    /// Create a matcher with built-in patterns.
    pub fn with_builtins() -> Self {
        let patterns = BUILTIN_PATTERNS
            .iter()
            .map(|(name, pattern)| SecretPattern {
                name,
                env_pattern: Regex::new(pattern).expect("builtin secret pattern is valid"),
            })
            .collect();

        Self { patterns }
    }

    /// Check if an environment variable name matches any secret pattern.
    pub fn is_secret(&self, env_name: &str) -> bool {
        self.matching_pattern(env_name).is_some()
    }

    fn matching_pattern(&self, env_name: &str) -> Option<&SecretPattern> {
        self.patterns
            .iter()
            .find(|p| p.env_pattern.is_match(env_name))
    }

    /// The value to print for `env_name`: the value itself, or
    /// [`REDACTED`] when the name looks like a secret.
    pub fn display_value<'a>(&self, env_name: &str, value: &'a str) -> &'a str {
        match self.matching_pattern(env_name) {
            Some(pattern) if !value.is_empty() => {
                tracing::debug!("Redacting value of {} ({} pattern)", env_name, pattern.name);
                REDACTED
            }
            _ => value,
        }
    }
}

impl Default for SecretMatcher {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_cargo_registry_tokens() {
        let matcher = SecretMatcher::with_builtins();

        assert!(matcher.is_secret("CARGO_REGISTRY_TOKEN"));
        assert!(matcher.is_secret("CARGO_REGISTRIES_MY_CORP_TOKEN"));
        assert!(matcher.is_secret("CARGO_REGISTRY_CREDENTIALS"));
    }

    #[test]
    fn matches_api_key_variants() {
        let matcher = SecretMatcher::with_builtins();

        assert!(matcher.is_secret("API_KEY"));
        assert!(matcher.is_secret("GITHUB_API_KEY"));
        assert!(matcher.is_secret("api_key"));
        assert!(matcher.is_secret("MY_APIKEY"));
    }

    #[test]
    fn matches_password_variants() {
        let matcher = SecretMatcher::with_builtins();

        assert!(matcher.is_secret("PASSWORD"));
        assert!(matcher.is_secret("DB_PASSWORD"));
        assert!(matcher.is_secret("MYSQL_PWD"));
    }

    #[test]
    fn working_directory_vars_are_not_secrets() {
        let matcher = SecretMatcher::with_builtins();

        assert!(!matcher.is_secret("PWD"));
        assert!(!matcher.is_secret("OLDPWD"));
    }

    #[test]
    fn does_not_match_toolchain_settings() {
        let matcher = SecretMatcher::with_builtins();

        assert!(!matcher.is_secret("PATH"));
        assert!(!matcher.is_secret("CARGO_HOME"));
        assert!(!matcher.is_secret("RUSTUP_TOOLCHAIN"));
        assert!(!matcher.is_secret("RUSTFLAGS"));
        assert!(!matcher.is_secret("CARGO_TARGET_DIR"));
    }

    #[test]
    fn display_value_redacts_secrets_only() {
        let matcher = SecretMatcher::with_builtins();

        assert_eq!(matcher.display_value("CARGO_REGISTRY_TOKEN", "abc"), REDACTED);
        assert_eq!(matcher.display_value("CARGO_HOME", "/opt/cargo"), "/opt/cargo");
    }

    #[test]
    fn empty_secret_value_is_shown_as_empty() {
        let matcher = SecretMatcher::with_builtins();
        assert_eq!(matcher.display_value("CARGO_REGISTRY_TOKEN", ""), "");
    }

    #[test]
    fn first_matching_pattern_is_reported() {
        let matcher = SecretMatcher::with_builtins();

        let pattern = matcher.matching_pattern("CARGO_REGISTRY_TOKEN").unwrap();
        assert_eq!(pattern.name, "token");
        assert_eq!(matcher.matching_pattern("MYSQL_PWD").unwrap().name, "pwd");
        assert!(matcher.matching_pattern("CARGO_HOME").is_none());
    }
}
