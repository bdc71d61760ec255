//! Section registry.
//!
//! The [`SectionRegistry`] stores report sections in registration order and
//! provides methods for registering, retrieving, and iterating over them.

use crate::error::{DoctorError, Result};
use crate::sections::{BuiltinProducer, BuiltinSection, SectionOptions};

use super::section::Section;

/// Words the selector interprets itself and that can't name a section.
pub const RESERVED_NAMES: &[&str] = &["all", "help"];

/// Ordered registry of report sections.
///
/// Names are unique; iteration follows registration order, which is also
/// the order sections appear in a report.
#[derive(Debug, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Create a registry with all built-in sections, in their canonical order.
    pub fn with_builtins(options: &SectionOptions) -> Self {
        let sections = BuiltinSection::ALL
            .iter()
            .map(|&builtin| {
                Section::new(
                    builtin.name(),
                    builtin.title(),
                    BuiltinProducer::new(builtin, options.clone()),
                )
            })
            .collect();
        Self { sections }
    }

    /// Register a section after all existing ones.
    ///
    /// Fails if the name is already taken or reserved.
    pub fn register(&mut self, section: Section) -> Result<()> {
        if RESERVED_NAMES.contains(&section.name()) || self.contains(section.name()) {
            return Err(DoctorError::DuplicateSection {
                name: section.name().to_string(),
            });
        }
        tracing::debug!("Registered section {}", section.name());
        self.sections.push(section);
        Ok(())
    }

    /// Get a section by name.
    pub fn get(&self, name: &str) -> Result<&Section> {
        self.sections
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| DoctorError::UnknownSection {
                name: name.to_string(),
                valid: self.names(),
            })
    }

    /// Whether a section with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.sections.iter().any(|s| s.name() == name)
    }

    /// All sections in registration order.
    pub fn all(&self) -> &[Section] {
        &self.sections
    }

    /// Section names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.name().to_string()).collect()
    }

    /// Get the number of registered sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Host;

    fn section(name: &str, title: &str) -> Section {
        Section::new(name, title, |_: &dyn Host| Ok(vec![]))
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = SectionRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = SectionRegistry::new();
        registry.register(section("platform", "Platform")).unwrap();

        assert!(!registry.is_empty());
        assert_eq!(registry.get("platform").unwrap().title(), "Platform");
    }

    #[test]
    fn get_unknown_lists_valid_names() {
        let mut registry = SectionRegistry::new();
        registry.register(section("platform", "Platform")).unwrap();
        registry.register(section("env", "Environment")).unwrap();

        match registry.get("bogus").unwrap_err() {
            DoctorError::UnknownSection { name, valid } => {
                assert_eq!(name, "bogus");
                assert_eq!(valid, vec!["platform", "env"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = SectionRegistry::new();
        registry.register(section("env", "Environment")).unwrap();

        let err = registry.register(section("env", "Other")).unwrap_err();
        assert!(matches!(err, DoctorError::DuplicateSection { ref name } if name == "env"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("env").unwrap().title(), "Environment");
    }

    #[test]
    fn reserved_names_are_rejected() {
        let mut registry = SectionRegistry::new();
        assert!(registry.register(section("all", "All")).is_err());
        assert!(registry.register(section("help", "Help")).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn iteration_follows_registration_order() {
        let mut registry = SectionRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry.register(section(name, name)).unwrap();
        }
        assert_eq!(registry.names(), vec!["zeta", "alpha", "mid"]);
        let titles: Vec<_> = registry.all().iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn registry_default_is_empty() {
        let registry = SectionRegistry::default();
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_with_builtins_has_sections_in_order() {
        let registry = SectionRegistry::with_builtins(&SectionOptions::default());
        assert_eq!(
            registry.names(),
            vec!["version", "os", "sizes", "encoding", "path", "packages"]
        );
    }

    #[test]
    fn builtin_names_are_unique_and_not_reserved() {
        let registry = SectionRegistry::with_builtins(&SectionOptions::default());
        let mut rebuilt = SectionRegistry::new();
        for name in registry.names() {
            rebuilt.register(section(&name, &name)).unwrap();
        }
        assert_eq!(rebuilt.len(), registry.len());
    }

    #[test]
    fn builtins_can_be_extended() {
        let mut registry = SectionRegistry::with_builtins(&SectionOptions::default());
        registry.register(section("custom", "Custom")).unwrap();
        assert_eq!(registry.names().last().map(String::as_str), Some("custom"));
        assert!(registry.register(section("os", "Again")).is_err());
    }
}
