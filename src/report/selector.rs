//! Resolving requested section names against the registry.

use std::collections::HashSet;

use crate::error::Result;

use super::registry::SectionRegistry;
use super::section::Section;

/// Word that selects every section.
pub const ALL: &str = "all";

/// Select the sections named in `requested`.
///
/// An empty request, or one containing [`ALL`], selects everything. Every
/// name is validated before anything is selected, so an unknown name fails
/// the whole request. The result always follows registration order and
/// lists each section once, whatever order and repetition the request had.
pub fn select<'r, S: AsRef<str>>(
    registry: &'r SectionRegistry,
    requested: &[S],
) -> Result<Vec<&'r Section>> {
    let mut wanted = HashSet::new();
    let mut everything = requested.is_empty();

    for name in requested.iter().map(AsRef::as_ref) {
        if name == ALL {
            everything = true;
        } else {
            wanted.insert(registry.get(name)?.name());
        }
    }

    let selected: Vec<&Section> = registry
        .all()
        .iter()
        .filter(|s| everything || wanted.contains(s.name()))
        .collect();

    tracing::debug!(
        "Selected sections: {}",
        selected
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(selected)
}
