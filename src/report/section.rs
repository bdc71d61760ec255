//! Section definitions.
//!
//! This module provides the core types for defining report sections:
//!
//! - [`Producer`] - The capability that gathers one section's lines
//! - [`Section`] - A named, titled producer as stored in the registry

use std::fmt;

use crate::error::Result;
use crate::host::Host;

/// Gathers one category of facts from the host.
///
/// Producers only read from the host. Any closure with the right
/// signature is a producer, which keeps ad-hoc sections short:
///
/// ```
/// use rustdoctor::host::{Host, MockHost};
/// use rustdoctor::report::{Producer, Section};
///
/// let section = Section::new("home", "Home", |host: &dyn Host| {
///     Ok(vec![format!("HOME = {:?}", host.var("HOME"))])
/// });
/// let lines = section.produce(&MockHost::new()).unwrap();
/// assert_eq!(lines, vec!["HOME = None"]);
/// ```
pub trait Producer {
    /// Produce the section's lines, in display order.
    fn produce(&self, host: &dyn Host) -> Result<Vec<String>>;
}

impl<F> Producer for F
where
    F: Fn(&dyn Host) -> Result<Vec<String>>,
{
    fn produce(&self, host: &dyn Host) -> Result<Vec<String>> {
        self(host)
    }
}

/// A named category of diagnostic information.
///
/// Immutable once constructed.
pub struct Section {
    name: String,
    title: String,
    producer: Box<dyn Producer>,
}

impl Section {
    /// Create a section from any producer.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        producer: impl Producer + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            producer: Box::new(producer),
        }
    }

    /// Unique identifier used on the command line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display heading.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Run this section's producer against `host`.
    pub fn produce(&self, host: &dyn Host) -> Result<Vec<String>> {
        self.producer.produce(host)
    }
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("name", &self.name)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
