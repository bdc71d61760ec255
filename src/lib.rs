//! rustdoctor - Show useful things about a Rust installation.
//!
//! rustdoctor inspects the host it runs on and prints a report split into
//! named sections: the toolchain, the operating system, primitive sizes,
//! text encoding, the search path and installed packages. Sections can be
//! selected by name; a section that can't be gathered is reported as
//! unavailable without stopping the rest of the report.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Validated run settings
//! - [`error`] - Error types and result aliases
//! - [`host`] - Read-only access to the inspected host
//! - [`report`] - Section registry, selection and rendering
//! - [`secrets`] - Redaction of secret-looking environment values
//! - [`sections`] - The built-in sections
//! - [`ui`] - Terminal styling
//!
//! # Example
//!
//! ```
//! use rustdoctor::host::MockHost;
//! use rustdoctor::report::{select, Report, SectionRegistry};
//! use rustdoctor::sections::SectionOptions;
//!
//! let registry = SectionRegistry::with_builtins(&SectionOptions::default());
//! let selected = select(&registry, &["sizes"]).unwrap();
//! let report = Report::build(&selected, &MockHost::new());
//!
//! assert_eq!(report.sections.len(), 1);
//! assert_eq!(report.sections[0].title, "Sizes");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod report;
pub mod secrets;
pub mod sections;
pub mod ui;

pub use error::{DoctorError, Result};
