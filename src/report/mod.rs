//! Report generation.
//!
//! This module provides:
//! - [`Section`] and [`Producer`] for defining what a report contains
//! - [`SectionRegistry`] for the ordered, name-unique set of sections
//! - [`select`] for resolving command-line section names
//! - [`Report`] for running producers and writing the result
//!
//! # Example
//!
//! ```
//! use rustdoctor::host::{Host, MockHost};
//! use rustdoctor::report::{select, Report, Section, SectionRegistry};
//! use rustdoctor::ui::Theme;
//!
//! let mut registry = SectionRegistry::new();
//! registry
//!     .register(Section::new("platform", "Platform", |_: &dyn Host| {
//!         Ok(vec!["os: linux".to_string()])
//!     }))
//!     .unwrap();
//! registry
//!     .register(Section::new("env", "Environment", |_: &dyn Host| {
//!         Ok(vec!["none".to_string()])
//!     }))
//!     .unwrap();
//!
//! let selected = select(&registry, &["env"]).unwrap();
//! let report = Report::build(&selected, &MockHost::new());
//!
//! let mut out = Vec::new();
//! report.write_text(&Theme::plain(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "--- Environment ----------\nnone\n");
//! ```

pub mod registry;
pub mod render;
pub mod section;
pub mod selector;

pub use registry::{SectionRegistry, RESERVED_NAMES};
pub use render::{Outcome, Report, ReportFormat, SectionReport};
pub use section::{Producer, Section};
pub use selector::{select, ALL};
