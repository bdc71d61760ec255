//! Building and writing reports.
//!
//! [`Report::build`] runs every selected producer once, in order, and keeps
//! going when one fails: the failure becomes an [`Outcome::Unavailable`]
//! entry rendered inline. Writers for the supported [`ReportFormat`]s live
//! here as well.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::host::Host;
use crate::ui::Theme;

use super::section::Section;

/// Output format for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// One block of plain text per section.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// What a section's producer yielded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The producer succeeded.
    Lines(Vec<String>),
    /// The producer failed; carries the reason.
    Unavailable(String),
}

/// One section of a finished report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    /// Section name as used on the command line.
    pub name: String,
    /// Display heading.
    pub title: String,
    /// Lines or the reason the section is unavailable.
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl SectionReport {
    /// Whether the producer failed.
    pub fn is_unavailable(&self) -> bool {
        matches!(self.outcome, Outcome::Unavailable(_))
    }
}

/// The full output of one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// When the report was built.
    pub generated_at: DateTime<Utc>,
    /// Version of rustdoctor that built it.
    pub version: String,
    /// Selected sections, in output order.
    pub sections: Vec<SectionReport>,
}

impl Report {
    /// Run each section's producer against `host`, strictly in order.
    ///
    /// Never fails as a whole; individual producer errors are captured.
    pub fn build(sections: &[&Section], host: &dyn Host) -> Self {
        let sections = sections
            .iter()
            .map(|section| {
                tracing::debug!("Producing section {}", section.name());
                let outcome = match section.produce(host) {
                    Ok(lines) => Outcome::Lines(lines),
                    Err(e) => {
                        tracing::info!("Section {} unavailable: {}", section.name(), e);
                        Outcome::Unavailable(e.to_string())
                    }
                };
                SectionReport {
                    name: section.name().to_string(),
                    title: section.title().to_string(),
                    outcome,
                }
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            sections,
        }
    }

    /// Number of sections whose producer failed.
    pub fn unavailable_count(&self) -> usize {
        self.sections.iter().filter(|s| s.is_unavailable()).count()
    }

    /// Write the report in `format`.
    pub fn write(&self, format: ReportFormat, theme: &Theme, out: &mut dyn Write) -> Result<()> {
        match format {
            ReportFormat::Text => self.write_text(theme, out),
            ReportFormat::Json => self.write_json(out),
        }
    }

    /// Plain-text rendering: a header line and the section's lines per
    /// block, blocks separated by a blank line.
    pub fn write_text(&self, theme: &Theme, out: &mut dyn Write) -> Result<()> {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", theme.format_header(&section.title))?;
            match &section.outcome {
                Outcome::Lines(lines) => {
                    for line in lines {
                        writeln!(out, "{}", line)?;
                    }
                }
                Outcome::Unavailable(reason) => {
                    writeln!(out, "{}", theme.format_unavailable(reason))?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Pretty-printed JSON rendering.
    pub fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self).map_err(anyhow::Error::from)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}
