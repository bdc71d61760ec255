//! The default command: build and print the report.

use std::io::Write;

use crate::config::Settings;
use crate::error::Result;
use crate::host::{Host, SystemHost};
use crate::report::{select, Report, SectionRegistry};
use crate::ui::Theme;

use super::dispatcher::{Command, CommandResult};

/// The report command implementation.
pub struct ReportCommand {
    settings: Settings,
    host: Box<dyn Host>,
}

impl ReportCommand {
    /// Create a report command inspecting the running host.
    pub fn new(settings: Settings) -> Self {
        Self::with_host(settings, Box::new(SystemHost::new()))
    }

    /// Create a report command inspecting `host` instead.
    pub fn with_host(settings: Settings, host: Box<dyn Host>) -> Self {
        Self { settings, host }
    }
}

impl Command for ReportCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let registry = SectionRegistry::with_builtins(&self.settings.section_options);
        let report = build_report(&registry, &self.settings.sections, self.host.as_ref())?;

        tracing::debug!(
            "Built report with {} sections ({} unavailable)",
            report.sections.len(),
            report.unavailable_count()
        );

        let theme = Theme::for_color(self.settings.color);
        report.write(self.settings.format, &theme, out)?;
        Ok(CommandResult::success())
    }
}

/// Select `requested` from `registry` and run the producers.
///
/// Selection is validated first, so an unknown name fails before any
/// producer runs.
pub fn build_report(
    registry: &SectionRegistry,
    requested: &[String],
    host: &dyn Host,
) -> Result<Report> {
    let selected = select(registry, requested)?;
    Ok(Report::build(&selected, host))
}
