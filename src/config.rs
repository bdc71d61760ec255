//! Run configuration.
//!
//! Settings come from the command line, with environment fallbacks handled
//! by clap (`RUSTDOCTOR_ENV_PATTERN`) and the `NO_COLOR` convention. The
//! resulting [`Settings`] value is passed explicitly to whatever needs it.

use crate::cli::Cli;
use crate::error::Result;
use crate::report::ReportFormat;
use crate::sections::SectionOptions;
use crate::ui::should_use_colors;

/// Everything a report run needs to know, validated.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Requested section names, as given.
    pub sections: Vec<String>,
    /// Output format.
    pub format: ReportFormat,
    /// Whether to style output.
    pub color: bool,
    /// Options for the built-in sections.
    pub section_options: SectionOptions,
}

impl Settings {
    /// Build settings from parsed arguments.
    ///
    /// Fails with a usage error if the environment pattern is not a valid
    /// regular expression.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let section_options = SectionOptions::with_env_pattern(&cli.env_pattern)?;
        let color = !cli.no_color && cli.format == ReportFormat::Text && should_use_colors();

        tracing::debug!(
            "Settings: format={:?} color={} env_pattern={}",
            cli.format,
            color,
            cli.env_pattern
        );

        Ok(Self {
            sections: cli.sections.clone(),
            format: cli.format,
            color,
            section_options,
        })
    }
}
