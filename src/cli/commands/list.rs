//! The `--list` command: show the available sections.

use std::io::Write;

use crate::config::Settings;
use crate::report::SectionRegistry;
use crate::ui::Theme;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    settings: Settings,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> crate::error::Result<CommandResult> {
        let registry = SectionRegistry::with_builtins(&self.settings.section_options);
        let theme = Theme::for_color(self.settings.color);
        let width = registry
            .all()
            .iter()
            .map(|s| s.name().len())
            .max()
            .unwrap_or(0);

        for section in registry.all() {
            writeln!(
                out,
                "{}",
                theme.format_listing(section.name(), width, section.title())
            )?;
        }
        Ok(CommandResult::success())
    }
}
