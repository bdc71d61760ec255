//! Visual theme and styling.

use console::Style;

/// rustdoctor's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for section headers (magenta bold).
    pub header: Style,
    /// Style for unavailable notices (orange).
    pub unavailable: Style,
    /// Style for secondary text such as section titles in listings (dim).
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default coloured theme.
    pub fn new() -> Self {
        Self {
            header: Style::new().bold().magenta(),
            unavailable: Style::new().color256(208),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            unavailable: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the coloured or plain theme.
    pub fn for_color(color: bool) -> Self {
        if color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a section header line.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{}",
            self.header.apply_to(format!("--- {} ----------", title))
        )
    }

    /// Format the notice shown in place of a failed section's lines.
    pub fn format_unavailable(&self, reason: &str) -> String {
        format!(
            "{}",
            self.unavailable.apply_to(format!("unavailable: {}", reason))
        )
    }

    /// Format a `name  title` row of the section listing.
    pub fn format_listing(&self, name: &str, width: usize, title: &str) -> String {
        format!("{:<width$}  {}", name, self.dim.apply_to(title), width = width)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
