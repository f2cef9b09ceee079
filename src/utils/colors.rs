// ============================================================================
// TsCat - Colors
// ============================================================================
//
// File: src/utils/colors.rs
// Responsibility: terminal color output
// Boundaries:
//   - ✅ Log level color theme
//   - ✅ Global color enable/disable
//   - ❌ Should not contain business logic
//   - ❌ Should not contain text content
//
// ============================================================================

use colored::{Color, Colorize};

/// Log level color theme
pub mod log_colors {
    use colored::Color;

    pub const INFO: Color = Color::Cyan;
    pub const WARN: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const SUCCESS: Color = Color::Green;
    /// Secondary text such as file locations
    pub const MUTED: Color = Color::BrightBlack;
}

/// Color helpers
pub struct Colors;

impl Colors {
    /// Enable or disable colors for the whole process; piped output is never colored.
    pub fn configure(enabled: bool) {
        let enabled = enabled && atty::is(atty::Stream::Stdout);
        colored::control::set_override(enabled);
    }

    pub fn colorize(text: &str, color: Color) -> String {
        text.color(color).to_string()
    }

    pub fn info(text: &str) -> String {
        Self::colorize(text, log_colors::INFO)
    }

    pub fn warn(text: &str) -> String {
        Self::colorize(text, log_colors::WARN)
    }

    pub fn error(text: &str) -> String {
        Self::colorize(text, log_colors::ERROR)
    }

    pub fn success(text: &str) -> String {
        Self::colorize(text, log_colors::SUCCESS)
    }

    pub fn muted(text: &str) -> String {
        Self::colorize(text, log_colors::MUTED)
    }

    pub fn bold(text: &str) -> String {
        text.bold().to_string()
    }
}
