//! Centralized color scheme for consistent output formatting
//!
//! Based on Rust compiler diagnostics design (RFC 1644)

use colored::{ColoredString, Colorize};

use crate::issue::Severity;

/// Severity colors matching compiler diagnostic conventions
pub struct SeverityColors;

impl SeverityColors {
    pub fn paint(severity: Severity) -> ColoredString {
        let text = severity.as_str();
        match severity {
            Severity::Fatal => text.red().bold(),
            Severity::Error => text.red(),
            Severity::Warning => text.yellow(),
            Severity::Informational => text.cyan(),
            Severity::Ignore => text.dimmed(),
        }
    }
}

/// Structural element colors
pub struct StructureColors;

impl StructureColors {
    /// Issue identifier (e.g. HardcodedText)
    pub fn issue_id(text: &str) -> ColoredString {
        text.magenta()
    }

    /// Category headers
    pub fn category(text: &str) -> ColoredString {
        text.cyan().bold()
    }

    /// Count/statistics numbers
    pub fn count(text: &str) -> ColoredString {
        text.white().bold()
    }

    /// Secondary metadata (priority, scopes)
    pub fn meta(text: &str) -> ColoredString {
        text.dimmed()
    }
}
