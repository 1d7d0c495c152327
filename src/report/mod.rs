//! Catalog output in the supported formats

mod colors;
mod json;
mod terminal;

pub use json::JsonReporter;
pub use terminal::{wrap, ListReporter, ShowReporter};

use miette::Result;
use std::path::PathBuf;

use crate::issue::Issue;
use crate::registry::IssueRegistry;

/// Output format for catalog views
#[derive(Debug, Clone, Default)]
pub enum ReportFormat {
    /// Compact id listing
    #[default]
    List,
    /// Full explanations grouped by category
    Show,
    /// JSON machine-readable format
    Json,
}

/// Reporter for rendering the issue catalog
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self {
            format,
            output_path,
        }
    }

    /// Render the given catalog subset
    pub fn report(&self, registry: &IssueRegistry, issues: &[&'static Issue]) -> Result<()> {
        match &self.format {
            ReportFormat::List => ListReporter::new().report(registry, issues),
            ReportFormat::Show => ShowReporter::new().report(registry, issues),
            ReportFormat::Json => {
                JsonReporter::new(self.output_path.clone()).report(registry, issues)
            }
        }
    }
}
