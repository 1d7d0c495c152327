//! JSON catalog export for machine consumption

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::issue::Issue;
use crate::registry::IssueRegistry;

#[derive(Serialize)]
struct CatalogExport<'a> {
    tool: &'static str,
    version: &'static str,
    issue_count: usize,
    issues: Vec<IssueExport<'a>>,
}

#[derive(Serialize)]
struct IssueExport<'a> {
    #[serde(flatten)]
    issue: &'a Issue,
    has_quickfix: bool,
}

/// JSON reporter writing to stdout or a file
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, registry: &IssueRegistry, issues: &[&'static Issue]) -> Result<()> {
        let export = CatalogExport {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            issue_count: issues.len(),
            issues: issues
                .iter()
                .map(|issue| IssueExport {
                    issue,
                    has_quickfix: registry.has_quickfix(issue),
                })
                .collect(),
        };

        match &self.output_path {
            Some(path) => {
                let file = File::create(path).into_diagnostic()?;
                let mut writer = BufWriter::new(file);
                serde_json::to_writer_pretty(&mut writer, &export).into_diagnostic()?;
                writer.write_all(b"\n").into_diagnostic()?;
                writer.flush().into_diagnostic()?;
            }
            None => {
                let json = serde_json::to_string_pretty(&export).into_diagnostic()?;
                println!("{}", json);
            }
        }
        Ok(())
    }
}
