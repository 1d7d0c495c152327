//! Terminal renderers for the issue catalog
//!
//! Two views, modeled on classic lint output: a compact listing of
//! identifiers with their one-line descriptions, and a full view with
//! explanations grouped under category headers.

use colored::Colorize;
use miette::Result;

use crate::issue::Issue;
use crate::registry::IssueRegistry;
use crate::report::colors::{SeverityColors, StructureColors};

/// Column at which wrapped output text breaks
const WRAP_WIDTH: usize = 78;

/// Compact id listing, one wrapped entry per issue
pub struct ListReporter {
    show_categories: bool,
}

impl ListReporter {
    pub fn new() -> Self {
        Self {
            show_categories: true,
        }
    }

    pub fn with_categories(mut self, show: bool) -> Self {
        self.show_categories = show;
        self
    }

    pub fn report(&self, registry: &IssueRegistry, issues: &[&Issue]) -> Result<()> {
        if self.show_categories {
            println!("Valid issue categories:");
            for category in registry.categories() {
                println!("    {}", StructureColors::category(category.full_name()));
            }
            println!();
        }

        println!(
            "Valid issue id's ({}):",
            StructureColors::count(&issues.len().to_string())
        );
        for issue in issues {
            let entry = format!("\"{}\": {}", issue.id, issue.brief);
            print!("{}", wrap(&entry, WRAP_WIDTH, "    "));
        }
        Ok(())
    }
}

impl Default for ListReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Full catalog view with explanations, grouped by category
pub struct ShowReporter;

impl ShowReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, registry: &IssueRegistry, issues: &[&Issue]) -> Result<()> {
        let mut sorted: Vec<&Issue> = issues.to_vec();
        sorted.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then(b.priority.cmp(&a.priority))
                .then(a.id.cmp(b.id))
        });

        println!("Available issues:");
        let mut previous_category = None;
        for issue in sorted {
            if previous_category != Some(issue.category) {
                let name = issue.category.full_name();
                println!();
                println!("{}", StructureColors::category(name));
                println!("{}", "=".repeat(name.len()));
                previous_category = Some(issue.category);
            }
            println!();
            self.print_issue(registry, issue);
        }
        Ok(())
    }

    fn print_issue(&self, registry: &IssueRegistry, issue: &Issue) {
        println!("{}", StructureColors::issue_id(issue.id));
        print!("{}", wrap(issue.brief, WRAP_WIDTH, "    "));

        let scopes: Vec<&str> = issue.scopes.iter().map(|s| s.as_str()).collect();
        let mut trailer = format!("Priority: {}/10, Scopes: {}", issue.priority, scopes.join(", "));
        if !issue.enabled_by_default {
            trailer.push_str(" (disabled by default)");
        }
        println!(
            "    {} {}{} {}",
            StructureColors::meta("Severity:"),
            SeverityColors::paint(issue.severity),
            StructureColors::meta(","),
            StructureColors::meta(&trailer)
        );

        if registry.has_quickfix(issue) {
            println!("    {}", "Has an automated quickfix".green());
        }
        println!();
        print!("{}", wrap(issue.explanation, WRAP_WIDTH, "    "));
    }
}

impl Default for ShowReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Greedy word wrap with a fixed indent, newline-terminated
pub fn wrap(text: &str, width: usize, indent: &str) -> String {
    let mut out = String::new();
    let mut line = String::from(indent);
    let budget = width.saturating_sub(indent.len()).max(1);

    for word in text.split_whitespace() {
        if line.len() > indent.len() && line.len() + 1 + word.len() > indent.len() + budget {
            out.push_str(line.trim_end());
            out.push('\n');
            line = String::from(indent);
        }
        if line.len() > indent.len() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if line.len() > indent.len() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
