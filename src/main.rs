use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tracing::info;

use lintregistry::report::{ListReporter, ReportFormat, Reporter};
use lintregistry::{Category, Issue, IssueRegistry, RegistryError, Scope, Severity};

/// lintregistry - Browse the builtin lint issue catalog
#[derive(Parser, Debug)]
#[command(name = "lintregistry")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// List issue ids with their brief descriptions (the default view)
    #[arg(long, conflicts_with = "show")]
    list: bool,

    /// Show full explanations, either for the given issue ids or for the
    /// whole catalog when no ids are given
    #[arg(long, num_args = 0.., value_name = "ID")]
    show: Option<Vec<String>>,

    /// List valid issue categories and exit
    #[arg(long)]
    categories: bool,

    /// Only include issues in the given category
    #[arg(long, value_name = "CATEGORY")]
    category: Option<String>,

    /// Only include issues whose detectors inspect the given scope
    /// (java-source, manifest, resources, java-libraries, class-file,
    /// proguard-file, gradle)
    #[arg(long, value_name = "SCOPE")]
    scope: Option<String>,

    /// Only include issues with the given default severity
    #[arg(long, value_name = "SEVERITY")]
    severity: Option<String>,

    /// Only include issues that are enabled by default
    #[arg(long)]
    enabled_only: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completions
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    info!("lintregistry v{}", env!("CARGO_PKG_VERSION"));

    let registry = IssueRegistry::new();

    if cli.categories {
        println!("Valid issue categories:");
        for category in registry.categories() {
            println!("    {}", category.full_name());
        }
        return Ok(());
    }

    let issues = select_issues(&registry, &cli)?;

    if issues.is_empty() {
        println!("{}", "No issues match the given filters.".yellow());
        return Ok(());
    }

    let format = match cli.format {
        OutputFormat::Terminal if cli.show.is_some() => ReportFormat::Show,
        OutputFormat::Terminal => ReportFormat::List,
        OutputFormat::Json => ReportFormat::Json,
    };

    let reporter = Reporter::new(format, cli.output.clone());
    reporter.report(&registry, &issues)?;

    Ok(())
}

/// Resolve explicit ids and apply the category/scope/severity filters
fn select_issues(registry: &IssueRegistry, cli: &Cli) -> Result<Vec<&'static Issue>> {
    let mut issues: Vec<&'static Issue> = match &cli.show {
        Some(ids) if !ids.is_empty() => {
            let mut selected = Vec::with_capacity(ids.len());
            for id in ids {
                match registry.issue(id) {
                    Some(issue) => selected.push(issue),
                    None => {
                        eprintln!("{}: unknown issue id '{}'", "error".red().bold(), id);
                        eprintln!();
                        let listing = ListReporter::new().with_categories(false);
                        let _ = listing.report(registry, registry.issues());
                        return Err(RegistryError::UnknownIssueId(id.clone())).into_diagnostic();
                    }
                }
            }
            selected
        }
        _ => registry.issues().to_vec(),
    };

    if let Some(name) = &cli.category {
        let category: Category = name.parse().into_diagnostic()?;
        issues.retain(|issue| issue.category == category);
    }
    if let Some(name) = &cli.scope {
        let scope: Scope = name.parse().into_diagnostic()?;
        issues.retain(|issue| issue.applies_to(scope));
    }
    if let Some(name) = &cli.severity {
        let severity: Severity = name.parse().into_diagnostic()?;
        issues.retain(|issue| issue.severity == severity);
    }
    if cli.enabled_only {
        issues.retain(|issue| issue.enabled_by_default);
    }

    Ok(issues)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();
}
