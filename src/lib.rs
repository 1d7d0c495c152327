//! lintregistry - Issue registry and catalog browser for Android lint checks
//!
//! This library provides the issue catalog of a static-analysis tool: the
//! descriptors detectors report against, and a thread-safe registry that
//! answers id lookups. Detection itself (parsing, AST traversal, the
//! analysis scheduler) lives in the analysis engine, not here.
//!
//! # Architecture
//!
//! 1. **Descriptors** - Immutable [`Issue`] metadata: id, severity,
//!    category, explanation, applicability scopes
//! 2. **Catalog** - The ordered builtin issue list in [`checks`]
//! 3. **Registry** - [`IssueRegistry`]: lazily-built id index with an
//!    explicit [`reset`](IssueRegistry::reset) for rule-source reloads
//! 4. **Reporting** - Catalog listings in terminal and JSON formats

pub mod checks;
pub mod error;
pub mod issue;
pub mod registry;
pub mod report;

pub use error::RegistryError;
pub use issue::{Category, Issue, Scope, Severity};
pub use registry::IssueRegistry;
pub use report::{ReportFormat, Reporter};
