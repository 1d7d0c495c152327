//! Error types for the registry and its CLI

use thiserror::Error;

/// Errors surfaced by catalog browsing and CLI argument parsing
///
/// Library lookups report a missing issue as `None`, not as an error;
/// `UnknownIssueId` only occurs when a caller explicitly names an id,
/// e.g. `--show MissingId` on the command line.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown issue id '{0}'")]
    UnknownIssueId(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("unknown scope '{0}'")]
    UnknownScope(String),

    #[error("unknown severity '{0}'")]
    UnknownSeverity(String),
}
