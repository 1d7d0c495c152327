//! Issue descriptors and their metadata
//!
//! An [`Issue`] describes one category of lint finding: a stable identifier,
//! a default severity, a category, an explanation, and the set of artifact
//! scopes a detector must inspect to find it. Descriptors are immutable and
//! declared as `static` items in the builtin catalog; detectors reference
//! them by identifier when reporting findings.

use serde::Serialize;
use std::str::FromStr;

use crate::error::RegistryError;

/// Default severity of findings for an issue
///
/// Ordered from most to least severe. `Ignore` means the issue is known
/// but findings are suppressed unless explicitly enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Fatal,
    Error,
    Warning,
    Informational,
    Ignore,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Fatal => "fatal",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Informational => "informational",
            Severity::Ignore => "ignore",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fatal" => Ok(Severity::Fatal),
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "informational" | "info" => Ok(Severity::Informational),
            "ignore" => Ok(Severity::Ignore),
            _ => Err(RegistryError::UnknownSeverity(s.to_string())),
        }
    }
}

/// Category an issue belongs to, used for grouped display
///
/// The ordering here drives the section ordering in the `--show` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Correctness,
    Security,
    Performance,
    Usability,
    Accessibility,
    Internationalization,
    Icons,
    Typography,
}

impl Category {
    /// Human-readable name shown in category listings
    pub fn full_name(&self) -> &'static str {
        match self {
            Category::Correctness => "Correctness",
            Category::Security => "Security",
            Category::Performance => "Performance",
            Category::Usability => "Usability",
            Category::Accessibility => "Accessibility",
            Category::Internationalization => "Internationalization",
            Category::Icons => "Usability:Icons",
            Category::Typography => "Usability:Typography",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

impl FromStr for Category {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "correctness" => Ok(Category::Correctness),
            "security" => Ok(Category::Security),
            "performance" => Ok(Category::Performance),
            "usability" => Ok(Category::Usability),
            "accessibility" | "a11y" => Ok(Category::Accessibility),
            "internationalization" | "i18n" => Ok(Category::Internationalization),
            "icons" | "usability:icons" => Ok(Category::Icons),
            "typography" | "usability:typography" => Ok(Category::Typography),
            _ => Err(RegistryError::UnknownCategory(s.to_string())),
        }
    }
}

/// Artifact scope a detector must inspect to find an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Java/Kotlin source files
    JavaSource,
    /// AndroidManifest.xml
    Manifest,
    /// Resource XML files (layouts, values, drawables)
    Resources,
    /// Bundled library jars
    JavaLibraries,
    /// Compiled bytecode (.class files)
    ClassFile,
    /// ProGuard/R8 configuration files
    ProguardFile,
    /// Gradle build files
    Gradle,
}

impl Scope {
    /// All scopes, in catalog-filter display order
    pub const ALL: [Scope; 7] = [
        Scope::JavaSource,
        Scope::Manifest,
        Scope::Resources,
        Scope::JavaLibraries,
        Scope::ClassFile,
        Scope::ProguardFile,
        Scope::Gradle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::JavaSource => "java-source",
            Scope::Manifest => "manifest",
            Scope::Resources => "resources",
            Scope::JavaLibraries => "java-libraries",
            Scope::ClassFile => "class-file",
            Scope::ProguardFile => "proguard-file",
            Scope::Gradle => "gradle",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Scope {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "java-source" | "source" => Ok(Scope::JavaSource),
            "manifest" => Ok(Scope::Manifest),
            "resources" | "resource-file" => Ok(Scope::Resources),
            "java-libraries" | "libraries" => Ok(Scope::JavaLibraries),
            "class-file" | "bytecode" => Ok(Scope::ClassFile),
            "proguard-file" | "proguard" => Ok(Scope::ProguardFile),
            "gradle" => Ok(Scope::Gradle),
            _ => Err(RegistryError::UnknownScope(s.to_string())),
        }
    }
}

/// Descriptor for one detectable problem category
///
/// Identifiers are stable over time since they are used to persist
/// suppressions; they are typically a single camel-cased word. Descriptors
/// are created once as `static` items and never mutated.
#[derive(Debug, Serialize)]
pub struct Issue {
    /// Unique, stable identifier (e.g. `HardcodedText`)
    pub id: &'static str,
    /// One-line summary of what the detector looks for
    pub brief: &'static str,
    /// Full explanation with suggestions for how to fix the problem
    pub explanation: &'static str,
    pub category: Category,
    /// Importance from 1 to 10, 10 being most severe
    pub priority: u8,
    pub severity: Severity,
    /// Artifact types a detector must inspect to find this issue
    pub scopes: &'static [Scope],
    /// Whether the issue is checked without explicit opt-in
    pub enabled_by_default: bool,
}

impl Issue {
    pub const fn new(
        id: &'static str,
        brief: &'static str,
        explanation: &'static str,
        category: Category,
        priority: u8,
        severity: Severity,
        scopes: &'static [Scope],
    ) -> Self {
        Self {
            id,
            brief,
            explanation,
            category,
            priority,
            severity,
            scopes,
            enabled_by_default: true,
        }
    }

    pub const fn disabled_by_default(mut self) -> Self {
        self.enabled_by_default = false;
        self
    }

    /// Whether a detector for this issue must look at the given scope
    pub fn applies_to(&self, scope: Scope) -> bool {
        self.scopes.contains(&scope)
    }
}

impl PartialEq for Issue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Issue {}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
