//! Issue registry with a lazily-built identifier index
//!
//! The registry owns an immutable catalog of issue descriptors and answers
//! id lookups through an index that is built on first use. The index can be
//! discarded with [`IssueRegistry::reset`], e.g. after loading additional
//! rule sources, and is rebuilt on the next lookup.
//!
//! Concurrency contract: any number of threads may share one registry.
//! [`issues`](IssueRegistry::issues) never blocks. A lookup that finds the
//! index unbuilt takes an exclusive lock, re-checks, and builds the whole
//! index before publishing it; concurrent lookups block on that lock and
//! then see the fully-populated index. At most one build runs per
//! generation, and no caller ever observes a partially-built index.

use std::collections::{HashMap, HashSet};
use std::sync::{OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::checks;
use crate::issue::{Category, Issue, Scope};

type IdIndex = HashMap<&'static str, &'static Issue>;
type BuildHook = Box<dyn Fn() + Send + Sync>;

/// Catalog of known issues plus the id-to-descriptor index
///
/// Registries are plain values: whatever composes the analysis pipeline
/// constructs one and hands out references. Tests construct their own with
/// a reduced catalog or a build hook.
pub struct IssueRegistry {
    issues: Vec<&'static Issue>,
    index: RwLock<Option<IdIndex>>,
    quickfixes: OnceLock<HashSet<&'static str>>,
    build_hook: Option<BuildHook>,
}

impl IssueRegistry {
    /// Registry over the builtin catalog
    pub fn new() -> Self {
        Self::with_issues(checks::builtin_issues().to_vec())
    }

    /// Registry over an explicit catalog, in the given order
    pub fn with_issues(issues: Vec<&'static Issue>) -> Self {
        Self {
            issues,
            index: RwLock::new(None),
            quickfixes: OnceLock::new(),
            build_hook: None,
        }
    }

    /// Installs a hook invoked under the build lock, before the index
    /// iteration starts
    ///
    /// This is the seam the concurrency tests use to stall a build while
    /// other threads attempt lookups.
    pub fn with_build_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.build_hook = Some(Box::new(hook));
        self
    }

    /// The full catalog, in declaration order
    ///
    /// Never blocks, even while another thread is building the index.
    pub fn issues(&self) -> &[&'static Issue] {
        &self.issues
    }

    /// Looks up an issue by id, building the index on first use
    ///
    /// An unknown id is a normal `None`, not an error. If the index is
    /// unbuilt, the calling thread either builds it or blocks until the
    /// thread that is building finishes; the index reference is only
    /// published once the build iteration has completed, so a partial
    /// index is never observable.
    pub fn issue(&self, id: &str) -> Option<&'static Issue> {
        {
            let slot = self.index.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(index) = slot.as_ref() {
                return index.get(id).copied();
            }
        }

        let mut slot = self.index.write().unwrap_or_else(PoisonError::into_inner);
        // Re-check: another thread may have built while we waited.
        if slot.is_none() {
            if let Some(hook) = &self.build_hook {
                hook();
            }
            debug!(issues = self.issues.len(), "building issue index");
            let mut index = HashMap::with_capacity(self.issues.len());
            for issue in &self.issues {
                index.insert(issue.id, *issue);
            }
            // Publish only after the full iteration.
            *slot = Some(index);
        }
        slot.as_ref().and_then(|index| index.get(id).copied())
    }

    /// Discards the id index; the next lookup rebuilds it
    ///
    /// The catalog itself is untouched. Takes the same exclusive lock as
    /// the build, so a reset issued while a build is in flight waits for
    /// it and then discards the result; generations never mix.
    pub fn reset(&self) {
        let mut slot = self.index.write().unwrap_or_else(PoisonError::into_inner);
        if slot.take().is_some() {
            debug!("issue index discarded");
        }
    }

    /// Sorted unique categories present in the catalog
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.issues.iter().map(|i| i.category).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Issues whose detectors must inspect the given scope
    pub fn issues_for_scope(&self, scope: Scope) -> Vec<&'static Issue> {
        self.issues
            .iter()
            .copied()
            .filter(|issue| issue.applies_to(scope))
            .collect()
    }

    /// Whether an automated IDE fix is known for the issue
    pub fn has_quickfix(&self, issue: &Issue) -> bool {
        self.quickfixes.get_or_init(quickfix_ids).contains(issue.id)
    }
}

impl Default for IssueRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Ids of issues with an automated fix in the IDE integration
fn quickfix_ids() -> HashSet<&'static str> {
    HashSet::from([
        checks::INEFFICIENT_WEIGHT.id,
        checks::BASELINE_WEIGHTS.id,
        checks::CONTENT_DESCRIPTION.id,
        checks::HARDCODED_TEXT.id,
        checks::USELESS_LEAF.id,
        checks::USELESS_PARENT.id,
        checks::PX_USAGE.id,
        checks::TEXT_FIELDS.id,
        checks::EXPORTED_SERVICE.id,
        checks::SCROLLVIEW_SIZE.id,
        checks::OBSOLETE_LAYOUT_PARAM.id,
        checks::TYPOGRAPHY_DASHES.id,
        checks::TYPOGRAPHY_ELLIPSIS.id,
        checks::TYPOGRAPHY_QUOTES.id,
        checks::USE_COMPOUND_DRAWABLES.id,
        checks::NEW_API.id,
        checks::INLINED_API.id,
        checks::TYPOS.id,
        checks::ALLOW_BACKUP.id,
        checks::MISSING_TRANSLATION.id,
    ])
}
