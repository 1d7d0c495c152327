//! Integration tests for the issue catalog and registry cache
//!
//! These cover the catalog invariants (unique ids, sane metadata) and the
//! lazy index contract (lookup, miss, reset, idempotent catalog access).

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lintregistry::checks::{self, INITIAL_CAPACITY};
use lintregistry::{IssueRegistry, Scope, Severity};

/// Registry that counts how many index builds it has performed
fn counting_registry() -> (IssueRegistry, Arc<AtomicUsize>) {
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&builds);
    let registry = IssueRegistry::new().with_build_hook(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (registry, builds)
}

// ============================================================================
// Catalog invariants
// ============================================================================

mod catalog_tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut seen = HashSet::new();
        for issue in checks::builtin_issues() {
            assert!(seen.insert(issue.id), "duplicate issue id '{}'", issue.id);
        }
    }

    #[test]
    fn catalog_fits_capacity() {
        assert!(checks::builtin_issues().len() <= INITIAL_CAPACITY);
    }

    #[test]
    fn scope_subsets_fit_capacity() {
        let registry = IssueRegistry::new();
        for scope in Scope::ALL {
            let subset = registry.issues_for_scope(scope);
            assert!(
                subset.len() <= INITIAL_CAPACITY,
                "scope {} has {} issues",
                scope,
                subset.len()
            );
        }
    }

    #[test]
    fn every_scope_has_at_least_one_issue() {
        let registry = IssueRegistry::new();
        for scope in Scope::ALL {
            assert!(
                !registry.issues_for_scope(scope).is_empty(),
                "no issues for scope {}",
                scope
            );
        }
    }

    #[test]
    fn metadata_is_well_formed() {
        for issue in checks::builtin_issues() {
            assert!(!issue.id.is_empty());
            assert!(!issue.brief.is_empty(), "{} has no brief", issue.id);
            assert!(!issue.explanation.is_empty(), "{} has no explanation", issue.id);
            assert!(
                (1..=10).contains(&issue.priority),
                "{} has priority {}",
                issue.id,
                issue.priority
            );
            assert!(!issue.scopes.is_empty(), "{} has no scopes", issue.id);
        }
    }

    #[test]
    fn known_ids_are_present() {
        let ids: HashSet<&str> = checks::builtin_issues().iter().map(|i| i.id).collect();
        for id in [
            "HardcodedText",
            "UnusedResources",
            "NewApi",
            "ManifestOrder",
            "ExportedService",
            "ContentDescription",
        ] {
            assert!(ids.contains(id), "missing builtin issue '{}'", id);
        }
    }

    #[test]
    fn disabled_by_default_issues_keep_a_severity() {
        for issue in checks::builtin_issues() {
            if !issue.enabled_by_default {
                assert_ne!(issue.severity, Severity::Ignore, "{}", issue.id);
            }
        }
    }
}

// ============================================================================
// Registry cache contract
// ============================================================================

mod registry_tests {
    use super::*;

    #[test]
    fn every_catalog_id_resolves_to_its_descriptor() {
        let registry = IssueRegistry::new();
        for issue in registry.issues().to_vec() {
            let found = registry.issue(issue.id).expect(issue.id);
            assert!(std::ptr::eq(found, issue), "wrong descriptor for {}", issue.id);
        }
    }

    #[test]
    fn unknown_id_is_a_normal_miss() {
        let registry = IssueRegistry::new();
        assert!(registry.issue("DefinitelyNotAnIssue").is_none());
        assert!(registry.issue("").is_none());
        // Lookups are case-sensitive, matching suppression files
        assert!(registry.issue("hardcodedtext").is_none());
    }

    #[test]
    fn index_is_built_once_across_lookups() {
        let (registry, builds) = counting_registry();
        assert_eq!(builds.load(Ordering::SeqCst), 0);

        registry.issue("HardcodedText");
        registry.issue("NewApi");
        registry.issue("NoSuchIssue");
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reset_triggers_exactly_one_rebuild() {
        let (registry, builds) = counting_registry();
        registry.issue("HardcodedText");
        assert_eq!(builds.load(Ordering::SeqCst), 1);

        registry.reset();
        assert_eq!(builds.load(Ordering::SeqCst), 1, "reset must not build");

        registry.issue("HardcodedText");
        registry.issue("NewApi");
        assert_eq!(builds.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn reset_before_first_lookup_is_harmless() {
        let (registry, builds) = counting_registry();
        registry.reset();
        registry.reset();
        assert_eq!(builds.load(Ordering::SeqCst), 0);
        assert!(registry.issue("HardcodedText").is_some());
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn catalog_access_is_idempotent() {
        let registry = IssueRegistry::new();
        let first: Vec<&str> = registry.issues().iter().map(|i| i.id).collect();
        registry.issue("HardcodedText");
        let second: Vec<&str> = registry.issues().iter().map(|i| i.id).collect();
        registry.reset();
        let third: Vec<&str> = registry.issues().iter().map(|i| i.id).collect();
        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    #[test]
    fn categories_are_sorted_and_unique() {
        let registry = IssueRegistry::new();
        let categories = registry.categories();
        assert!(!categories.is_empty());
        let mut sorted = categories.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn scope_filter_matches_applies_to() {
        let registry = IssueRegistry::new();
        for issue in registry.issues_for_scope(Scope::Gradle) {
            assert!(issue.applies_to(Scope::Gradle), "{}", issue.id);
        }
        let manifest_only = registry.issues_for_scope(Scope::Manifest);
        assert!(manifest_only.iter().any(|i| i.id == "ManifestOrder"));
        assert!(!manifest_only.iter().any(|i| i.id == "HardcodedText"));
    }
}
