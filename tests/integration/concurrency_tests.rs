//! Concurrency tests for the registry's lazy index
//!
//! These reproduce the regression where the index reference was published
//! before the build loop finished, letting a second thread observe an
//! empty or partial index. The build hook stalls the building thread while
//! it holds the build lock; a concurrent reader must block for the whole
//! stall and then see the fully-populated index, without a second build.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use lintregistry::IssueRegistry;

const STALL: Duration = Duration::from_millis(1500);

/// Registry whose first build stalls for `STALL` after taking the lock
///
/// Returns the registry, the build counter, and a flag that flips once a
/// build has entered its stall.
fn stalling_registry() -> (Arc<IssueRegistry>, Arc<AtomicUsize>, Arc<AtomicBool>) {
    let builds = Arc::new(AtomicUsize::new(0));
    let in_build = Arc::new(AtomicBool::new(false));
    let builds_hook = Arc::clone(&builds);
    let in_build_hook = Arc::clone(&in_build);
    let registry = IssueRegistry::new().with_build_hook(move || {
        builds_hook.fetch_add(1, Ordering::SeqCst);
        in_build_hook.store(true, Ordering::SeqCst);
        thread::sleep(STALL);
    });
    (Arc::new(registry), builds, in_build)
}

/// Spin until the hook signals that a build has started
fn wait_for_build_start(in_build: &AtomicBool) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while !in_build.load(Ordering::SeqCst) {
        assert!(Instant::now() < deadline, "build never started");
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn reader_blocks_until_stalled_build_completes() {
    let (registry, builds, in_build) = stalling_registry();

    let builder = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || registry.issue("HardcodedText").map(|i| i.id))
    };

    wait_for_build_start(&in_build);

    // Second reader arrives mid-build; it must block on the build lock
    // rather than observe a partial index.
    let reader = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            let start = Instant::now();
            let result = registry.issue("HardcodedText").map(|i| i.id);
            (result, start.elapsed())
        })
    };

    let built = builder.join().expect("builder thread panicked");
    let (read, waited) = reader.join().expect("reader thread panicked");

    assert_eq!(built, Some("HardcodedText"));
    assert_eq!(read, built, "reader must see the builder's result");
    assert!(
        waited >= STALL / 2,
        "reader returned after {:?}; it must block for the build",
        waited
    );
    assert_eq!(
        builds.load(Ordering::SeqCst),
        1,
        "the blocked reader must not trigger a second build"
    );
}

#[test]
fn catalog_access_never_blocks_on_a_build() {
    let (registry, _builds, in_build) = stalling_registry();

    let builder = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || registry.issue("NewApi"))
    };

    wait_for_build_start(&in_build);

    let start = Instant::now();
    let count = registry.issues().len();
    let elapsed = start.elapsed();

    assert!(count > 0);
    assert!(
        elapsed < STALL / 2,
        "issues() took {:?} during a build; it must not block",
        elapsed
    );
    builder.join().expect("builder thread panicked");
}

#[test]
fn reset_during_build_serializes_and_discards_the_new_index() {
    let (registry, builds, in_build) = stalling_registry();

    let builder = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || registry.issue("HardcodedText").map(|i| i.id))
    };
    wait_for_build_start(&in_build);

    // Reset arrives while the build holds the lock; it must wait for the
    // build to finish rather than clear the slot mid-iteration.
    let resetter = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            let start = Instant::now();
            registry.reset();
            start.elapsed()
        })
    };

    assert_eq!(
        builder.join().expect("builder thread panicked"),
        Some("HardcodedText"),
        "the interrupted generation must still produce a consistent result"
    );
    let waited = resetter.join().expect("reset thread panicked");
    assert!(
        waited >= STALL / 2,
        "reset returned after {:?}; it must serialize behind the build",
        waited
    );
    assert_eq!(builds.load(Ordering::SeqCst), 1);

    // The generation built above was discarded by the reset, so the next
    // lookup starts a fresh build.
    assert!(registry.issue("HardcodedText").is_some());
    assert_eq!(
        builds.load(Ordering::SeqCst),
        2,
        "lookup after a mid-build reset must rebuild exactly once"
    );
}

#[test]
fn rebuild_after_reset_is_shared_by_concurrent_readers() {
    let (registry, builds, in_build) = stalling_registry();

    // First generation
    assert!(registry.issue("HardcodedText").is_some());
    assert_eq!(builds.load(Ordering::SeqCst), 1);

    registry.reset();
    in_build.store(false, Ordering::SeqCst);

    // Second generation, built once and shared across both readers
    let builder = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || registry.issue("UnusedResources").map(|i| i.id))
    };
    wait_for_build_start(&in_build);
    let reader = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || registry.issue("UnusedResources").map(|i| i.id))
    };

    assert_eq!(
        builder.join().expect("builder thread panicked"),
        Some("UnusedResources")
    );
    assert_eq!(
        reader.join().expect("reader thread panicked"),
        Some("UnusedResources")
    );
    assert_eq!(builds.load(Ordering::SeqCst), 2);
}

#[test]
fn many_threads_agree_on_one_build() {
    let (registry, builds, _in_build) = stalling_registry();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let registry = Arc::clone(&registry);
        handles.push(thread::spawn(move || {
            registry.issue("ContentDescription").map(|i| i.id)
        }));
    }

    for handle in handles {
        assert_eq!(
            handle.join().expect("thread panicked"),
            Some("ContentDescription")
        );
    }
    assert_eq!(builds.load(Ordering::SeqCst), 1);
}
