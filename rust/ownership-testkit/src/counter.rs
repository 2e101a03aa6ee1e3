//! `AllocationCounter`: records creation and destruction of instrumented values.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

#[derive(Default)]
struct Counts {
    created: AtomicUsize,
    dropped: AtomicUsize,
}

/// A shared counter of instrumented value lifetimes.
///
/// Cloning the counter yields another handle to the same counts, so a test can
/// keep one handle while values carry the others.
#[derive(Clone, Default)]
pub struct AllocationCounter(Arc<Counts>);

impl AllocationCounter {
    pub fn new() -> AllocationCounter {
        Self::default()
    }

    /// Number of values created through this counter.
    pub fn created(&self) -> usize {
        self.0.created.load(Ordering::Relaxed)
    }

    /// Number of values destroyed. A value is counted at most once.
    pub fn dropped(&self) -> usize {
        self.0.dropped.load(Ordering::Relaxed)
    }

    /// Number of values that are still alive. Zero when more values were
    /// dropped than created.
    pub fn live(&self) -> usize {
        self.created().saturating_sub(self.dropped())
    }

    pub(crate) fn on_create(&self) {
        self.0.created.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn on_drop(&self) {
        self.0.dropped.fetch_add(1, Ordering::Relaxed);
    }
}

impl std::fmt::Debug for AllocationCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllocationCounter")
            .field("created", &self.created())
            .field("dropped", &self.dropped())
            .finish()
    }
}
