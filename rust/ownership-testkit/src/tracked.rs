//! `Tracked<T>`: a value that reports its destruction to an `AllocationCounter`.

use std::ops::Deref;

use crate::counter::AllocationCounter;

/// A value instrumented for lifetime accounting.
///
/// Creating a `Tracked` increments the counter's `created` count; dropping it
/// increments `dropped`. A double free of the heap slot holding a `Tracked`
/// shows up as `dropped() > created()`.
pub struct Tracked<T> {
    value: T,
    counter: AllocationCounter,
}

impl<T> Tracked<T> {
    pub fn new(value: T, counter: &AllocationCounter) -> Tracked<T> {
        counter.on_create();
        Tracked {
            value,
            counter: counter.clone(),
        }
    }

    /// Allocates a tracked value on the heap.
    pub fn boxed(value: T, counter: &AllocationCounter) -> Box<Tracked<T>> {
        Box::new(Self::new(value, counter))
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> Deref for Tracked<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.counter.on_drop();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
