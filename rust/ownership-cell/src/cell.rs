//! `OwnershipCell`: an exclusive owner of a single heap allocation.

use std::{
    any::type_name,
    fmt,
    ops::{Deref, DerefMut},
    ptr,
};

use ownership_common::{
    Error, Result,
    result::{invalid_access, verify_access},
};

use crate::state::CellState;

/// An exclusive owner of at most one heap-allocated `T`.
///
/// The cell tracks a [`CellState`] next to the allocation:
/// - `Valid` iff the cell owns a live allocation.
/// - `Empty` iff the cell never held a value, or the value was moved away
///   (see [`take`](Self::take) and [`move_from`](Self::move_from)).
/// - `Released` iff the value was destroyed by [`free`](Self::free) or handed
///   out by [`release`](Self::release).
///
/// The owned allocation is deallocated exactly once: on `free`, when the cell
/// is overwritten, or when the cell is dropped. Dropping an `Empty` or
/// `Released` cell deallocates nothing.
///
/// Cells cannot be copied:
///
/// ```compile_fail
/// use ownership_cell::OwnershipCell;
///
/// fn duplicate<T: Clone>(value: &T) -> T {
///     value.clone()
/// }
///
/// let a = OwnershipCell::new(1);
/// let b = duplicate(&a);
/// ```
pub struct OwnershipCell<T> {
    raw: Option<Box<T>>,
    state: CellState,
}

impl<T> OwnershipCell<T> {
    /// Creates an `Empty` cell that owns nothing.
    pub const fn new_empty() -> OwnershipCell<T> {
        OwnershipCell {
            raw: None,
            state: CellState::Empty,
        }
    }

    /// Allocates `value` on the heap and takes ownership of it.
    pub fn new(value: T) -> OwnershipCell<T> {
        Self::from_box(Box::new(value))
    }

    /// Takes ownership of an existing heap allocation.
    pub fn from_box(value: Box<T>) -> OwnershipCell<T> {
        OwnershipCell {
            raw: Some(value),
            state: CellState::Valid,
        }
    }

    /// Takes ownership of a raw heap pointer.
    ///
    /// A null `ptr` produces an `Empty` cell.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must come from [`Box::into_raw`] (or
    /// [`release_raw`](Self::release_raw)) for a `T`, and the caller must
    /// neither use nor free it afterwards.
    pub unsafe fn from_raw(ptr: *mut T) -> OwnershipCell<T> {
        if ptr.is_null() {
            Self::new_empty()
        } else {
            // SAFETY: the caller guarantees `ptr` is an unaliased `Box<T>` allocation.
            Self::from_box(unsafe { Box::from_raw(ptr) })
        }
    }

    /// Returns the current lifecycle state.
    #[inline]
    pub fn state(&self) -> CellState {
        debug_assert_eq!(self.raw.is_some(), self.state == CellState::Valid);
        self.state
    }

    /// Returns true if the cell currently owns an allocation.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.raw.is_some()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state == CellState::Empty
    }

    #[inline]
    pub fn is_released(&self) -> bool {
        self.state == CellState::Released
    }

    /// Fails with an `InvalidAccess` error unless the cell is `Valid`.
    pub fn ensure_valid(&self, operation: &str) -> Result<()> {
        verify_access(self.is_valid(), operation, &self.state)
    }

    /// Moves the allocation and state out into a new cell, leaving this one
    /// `Empty`. Nothing is allocated or deallocated.
    pub fn take(&mut self) -> OwnershipCell<T> {
        std::mem::replace(self, Self::new_empty())
    }

    /// Deallocates the current allocation (if any), then adopts the
    /// allocation and state of `source`, leaving `source` `Empty`.
    pub fn move_from(&mut self, source: &mut OwnershipCell<T>) {
        *self = source.take();
    }

    /// Exchanges allocations and states with `other`.
    pub fn swap(&mut self, other: &mut OwnershipCell<T>) {
        std::mem::swap(self, other);
    }

    /// Deallocates the owned value, if any, and marks the cell `Released`.
    ///
    /// Calling `free` again is a no-op.
    pub fn free(&mut self) {
        if let Some(value) = self.raw.take() {
            log::trace!("free: deallocating {}", type_name::<T>());
            drop(value);
        }
        self.state = CellState::Released;
    }

    /// Hands the owned allocation to the caller without deallocating it and
    /// marks the cell `Released`.
    ///
    /// Returns `None` if the cell did not own anything.
    #[must_use = "dropping the released allocation deallocates it"]
    pub fn release(&mut self) -> Option<Box<T>> {
        let raw = self.raw.take();
        if raw.is_some() {
            log::trace!("release: handing out {}", type_name::<T>());
        }
        self.state = CellState::Released;
        raw
    }

    /// Same as [`release`](Self::release), but returns a raw pointer (null if
    /// nothing was owned).
    ///
    /// The caller is responsible for deallocating the returned pointer, e.g.
    /// by passing it to [`from_raw`](Self::from_raw). Otherwise it leaks.
    #[must_use = "the released pointer leaks unless it is reclaimed"]
    pub fn release_raw(&mut self) -> *mut T {
        self.release().map_or(ptr::null_mut(), Box::into_raw)
    }

    /// Deallocates the current allocation (if any) and takes ownership of `value`.
    pub fn reset(&mut self, value: Box<T>) {
        *self = Self::from_box(value);
    }

    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.raw.as_deref()
    }

    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.raw.as_deref_mut()
    }

    /// Returns the owned value, or an `InvalidAccess` error naming the
    /// current state.
    pub fn try_get(&self) -> Result<&T> {
        match self.raw.as_deref() {
            Some(value) => Ok(value),
            None => invalid_access("try_get", &self.state),
        }
    }

    pub fn try_get_mut(&mut self) -> Result<&mut T> {
        match self.raw.as_deref_mut() {
            Some(value) => Ok(value),
            None => invalid_access("try_get_mut", &self.state),
        }
    }

    /// Returns the owned value without checking the state.
    ///
    /// # Safety
    ///
    /// The cell must be `Valid`.
    #[inline]
    pub unsafe fn get_unchecked(&self) -> &T {
        // SAFETY: the caller guarantees the cell owns an allocation.
        unsafe { self.raw.as_deref().unwrap_unchecked() }
    }

    /// Returns a pointer to the owned value, or null if the cell is not `Valid`.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.raw.as_deref().map_or(ptr::null(), |value| value as *const T)
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw
            .as_deref_mut()
            .map_or(ptr::null_mut(), |value| value as *mut T)
    }

    /// Consumes the cell, returning the owned allocation.
    pub fn into_box(mut self) -> Option<Box<T>> {
        self.raw.take()
    }

    /// Consumes the cell, returning the owned value.
    pub fn into_inner(self) -> Option<T> {
        self.into_box().map(|value| *value)
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn access_violation(operation: &str, state: CellState) -> ! {
    panic!("{}", Error::invalid_access(operation, state))
}

impl<T> Deref for OwnershipCell<T> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if the cell is not `Valid`.
    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        match self.raw.as_deref() {
            Some(value) => value,
            None => access_violation("deref", self.state),
        }
    }
}

impl<T> DerefMut for OwnershipCell<T> {
    /// # Panics
    ///
    /// Panics if the cell is not `Valid`.
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        let state = self.state;
        match self.raw.as_deref_mut() {
            Some(value) => value,
            None => access_violation("deref_mut", state),
        }
    }
}

impl<T> Drop for OwnershipCell<T> {
    fn drop(&mut self) {
        if self.raw.is_some() {
            log::trace!("drop: deallocating {}", type_name::<T>());
        }
    }
}

impl<T> Default for OwnershipCell<T> {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl<T> From<Box<T>> for OwnershipCell<T> {
    fn from(value: Box<T>) -> Self {
        Self::from_box(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for OwnershipCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("OwnershipCell");
        s.field("state", &self.state);
        if let Some(value) = self.raw.as_deref() {
            s.field("value", value);
        }
        s.finish()
    }
}
