//! An exclusive, single-value heap owner with an observable lifecycle.
//!
//! [`OwnershipCell<T>`] owns at most one heap-allocated `T` and releases it
//! exactly once: on [`free`](OwnershipCell::free), on reassignment, or when
//! the cell goes out of scope. Ownership can be moved between cells or handed
//! out to the caller with [`release`](OwnershipCell::release). The current
//! [`CellState`] tells whether the cell holds a value, never held one (or had
//! it moved away), or had it explicitly discarded.
//!
//! ```
//! use ownership_cell::{CellState, OwnershipCell};
//!
//! let mut first = OwnershipCell::new(42);
//! assert_eq!(*first, 42);
//!
//! let mut second = first.take();
//! assert_eq!(first.state(), CellState::Empty);
//! assert_eq!(*second, 42);
//!
//! second.free();
//! assert_eq!(second.state(), CellState::Released);
//! assert!(!second.is_valid());
//! ```

pub mod cell;
pub mod state;


pub use cell::OwnershipCell;
pub use state::CellState;
