//! Test utilities and helpers for the ownership crates.
//!
//! This crate provides:
//! - An allocation counter that records how many instrumented values were
//!   created and destroyed
//! - `Tracked<T>`, a value wrapper that reports its own destruction to a counter
//! - Data generation for randomized tests
//!
//! # Usage
//!
//! This crate is intended for use as a dev-dependency within the workspace.

pub mod counter;
pub mod data_gen;
pub mod tracked;

pub use counter::AllocationCounter;
pub use tracked::Tracked;
