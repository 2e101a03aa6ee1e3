//! Command implementations for ownership-cmd

pub mod demo;
pub mod lifecycle;
