//! Sequence and scheduling helpers for Ripple
//!
//! This crate provides:
//! - Positional predicate filtering over slices
//! - First-seen-ordered grouping into an `IndexMap`
//! - Trailing-edge call debouncing over a pluggable timer service

pub mod debounce;
pub mod filter;
pub mod group;

// Re-exports
pub use debounce::{debounce, Debouncer, Timer, TimerCallback, TokioTimer};
pub use filter::filter_array;
pub use group::{group_by, GroupKey};

/// Order-preserving map used for grouping results.
pub use indexmap::IndexMap;
