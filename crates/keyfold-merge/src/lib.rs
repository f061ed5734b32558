//! Merge engine for Keyfold.
//!
//! Implements the keyed-sum merge: two sparse vectors are folded into a
//! key → running-sum map, and the distinct keys are emitted in ascending
//! order, each exactly once.
//!
//! # Key Types
//!
//! - [`merge`] -- Fold two vectors into one normalized vector
//! - [`merge_report`] / [`MergeReport`] -- Merge plus fold counters

pub mod merge;
pub mod report;

pub use merge::merge;
pub use report::{merge_report, MergeReport};
