//! Aggregation of per-frame samples into activity intervals.
//!
//! This module collapses each frame's chronological sample list into the
//! minimal set of open/close events describing continuous activity.

pub mod intervals;

// Re-export main types and functions
pub use intervals::{aggregate_profile_events, ProfileEvent, ProfileEventType};
