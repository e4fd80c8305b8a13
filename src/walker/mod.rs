//! Stack walking and frame registration.
//!
//! This module expands each time-sorted leaf sample into one entry per
//! resolvable ancestor frame:
//! - Walks the caller chain from leaf to root (with a cycle guard)
//! - Interns frame names into a dense, first-seen-ordered registry
//! - Assigns a 0-based depth to every valid frame occurrence

pub mod expand;
pub mod registry;

// Re-export main types
pub use expand::{walk_stacks, ExpandedSample, ExpandedStacks};
pub use registry::FrameRegistry;
