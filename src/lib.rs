//! Speedscope Export
//!
//! Converts a call-stack sampling trace into the time-ordered sequence
//! of open/close frame-activity events used by SpeedScope's evented
//! profiles.
//!
//! The pipeline runs in four stages: sort raw samples by time, expand
//! each sample's call-stack chain into per-depth frame entries, collapse
//! consecutive same-frame activity into minimal intervals, and totally
//! order the merged event stream.
//!
//! Trace capture, symbol resolution, and file output are collaborator
//! concerns: input arrives through the [`SampleSource`] trait and the
//! result is a [`ConvertedProfile`] ready for a downstream serializer.
//!
//! ```
//! use speedscope_export::{convert, CallStackIndex, FrameIndex, RawSample, SampleSource};
//!
//! struct SingleTick;
//!
//! impl SampleSource for SingleTick {
//!     fn for_each_sample(&self, callback: &mut dyn FnMut(RawSample)) {
//!         callback(RawSample::new(CallStackIndex(0), 0.1, 0.1));
//!     }
//!     fn caller_of(&self, _stack: CallStackIndex) -> CallStackIndex {
//!         CallStackIndex::INVALID
//!     }
//!     fn frame_of(&self, _stack: CallStackIndex) -> FrameIndex {
//!         FrameIndex(0)
//!     }
//!     fn frame_name(&self, _frame: FrameIndex) -> String {
//!         "main".to_string()
//!     }
//! }
//!
//! let profile = convert(&SingleTick).unwrap();
//! assert_eq!(profile.frame_names, vec!["main"]);
//! assert_eq!(profile.events.len(), 2);
//! ```

pub mod aggregator;
pub mod collector;
pub mod exporter;
pub mod orderer;
pub mod source;
pub mod utils;
pub mod walker;

// Re-export the crate surface
pub use aggregator::{aggregate_profile_events, ProfileEvent, ProfileEventType};
pub use collector::collect_sorted_samples;
pub use exporter::{convert, ConvertedProfile};
pub use orderer::{compare_profile_events, sort_profile_events};
pub use source::{CallStackIndex, FrameIndex, RawSample, SampleSource};
pub use utils::error::ExportError;
pub use walker::{walk_stacks, ExpandedSample, ExpandedStacks, FrameRegistry};
