//! End-to-end conversion of a sampled trace into ordered frame events.
//!
//! The conversion:
//! 1. Collects and time-sorts the raw samples
//! 2. Expands each sample across its ancestor frames
//! 3. Collapses per-frame activity into open/close intervals
//! 4. Totally orders the merged event stream

use crate::aggregator::{aggregate_profile_events, ProfileEvent};
use crate::collector::collect_sorted_samples;
use crate::orderer::sort_profile_events;
use crate::source::SampleSource;
use crate::utils::error::ExportError;
use crate::walker::walk_stacks;
use log::{debug, info};
use serde::Serialize;

/// Conversion result, ready for a downstream serializer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertedProfile {
    /// Frame display names; position is the frame id events refer to
    pub frame_names: Vec<String>,

    /// Fully ordered open/close event sequence
    pub events: Vec<ProfileEvent>,
}

/// Convert a sampled trace into the ordered frame-activity event stream
///
/// **Public** - main entry point of the crate
///
/// Each stage fully materializes its output before the next runs; the
/// whole pipeline is single-threaded and synchronous.
///
/// # Arguments
/// * `source` - supplier of raw samples and call-stack lookups
///
/// # Returns
/// The frame registry and the globally ordered event sequence. Zero
/// samples is valid input and yields an empty profile.
///
/// # Errors
/// Conversion is all-or-nothing: a sample with a NaN or negative
/// timestamp or weight, or a cyclic caller relation, aborts the whole
/// export. Broken frames inside a chain are dropped silently instead.
pub fn convert(source: &impl SampleSource) -> Result<ConvertedProfile, ExportError> {
    info!("Converting sampled trace to frame activity events");

    // Step 1: collect and time-sort raw samples
    let sorted_samples = collect_sorted_samples(source)?;

    // Step 2: expand each sample across its ancestor frames
    let expanded = walk_stacks(source, &sorted_samples)?;

    // Step 3: collapse per-frame activity into intervals
    let mut events = aggregate_profile_events(&expanded.samples_per_frame);

    // Step 4: total-order the merged event stream
    sort_profile_events(&mut events);

    debug!(
        "Conversion produced {} frames and {} events",
        expanded.registry.len(),
        events.len()
    );

    Ok(ConvertedProfile {
        frame_names: expanded.registry.into_names(),
        events,
    })
}
