//! Expand leaf samples across their ancestor frames.

use super::registry::FrameRegistry;
use crate::source::{CallStackIndex, RawSample, SampleSource};
use crate::utils::config::MAX_STACK_DEPTH;
use crate::utils::error::ExportError;
use log::debug;

/// One ancestor-frame occurrence of a leaf sample.
///
/// The owning frame id is the index into
/// [`ExpandedStacks::samples_per_frame`], so it is not repeated here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandedSample {
    /// Timestamp of the originating leaf sample
    pub relative_time: f64,

    /// Metric weight of the originating leaf sample
    pub weight: f64,

    /// 0-based distance from the call-tree root, counting only
    /// resolvable frames
    pub depth: usize,
}

/// Stack walker output.
#[derive(Debug, Default)]
pub struct ExpandedStacks {
    /// Frame names in first-seen order
    pub registry: FrameRegistry,

    /// Per frame id, the chronological list of samples touching that
    /// frame. Indexes are aligned with the registry.
    pub samples_per_frame: Vec<Vec<ExpandedSample>>,
}

/// Walk every sample's call-stack chain and expand it per ancestor frame
///
/// **Public** - main entry point for stack walking
///
/// # Arguments
/// * `source` - lookup capabilities (caller-of, frame-of, name-of)
/// * `sorted_samples` - raw samples already sorted by timestamp
///
/// # Returns
/// The frame registry plus per-frame chronological sample lists. Input
/// order is preserved, so the per-frame lists come out time-ordered
/// without a later sort.
///
/// # Algorithm
/// 1. Walk upward via the caller relation, collecting the chain until
///    the root is reached
/// 2. Reverse to root-to-leaf order and assign depths starting at 0
/// 3. Skip broken/invalid frames entirely: no registry id, no expanded
///    sample, and no depth slot consumed
///
/// # Errors
/// * `ExportError::CallerCycle` - the caller chain exceeds
///   `MAX_STACK_DEPTH` entries, which only happens when the source's
///   caller relation is cyclic
pub fn walk_stacks(
    source: &impl SampleSource,
    sorted_samples: &[RawSample],
) -> Result<ExpandedStacks, ExportError> {
    let mut registry = FrameRegistry::new();
    let mut samples_per_frame: Vec<Vec<ExpandedSample>> = Vec::new();

    // Chain buffer reused across samples
    let mut chain: Vec<CallStackIndex> = Vec::new();

    for sample in sorted_samples {
        chain.clear();
        let mut stack = sample.stack;
        while stack.is_valid() {
            chain.push(stack);
            if chain.len() > MAX_STACK_DEPTH {
                return Err(ExportError::CallerCycle {
                    stack: sample.stack,
                    limit: MAX_STACK_DEPTH,
                });
            }
            stack = source.caller_of(stack);
        }

        // Chain was collected leaf-first; process root-to-leaf.
        let mut depth = 0;
        for &entry in chain.iter().rev() {
            let frame = source.frame_of(entry);
            if frame.is_sentinel() {
                // Data-quality condition, not a failure: drop the frame
                // and leave the depth counter untouched so valid
                // ancestors keep meaningful depths.
                debug!("Skipping unresolved frame at stack entry {:?}", entry);
                continue;
            }

            let frame_id = registry.intern(source.frame_name(frame));
            if frame_id == samples_per_frame.len() {
                samples_per_frame.push(Vec::new());
            }
            samples_per_frame[frame_id].push(ExpandedSample {
                relative_time: sample.relative_time,
                weight: sample.weight,
                depth,
            });
            depth += 1;
        }
    }

    debug!(
        "Expanded {} samples across {} distinct frames",
        sorted_samples.len(),
        registry.len()
    );

    Ok(ExpandedStacks {
        registry,
        samples_per_frame,
    })
}
