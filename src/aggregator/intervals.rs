//! Collapse per-frame sample runs into open/close interval events.
//!
//! The metric weight approximates the expected spacing between
//! consecutive samples of the same frame: a gap at or below the previous
//! sample's weight means "no observable pause", a larger gap is a real
//! absence of activity and splits the run in two.

use crate::walker::ExpandedSample;
use log::debug;
use serde::Serialize;

/// Boundary marker kind of a frame-activity interval.
///
/// Serialized as `"O"` / `"C"`, the values the SpeedScope interchange
/// format uses for evented profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfileEventType {
    #[serde(rename = "O")]
    Open,
    #[serde(rename = "C")]
    Close,
}

/// One boundary of a frame's activity interval.
///
/// A well-formed stream of these nests like a balanced stack per frame
/// id and depth pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileEvent {
    #[serde(rename = "type")]
    pub event_type: ProfileEventType,

    /// Registry id of the frame this interval belongs to
    #[serde(rename = "frame")]
    pub frame_id: usize,

    /// Depth of the frame occurrence within its stack
    pub depth: usize,

    /// Timestamp of the boundary
    #[serde(rename = "at")]
    pub relative_time: f64,
}

/// Collapse each frame's chronological sample list into interval events
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `samples_per_frame` - per frame id, the time-ordered expanded
///   samples touching that frame
///
/// # Returns
/// Unordered union of open/close events across all frames. Callers must
/// run the event orderer before handing the stream to a serializer.
///
/// # Algorithm
/// Scans each list left to right maintaining the current run. A sample
/// continues the run when its gap from the previous sample is at most
/// the previous sample's weight and its depth matches the run's depth;
/// otherwise the run closes and a new one opens at the sample.
pub fn aggregate_profile_events(samples_per_frame: &[Vec<ExpandedSample>]) -> Vec<ProfileEvent> {
    let mut events = Vec::new();

    for (frame_id, samples) in samples_per_frame.iter().enumerate() {
        let Some(&first) = samples.first() else {
            continue;
        };

        let mut open = first;
        let mut previous = first;
        let mut run_len = 1;

        for &current in &samples[1..] {
            let gap = current.relative_time - previous.relative_time;
            if gap > previous.weight || current.depth != open.depth {
                push_interval(&mut events, frame_id, open, previous, run_len);
                open = current;
                run_len = 0;
            }
            previous = current;
            run_len += 1;
        }

        push_interval(&mut events, frame_id, open, previous, run_len);
    }

    debug!("Aggregated samples into {} interval events", events.len());

    events
}

/// Emit the open/close pair for a finished run.
///
/// A run of a single sample would be a zero-width interval; it closes at
/// half the sample's weight past its timestamp instead, giving it a
/// minimally visible width without overstating one observation.
fn push_interval(
    events: &mut Vec<ProfileEvent>,
    frame_id: usize,
    open: ExpandedSample,
    close: ExpandedSample,
    run_len: usize,
) {
    events.push(ProfileEvent {
        event_type: ProfileEventType::Open,
        frame_id,
        depth: open.depth,
        relative_time: open.relative_time,
    });

    let close_time = if run_len == 1 {
        close.relative_time + close.weight / 2.0
    } else {
        close.relative_time
    };

    events.push(ProfileEvent {
        event_type: ProfileEventType::Close,
        frame_id,
        depth: open.depth,
        relative_time: close_time,
    });
}
