//! Shared in-memory sample source for integration tests.
//!
//! Mirrors the lookup surface of a real profiler: a flat table of
//! call-tree entries plus the samples the source emits.

use speedscope_export::{CallStackIndex, FrameIndex, RawSample, SampleSource};

struct FakeStackEntry {
    stack: CallStackIndex,
    caller: CallStackIndex,
    frame: FrameIndex,
    name: String,
}

#[derive(Default)]
pub struct FakeSampleSource {
    entries: Vec<FakeStackEntry>,
    samples: Vec<RawSample>,
}

impl FakeSampleSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a call-tree entry: stack id, caller id (-1 for root),
    /// frame id (-1 invalid, -2 broken), display name.
    pub fn entry(&mut self, stack: i64, caller: i64, frame: i64, name: &str) -> &mut Self {
        self.entries.push(FakeStackEntry {
            stack: CallStackIndex(stack),
            caller: CallStackIndex(caller),
            frame: FrameIndex(frame),
            name: name.to_string(),
        });
        self
    }

    /// Record a sample observed at the given leaf stack.
    pub fn sample(&mut self, stack: i64, relative_time: f64, weight: f64) -> &mut Self {
        self.samples
            .push(RawSample::new(CallStackIndex(stack), relative_time, weight));
        self
    }
}

impl SampleSource for FakeSampleSource {
    fn for_each_sample(&self, callback: &mut dyn FnMut(RawSample)) {
        for &sample in &self.samples {
            callback(sample);
        }
    }

    fn caller_of(&self, stack: CallStackIndex) -> CallStackIndex {
        self.entries
            .iter()
            .find(|entry| entry.stack == stack)
            .map(|entry| entry.caller)
            .unwrap_or(CallStackIndex::INVALID)
    }

    fn frame_of(&self, stack: CallStackIndex) -> FrameIndex {
        self.entries
            .iter()
            .find(|entry| entry.stack == stack)
            .map(|entry| entry.frame)
            .unwrap_or(FrameIndex::INVALID)
    }

    fn frame_name(&self, frame: FrameIndex) -> String {
        self.entries
            .iter()
            .find(|entry| entry.frame == frame)
            .map(|entry| entry.name.clone())
            .unwrap_or_default()
    }
}
