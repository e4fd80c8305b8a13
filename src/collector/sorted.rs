//! Extract raw samples from a source and sort them by time.

use crate::source::{RawSample, SampleSource};
use crate::utils::error::ExportError;
use log::debug;

/// Collect every raw sample and sort ascending by relative timestamp
///
/// **Public** - main entry point for sample collection
///
/// No sample is dropped or deduplicated. The sort is stable, so samples
/// with equal timestamps keep their emission order and output stays
/// deterministic.
///
/// # Errors
/// * `ExportError::InvalidTimestamp` - a sample carries a NaN, infinite,
///   or negative timestamp
/// * `ExportError::InvalidWeight` - a sample carries a NaN, infinite, or
///   negative metric weight
pub fn collect_sorted_samples(
    source: &impl SampleSource,
) -> Result<Vec<RawSample>, ExportError> {
    let mut samples = Vec::new();
    source.for_each_sample(&mut |sample| samples.push(sample));

    // Validate before sorting, so the comparator never sees a NaN and
    // the ordering stays total.
    for sample in &samples {
        if !sample.relative_time.is_finite() || sample.relative_time < 0.0 {
            return Err(ExportError::InvalidTimestamp(sample.relative_time));
        }
        if !sample.weight.is_finite() || sample.weight < 0.0 {
            return Err(ExportError::InvalidWeight(sample.weight));
        }
    }

    samples.sort_by(|a, b| a.relative_time.total_cmp(&b.relative_time));

    debug!("Collected {} samples", samples.len());

    Ok(samples)
}
