//! Total order over profile events.
//!
//! The output format consumes one globally sorted event stream; the
//! comparator below enforces stack discipline on it: at any timestamp
//! prefix, the events seen so far always describe a syntactically valid
//! nested-interval structure.

use crate::aggregator::{ProfileEvent, ProfileEventType};
use std::cmp::Ordering;

/// Compare two profile events for the globally sorted sequence
///
/// **Public** - the comparator is part of the crate surface so callers
/// can merge their own event streams
///
/// Ordering rule, ascending:
/// 1. By relative timestamp
/// 2. At equal timestamp, Open sorts before Close - a frame activating
///    exactly when another deactivates must overlap correctly
/// 3. At equal timestamp and type: Opens shallow-first (parents open
///    before children), Closes deep-first (children close before
///    parents)
pub fn compare_profile_events(a: &ProfileEvent, b: &ProfileEvent) -> Ordering {
    a.relative_time
        .total_cmp(&b.relative_time)
        .then_with(|| type_rank(a.event_type).cmp(&type_rank(b.event_type)))
        .then_with(|| match a.event_type {
            ProfileEventType::Open => a.depth.cmp(&b.depth),
            ProfileEventType::Close => b.depth.cmp(&a.depth),
        })
}

fn type_rank(event_type: ProfileEventType) -> u8 {
    match event_type {
        ProfileEventType::Open => 0,
        ProfileEventType::Close => 1,
    }
}

/// Sort the merged event stream in place.
///
/// A single multi-key comparison in one stable sort pass; sequential
/// re-sorts on individual keys would not compose correctly.
pub fn sort_profile_events(events: &mut [ProfileEvent]) {
    events.sort_by(compare_profile_events);
}
