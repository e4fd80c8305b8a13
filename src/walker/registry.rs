//! First-seen frame name registry.
//!
//! Frame ids are densely assigned integers in registration order, so the
//! ordered name list can be emitted as-is with position = id. Backed by
//! an insertion-order-preserving set rather than a plain hash map, which
//! keeps id assignment independent of hashing or iteration order.

use indexmap::IndexSet;

/// Mapping from frame name to a densely assigned integer id.
///
/// Broken or invalid frames never enter the registry; the walker skips
/// them before interning.
#[derive(Debug, Default)]
pub struct FrameRegistry {
    names: IndexSet<String>,
}

impl FrameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for the given name, interning it on first sight.
    ///
    /// A new name receives the registry size at time of insertion, so ids
    /// are sequential in first-seen order.
    pub fn intern(&mut self, name: String) -> usize {
        self.names.insert_full(name).0
    }

    /// Id previously assigned to the name, if any.
    pub fn id_of(&self, name: &str) -> Option<usize> {
        self.names.get_index_of(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Consume the registry into the ordered name list (position = id).
    pub fn into_names(self) -> Vec<String> {
        self.names.into_iter().collect()
    }
}
