//! Once-only reveal bookkeeping for elements tagged `.reveal`.

use std::collections::HashSet;

/// Fraction of an element that must be inside the viewport to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Keys to observe for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealBatch {
    pub generation: u64,
    pub keys: Vec<String>,
}

impl RevealBatch {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    generation: u64,
    observed: HashSet<String>,
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the keys of a new render pass. Keys already observed or
    /// revealed are dropped. A newer generation forgets everything about the
    /// previous one, whose elements no longer exist.
    pub fn begin_pass<I>(&mut self, generation: u64, keys: I) -> RevealBatch
    where
        I: IntoIterator<Item = String>,
    {
        if generation != self.generation {
            self.generation = generation;
            self.observed.clear();
            self.revealed.clear();
        }
        let keys = keys
            .into_iter()
            .filter(|key| !self.revealed.contains(key))
            .filter(|key| self.observed.insert(key.clone()))
            .collect();
        RevealBatch { generation, keys }
    }

    /// Report an intersection. Returns `true` when this reveals the element;
    /// the key is untracked from then on.
    pub fn intersect(&mut self, key: &str, ratio: f64) -> bool {
        if ratio < REVEAL_THRESHOLD || !self.observed.remove(key) {
            return false;
        }
        self.revealed.insert(key.to_string());
        true
    }
}

#[cfg(test)]
impl RevealTracker {
    pub fn is_observed(&self, key: &str) -> bool {
        self.observed.contains(key)
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn pending(&self) -> usize {
        self.observed.len()
    }
}
