//! Memoized resolution outcomes.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::observability::metrics;
use crate::routing::ResolvedAction;

/// Path → outcome map, valid for one registry generation.
///
/// Every registry swap starts a new generation. Entries carry the generation
/// read before their registry was loaded, and only entries of the current
/// generation are served. Stops growing at `max_entries` so arbitrary 404
/// paths cannot exhaust memory.
#[derive(Debug)]
pub struct ResolutionCache {
    enabled: bool,
    max_entries: usize,
    generation: AtomicU64,
    entries: DashMap<String, (u64, Option<ResolvedAction>)>,
}

impl ResolutionCache {
    pub fn new(enabled: bool, max_entries: usize) -> Self {
        Self {
            enabled,
            max_entries,
            generation: AtomicU64::new(0),
            entries: DashMap::new(),
        }
    }

    /// Current generation. Read it before loading the registry an outcome
    /// will be computed against.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// `Some(outcome)` on a hit; the outcome itself may be "not found".
    pub fn get(&self, path: &str) -> Option<Option<ResolvedAction>> {
        if !self.enabled {
            return None;
        }
        let current = self.generation();
        self.entries
            .get(path)
            .filter(|entry| entry.value().0 == current)
            .map(|entry| entry.value().1.clone())
    }

    /// Store an outcome computed during `generation`. Outcomes from an
    /// earlier generation are dropped.
    pub fn insert(&self, path: &str, generation: u64, outcome: Option<ResolvedAction>) {
        if !self.enabled || generation != self.generation() {
            return;
        }
        if self.entries.len() >= self.max_entries && !self.entries.contains_key(path) {
            return;
        }
        self.entries.insert(path.to_string(), (generation, outcome));
        metrics::record_cache_size(self.entries.len());
    }

    /// Start a new generation and drop every entry.
    pub fn clear(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.entries.clear();
        metrics::record_cache_size(0);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
