//! Request counters exposed by `/statistiche`.
//!
//! Atomics keep individual increments exact; nothing orders a counter update
//! against the handler that follows it.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use serde::Serialize;

/// Verbs with a dedicated counter. Other methods only bump the total.
pub const TRACKED_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "PATCH"];

pub struct RequestCounters {
    total_visits: AtomicU64,
    per_method: DashMap<&'static str, AtomicU64>,
}

impl Default for RequestCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestCounters {
    pub fn new() -> Self {
        let per_method = DashMap::new();
        for m in TRACKED_METHODS {
            per_method.insert(m, AtomicU64::new(0));
        }
        Self { total_visits: AtomicU64::new(0), per_method }
    }

    /// Count one attempted request.
    pub fn record(&self, method: &str) {
        self.total_visits.fetch_add(1, Ordering::Relaxed);
        if let Some(c) = self.per_method.get(method) {
            c.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn total(&self) -> u64 {
        self.total_visits.load(Ordering::Relaxed)
    }

    pub fn for_method(&self, method: &str) -> u64 {
        self.per_method
            .get(method)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn snapshot(&self) -> CountersSnapshot {
        CountersSnapshot {
            visite_totali: self.total(),
            richieste_per_metodo: self
                .per_method
                .iter()
                .map(|e| (*e.key(), e.value().load(Ordering::Relaxed)))
                .collect(),
        }
    }
}

/// Serializable view of [`RequestCounters`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountersSnapshot {
    pub visite_totali: u64,
    pub richieste_per_metodo: BTreeMap<&'static str, u64>,
}
