//! Minimal metrics registry for the server.
//!
//! Counter and histogram families with dynamic labels backed by `DashMap`.
//! Label sets are sorted by name on insertion so rendering is deterministic.
//! Histogram buckets are fixed in microseconds to avoid floating point math.

use std::fmt::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashmap::DashMap;

/// Sorted `name=value` pairs identifying one series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct LabelSet(Vec<(String, String)>);

impl LabelSet {
    fn new(labels: &[(&str, &str)]) -> Self {
        let mut pairs: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        pairs.sort();
        Self(pairs)
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Prometheus label syntax without the surrounding braces.
impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write!(f, "{k}=\"")?;
            for c in v.chars() {
                match c {
                    '\\' => f.write_str("\\\\")?,
                    '"' => f.write_str("\\\"")?,
                    '\n' => f.write_str("\\n")?,
                    _ => f.write_char(c)?,
                }
            }
            f.write_char('"')?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct CounterVec {
    series: DashMap<LabelSet, AtomicU64>,
}

impl CounterVec {
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.series
            .entry(LabelSet::new(labels))
            .or_default()
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.series
            .get(&LabelSet::new(labels))
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        let mut rows: Vec<(LabelSet, u64)> = self
            .series
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        rows.sort();
        for (labels, value) in rows {
            let _ = writeln!(out, "{name}{{{labels}}} {value}");
        }
    }
}

/// Upper bounds in microseconds: 100us up to 10s (the delay endpoint's ceiling).
const BUCKETS_MICROS: [u64; 10] = [
    100, 500, 1_000, 5_000, 10_000, 50_000, 100_000, 500_000, 1_000_000, 10_000_000,
];

#[derive(Default)]
struct Histogram {
    count: AtomicU64,
    sum_micros: AtomicU64,
    buckets: [AtomicU64; BUCKETS_MICROS.len()],
}

#[derive(Default)]
pub struct HistogramVec {
    series: DashMap<LabelSet, Histogram>,
}

impl HistogramVec {
    /// Record one duration into every cumulative bucket it fits.
    pub fn observe(&self, labels: &[(&str, &str)], duration: Duration) {
        let hist = self.series.entry(LabelSet::new(labels)).or_default();
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);

        hist.count.fetch_add(1, Ordering::Relaxed);
        hist.sum_micros.fetch_add(micros, Ordering::Relaxed);
        for (bucket, _) in hist
            .buckets
            .iter()
            .zip(BUCKETS_MICROS)
            .filter(|(_, le)| micros <= *le)
        {
            bucket.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn count(&self, labels: &[(&str, &str)]) -> u64 {
        self.series
            .get(&LabelSet::new(labels))
            .map_or(0, |h| h.count.load(Ordering::Relaxed))
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} histogram");
        for r in self.series.iter() {
            let (labels, hist) = (r.key(), r.value());
            let sep = if labels.is_empty() { "" } else { "," };

            for (bucket, le) in hist.buckets.iter().zip(BUCKETS_MICROS) {
                let n = bucket.load(Ordering::Relaxed);
                let _ = writeln!(out, "{name}_bucket{{{labels}{sep}le=\"{le}\"}} {n}");
            }
            let count = hist.count.load(Ordering::Relaxed);
            let sum = hist.sum_micros.load(Ordering::Relaxed);
            let _ = writeln!(out, "{name}_bucket{{{labels}{sep}le=\"+Inf\"}} {count}");
            let _ = writeln!(out, "{name}_sum{{{labels}}} {sum}");
            let _ = writeln!(out, "{name}_count{{{labels}}} {count}");
        }
    }
}

/// Families observed by the request pipeline.
#[derive(Default)]
pub struct ServerMetrics {
    /// By method and status code.
    pub responses: CounterVec,
    /// By method, in microseconds.
    pub request_duration: HistogramVec,
}

impl ServerMetrics {
    /// Prometheus text exposition, followed by caller-provided gauges.
    pub fn render(&self, gauges: &[(&str, u64)]) -> String {
        let mut out = String::new();
        self.responses.render("httpexplorer_responses_total", &mut out);
        self.request_duration
            .render("httpexplorer_request_duration_micros", &mut out);
        for (name, value) in gauges {
            let _ = writeln!(out, "# TYPE {name} gauge");
            let _ = writeln!(out, "{name} {value}");
        }
        out
    }
}
