//! Evaluation metrics.
//!
//! A [`Metrics`] handle collects counters across every evaluation of the
//! streams it is attached to. Handles are cheap to clone and all clones share
//! the same counters, so one handle can be attached to a stream and kept by
//! the caller for reading.
//!
//! # Example
//!
//! ```
//! use ironstream::*;
//! use ironstream::metrics::Metrics;
//!
//! let metrics = Metrics::new();
//! let n = generate(|| 7).limit(3).with_metrics(&metrics).count();
//! assert_eq!(n, 3);
//!
//! let snap = metrics.snapshot();
//! assert_eq!(snap.evaluations, 1);
//! assert_eq!(snap.elements_pulled, 3);
//! assert_eq!(snap.short_circuits, 1);
//! println!("{}", metrics.to_json());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Shared, single-threaded evaluation counters.
#[derive(Clone, Default)]
pub struct Metrics {
    inner: Rc<MetricsInner>,
}

#[derive(Default)]
struct MetricsInner {
    evaluations: Cell<u64>,
    elements_pulled: Cell<u64>,
    short_circuits: Cell<u64>,
    sort_flushes: Cell<u64>,
}

/// Point-in-time copy of a [`Metrics`] handle's counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Terminal operations run.
    pub evaluations: u64,
    /// Elements pulled from sources, including flat-map sub-streams.
    pub elements_pulled: u64,
    /// Pull loops stopped because the sink chain reported done.
    pub short_circuits: u64,
    /// Sort barriers that sorted and replayed their buffer.
    pub sort_flushes: u64,
}

fn bump(c: &Cell<u64>) {
    c.set(c.get() + 1);
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        let m = &self.inner;
        MetricsSnapshot {
            evaluations: m.evaluations.get(),
            elements_pulled: m.elements_pulled.get(),
            short_circuits: m.short_circuits.get(),
            sort_flushes: m.sort_flushes.get(),
        }
    }

    /// Counters as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let s = self.snapshot();
        json!({
            "evaluations": s.evaluations,
            "elements_pulled": s.elements_pulled,
            "short_circuits": s.short_circuits,
            "sort_flushes": s.sort_flushes,
        })
    }

    /// Zero every counter.
    pub fn reset(&self) {
        let m = &self.inner;
        m.evaluations.set(0);
        m.elements_pulled.set(0);
        m.short_circuits.set(0);
        m.sort_flushes.set(0);
    }

    pub(crate) fn record_evaluation(&self) {
        bump(&self.inner.evaluations);
    }

    pub(crate) fn record_pull(&self) {
        bump(&self.inner.elements_pulled);
    }

    pub(crate) fn record_short_circuit(&self) {
        bump(&self.inner.short_circuits);
    }

    pub(crate) fn record_sort_flush(&self) {
        bump(&self.inner.sort_flushes);
    }
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Metrics").field(&self.snapshot()).finish()
    }
}

impl fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "evaluations={} pulled={} short_circuits={} sort_flushes={}",
            self.evaluations, self.elements_pulled, self.short_circuits, self.sort_flushes
        )
    }
}
