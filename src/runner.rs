//! Evaluation driver.
//!
//! Every terminal operation runs exactly one evaluation: the runner opens
//! a tracing span, builds a fresh [`Context`] and hands it down the stage
//! chain. At the head of the chain [`copy_into`] pulls from the source and
//! pushes into the sink chain until the chain reports `done` or the source
//! runs dry.
//!
//! [`drive`] exposes the same pull loop for a bare [`Source`] and [`Sink`],
//! outside of any stream.

use crate::config::EvalOptions;
#[cfg(feature = "metrics")]
use crate::metrics::Metrics;
use crate::sink::Sink;
use crate::source::Source;
use std::cell::Cell;

static DETACHED_OPTIONS: EvalOptions = EvalOptions::new();

/// Per-evaluation state shared by every stage of one terminal call.
pub struct Context<'a> {
    options: &'a EvalOptions,
    #[cfg(feature = "metrics")]
    metrics: Option<&'a Metrics>,
    pulled: Cell<u64>,
}

impl<'a> Context<'a> {
    fn new(options: &'a EvalOptions) -> Self {
        Self {
            options,
            #[cfg(feature = "metrics")]
            metrics: None,
            pulled: Cell::new(0),
        }
    }

    /// A context with default options and no metrics, for driving sinks by hand.
    #[must_use]
    pub fn detached() -> Context<'static> {
        Context::new(&DETACHED_OPTIONS)
    }

    #[must_use]
    pub const fn options(&self) -> &EvalOptions {
        self.options
    }

    /// Elements pulled from sources so far in this evaluation.
    #[must_use]
    pub fn pulled(&self) -> u64 {
        self.pulled.get()
    }

    pub(crate) fn record_pull(&self) {
        self.pulled.set(self.pulled.get() + 1);
        #[cfg(feature = "metrics")]
        if let Some(m) = self.metrics {
            m.record_pull();
        }
    }

    pub(crate) fn record_short_circuit(&self) {
        #[cfg(feature = "metrics")]
        if let Some(m) = self.metrics {
            m.record_short_circuit();
        }
    }

    pub(crate) fn record_sort_flush(&self) {
        #[cfg(feature = "metrics")]
        if let Some(m) = self.metrics {
            m.record_sort_flush();
        }
    }
}

/// Runs one terminal evaluation with a stream's options and metrics.
pub(crate) struct Runner<'a> {
    options: &'a EvalOptions,
    #[cfg(feature = "metrics")]
    metrics: Option<&'a Metrics>,
}

impl<'a> Runner<'a> {
    pub(crate) const fn new(options: &'a EvalOptions) -> Self {
        Self {
            options,
            #[cfg(feature = "metrics")]
            metrics: None,
        }
    }

    #[cfg(feature = "metrics")]
    pub(crate) fn with_metrics(mut self, metrics: Option<&'a Metrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub(crate) fn run<F>(&self, op: &'static str, evaluate: F)
    where
        F: FnOnce(&Context<'_>),
    {
        let span = tracing::debug_span!("evaluate", op, label = ?self.options.label);
        let _guard = span.enter();

        #[allow(unused_mut)]
        let mut ctx = Context::new(self.options);
        #[cfg(feature = "metrics")]
        {
            ctx.metrics = self.metrics;
            if let Some(m) = self.metrics {
                m.record_evaluation();
            }
        }

        evaluate(&ctx);
        tracing::debug!(pulled = ctx.pulled(), "evaluation finished");
    }
}

/// Pull every available element of `source` into `sink`.
///
/// Calls `begin`, then `accept` for each element while the sink is not done,
/// then `end` exactly once. An unbounded source stops only when the sink
/// reports done.
pub fn drive<T>(source: &mut dyn Source<T>, sink: &mut dyn Sink<T>) {
    copy_into(&Context::detached(), source, sink);
}

pub(crate) fn copy_into<T>(ctx: &Context<'_>, source: &mut dyn Source<T>, sink: &mut dyn Sink<T>) {
    sink.begin();
    loop {
        if sink.done() {
            tracing::trace!(pulled = ctx.pulled(), "sink done, stopping pull");
            ctx.record_short_circuit();
            break;
        }
        let Some(item) = source.pull() else {
            break;
        };
        ctx.record_pull();
        sink.accept(item);
    }
    sink.end();
}
