//! The [`Stream`] stage type and its intermediate operations.
//!
//! A `Stream<T>` is an immutable description of how to push elements of type
//! `T` into a sink. Each intermediate operation returns a new stream whose
//! driver wraps the incoming sink in one more adapter and delegates to the
//! previous stage; the previous stage is never modified. Nothing runs until a
//! terminal operation (see [`terminal`](crate::terminal)) supplies a sink.
//!
//! ```
//! use ironstream::*;
//!
//! let words = from_values(["a", "bb", "ccc", "dddd", "eeeee"]);
//! let long = words.filter(|w| w.len() > 2).map(str::len);
//! assert_eq!(long.to_vec(), vec![3, 4, 5]);
//! ```

use crate::config::EvalOptions;
#[cfg(feature = "metrics")]
use crate::metrics::Metrics;
use crate::runner::{self, Context, Runner};
use crate::sink::{Chained, Filter, FlatMap, Forward, Limit, Map, Peek, Sink, Skip, SortBarrier, Step};
use crate::source::Source;
use std::cell::RefCell;
use std::rc::Rc;

type Driver<T> = dyn Fn(&Context<'_>, &mut dyn Sink<T>);

/// A lazily-evaluated pipeline stage producing elements of type `T`.
///
/// Cloning is cheap and shares the underlying source. Streams are
/// single-threaded (`!Send`).
///
/// # Panics
/// Evaluating a stream from inside one of its own callbacks (for example a
/// `flat_map` mapper returning a clone of the stream being evaluated) panics,
/// since the shared source is already being pulled.
pub struct Stream<T> {
    driver: Rc<Driver<T>>,
    options: Rc<EvalOptions>,
    #[cfg(feature = "metrics")]
    metrics: Option<Metrics>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            driver: Rc::clone(&self.driver),
            options: Rc::clone(&self.options),
            #[cfg(feature = "metrics")]
            metrics: self.metrics.clone(),
        }
    }
}

impl<T: 'static> Stream<T> {
    /// A head stage pulling from `source`.
    pub fn from_source<S>(source: S) -> Self
    where
        S: Source<T> + 'static,
    {
        let source = RefCell::new(source);
        Self {
            driver: Rc::new(move |ctx: &Context<'_>, sink: &mut dyn Sink<T>| {
                let mut source = source.borrow_mut();
                runner::copy_into(ctx, &mut *source, sink);
            }),
            options: Rc::new(EvalOptions::default()),
            #[cfg(feature = "metrics")]
            metrics: None,
        }
    }

    /// A new stage with this stage's options and metrics.
    fn derive<R, D>(&self, driver: D) -> Stream<R>
    where
        D: Fn(&Context<'_>, &mut dyn Sink<R>) + 'static,
    {
        Stream {
            driver: Rc::new(driver),
            options: Rc::clone(&self.options),
            #[cfg(feature = "metrics")]
            metrics: self.metrics.clone(),
        }
    }

    /// Push this stage's elements into `sink` within an existing evaluation.
    pub(crate) fn drive_in(&self, ctx: &Context<'_>, sink: &mut dyn Sink<T>) {
        (self.driver)(ctx, sink);
    }

    /// Run one evaluation of this stream into `sink`.
    pub(crate) fn run(&self, op: &'static str, sink: &mut dyn Sink<T>) {
        let runner = Runner::new(&self.options);
        #[cfg(feature = "metrics")]
        let runner = runner.with_metrics(self.metrics.as_ref());
        runner.run(op, |ctx| self.drive_in(ctx, sink));
    }

    /// The options every evaluation of this stream runs with.
    #[must_use]
    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    /// Attach evaluation options. Later stages inherit them.
    #[must_use]
    pub fn with_options(self, options: EvalOptions) -> Self {
        Self {
            options: Rc::new(options),
            ..self
        }
    }

    /// Record every evaluation of this stream (and of stages built on it) in `metrics`.
    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn with_metrics(self, metrics: &Metrics) -> Self {
        Self {
            metrics: Some(metrics.clone()),
            ..self
        }
    }

    /// Keep elements for which `predicate` holds.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let upstream = self.clone();
        self.derive(move |ctx, sink: &mut dyn Sink<T>| {
            upstream.drive_in(ctx, &mut Chained::new(sink, Filter::new(&predicate)));
        })
    }

    /// Transform each element.
    #[must_use]
    pub fn map<R, F>(self, mapper: F) -> Stream<R>
    where
        R: 'static,
        F: Fn(T) -> R + 'static,
    {
        let upstream = self.clone();
        self.derive(move |ctx, sink: &mut dyn Sink<R>| {
            upstream.drive_in(ctx, &mut Chained::new(sink, Map::new(&mapper)));
        })
    }

    /// Replace each element with the elements of a sub-stream.
    ///
    /// Each sub-stream is drained completely before the outer stream pulls
    /// again, even if a downstream `limit` is satisfied part-way through it;
    /// the surplus is dropped by that downstream stage.
    #[must_use]
    pub fn flat_map<R, F>(self, mapper: F) -> Stream<R>
    where
        R: 'static,
        F: Fn(T) -> Stream<R> + 'static,
    {
        let upstream = self.clone();
        self.derive(move |ctx, sink: &mut dyn Sink<R>| {
            upstream.drive_in(ctx, &mut Chained::new(sink, FlatMap::new(&mapper, ctx)));
        })
    }

    /// Run `consumer` on each element as it passes.
    #[must_use]
    pub fn peek<F>(self, consumer: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        let upstream = self.clone();
        self.derive(move |ctx, sink: &mut dyn Sink<T>| {
            upstream.drive_in(ctx, &mut Chained::new(sink, Peek::new(&consumer)));
        })
    }

    /// At most the first `n` elements. Stops pulling upstream once `n` have passed.
    #[must_use]
    pub fn limit(self, n: usize) -> Self {
        let upstream = self.clone();
        self.derive(move |ctx, sink: &mut dyn Sink<T>| {
            upstream.drive_in(ctx, &mut Chained::new(sink, Limit::new(n)));
        })
    }

    /// Everything after the first `n` elements.
    #[must_use]
    pub fn skip(self, n: usize) -> Self {
        let upstream = self.clone();
        self.derive(move |ctx, sink: &mut dyn Sink<T>| {
            upstream.drive_in(ctx, &mut Chained::new(sink, Skip::new(n)));
        })
    }

    /// Stable sort under the strict weak order `less`.
    ///
    /// This is a barrier: all upstream input is consumed before the first
    /// sorted element moves on. Never use it on an unbounded stream without
    /// an upstream `limit`.
    #[must_use]
    pub fn sorted<L>(self, less: L) -> Self
    where
        L: Fn(&T, &T) -> bool + 'static,
    {
        let upstream = self.clone();
        self.derive(move |ctx, sink: &mut dyn Sink<T>| {
            upstream.drive_in(ctx, &mut SortBarrier::new(sink, &less, ctx));
        })
    }

    /// This stream's elements followed by `other`'s.
    ///
    /// `other` is only evaluated if the downstream still wants input once this
    /// stream is exhausted; otherwise it is never pulled from.
    #[must_use]
    pub fn append(self, other: Self) -> Self {
        let first = self.clone();
        self.derive(move |ctx, sink: &mut dyn Sink<T>| {
            sink.begin();
            first.drive_in(ctx, &mut Forward::new(sink));
            if sink.done() {
                tracing::trace!("append: downstream done, second stage skipped");
            } else {
                other.drive_in(ctx, &mut Forward::new(sink));
            }
            sink.end();
        })
    }

    /// Insert a custom [`Step`], built fresh for every evaluation by `make_step`.
    ///
    /// ```
    /// use ironstream::*;
    /// use ironstream::sink::{Sink, Step};
    ///
    /// /// Emits running totals.
    /// #[derive(Default)]
    /// struct RunningSum(i64);
    ///
    /// impl Step<i64, i64> for RunningSum {
    ///     fn accept(&mut self, item: i64, downstream: &mut dyn Sink<i64>) {
    ///         self.0 += item;
    ///         downstream.accept(self.0);
    ///     }
    /// }
    ///
    /// let sums = from_values([1, 2, 3]).chain(RunningSum::default);
    /// assert_eq!(sums.to_vec(), vec![1, 3, 6]);
    /// ```
    #[must_use]
    pub fn chain<R, S, M>(self, make_step: M) -> Stream<R>
    where
        R: 'static,
        S: Step<T, R>,
        M: Fn() -> S + 'static,
    {
        let upstream = self.clone();
        self.derive(move |ctx, sink: &mut dyn Sink<R>| {
            upstream.drive_in(ctx, &mut Chained::new(sink, make_step()));
        })
    }
}
