//! Push-based consumers.
//!
//! A [`Sink`] receives elements one at a time through a three-phase lifecycle:
//!
//! 1. [`begin`](Sink::begin) once, before any element
//! 2. [`accept`](Sink::accept) zero or more times, while [`done`](Sink::done) is false
//! 3. [`end`](Sink::end) exactly once, however the evaluation stopped
//!
//! Intermediate operations are expressed as a [`Step`] wrapped in a [`Chained`]
//! sink, which owns the borrow of exactly one downstream sink and forwards the
//! lifecycle to it. Terminal sinks live in [`terminal`].
//!
//! # Overview
//! - [`Chained`] + [`Step`] -- one transformation stage (filter, map, limit, ...)
//! - [`SortBarrier`] -- buffers everything, then replays sorted
//! - [`Forward`] -- forwards elements but swallows `begin`/`end` (used by `append`)

mod sort;
mod steps;
pub mod terminal;

pub use sort::SortBarrier;
pub use steps::{DistinctBy, Filter, FlatMap, Limit, Map, Peek, Skip};

/// A push-based consumer with a `begin → accept* → end` lifecycle.
///
/// Drivers must poll [`done`](Sink::done) before each pull and stop once it
/// reports `true`. `done` is monotone within one evaluation.
pub trait Sink<T> {
    /// Prepare per-evaluation state.
    fn begin(&mut self) {}

    /// `true` once this sink wants no more input.
    fn done(&self) -> bool {
        false
    }

    /// Consume one element.
    fn accept(&mut self, item: T);

    /// Finalize. Always called, even after an early stop.
    fn end(&mut self) {}
}

/// One transformation applied inside a [`Chained`] sink.
///
/// `accept` decides what reaches the downstream sink: nothing (filter), one
/// element (map), or many (flat map). `done` adds a stopping condition of the
/// step's own; the chained sink ORs it with the downstream's.
pub trait Step<T, R> {
    /// Reset per-evaluation state. Called before the downstream's `begin`.
    fn begin(&mut self) {}

    fn accept(&mut self, item: T, downstream: &mut dyn Sink<R>);

    fn done(&self) -> bool {
        false
    }
}

/// A sink adapting `T` to a downstream `Sink<R>` through one [`Step`].
pub struct Chained<'a, R, S> {
    downstream: &'a mut dyn Sink<R>,
    step: S,
}

impl<'a, R, S> Chained<'a, R, S> {
    pub fn new(downstream: &'a mut dyn Sink<R>, step: S) -> Self {
        Self { downstream, step }
    }
}

impl<T, R, S> Sink<T> for Chained<'_, R, S>
where
    S: Step<T, R>,
{
    fn begin(&mut self) {
        self.step.begin();
        self.downstream.begin();
    }

    fn done(&self) -> bool {
        self.step.done() || self.downstream.done()
    }

    fn accept(&mut self, item: T) {
        self.step.accept(item, &mut *self.downstream);
    }

    fn end(&mut self) {
        self.downstream.end();
    }
}

/// Forwards elements and `done` to a downstream sink, but not `begin`/`end`.
///
/// Lets several sources feed one sink within a single evaluation: the owner
/// calls `begin`/`end` on the real sink once around all of them.
pub struct Forward<'a, T> {
    downstream: &'a mut dyn Sink<T>,
}

impl<'a, T> Forward<'a, T> {
    pub fn new(downstream: &'a mut dyn Sink<T>) -> Self {
        Self { downstream }
    }
}

impl<T> Sink<T> for Forward<'_, T> {
    fn done(&self) -> bool {
        self.downstream.done()
    }

    fn accept(&mut self, item: T) {
        self.downstream.accept(item);
    }
}
