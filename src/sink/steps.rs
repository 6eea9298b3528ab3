//! Element-wise steps for [`Chained`](super::Chained) sinks.

use super::terminal::ForEach;
use super::{Sink, Step};
use crate::distinct::Observer;
use crate::runner::Context;
use crate::stream::Stream;
use std::hash::Hash;

/* ===================== stateless ===================== */

/// Forwards an element iff the predicate holds.
pub struct Filter<P>(P);

impl<P> Filter<P> {
    pub const fn new(predicate: P) -> Self {
        Self(predicate)
    }
}

impl<T, P> Step<T, T> for Filter<P>
where
    P: Fn(&T) -> bool,
{
    fn accept(&mut self, item: T, downstream: &mut dyn Sink<T>) {
        if (self.0)(&item) {
            downstream.accept(item);
        }
    }
}

/// Forwards `mapper(x)`.
pub struct Map<F>(F);

impl<F> Map<F> {
    pub const fn new(mapper: F) -> Self {
        Self(mapper)
    }
}

impl<T, R, F> Step<T, R> for Map<F>
where
    F: Fn(T) -> R,
{
    fn accept(&mut self, item: T, downstream: &mut dyn Sink<R>) {
        downstream.accept((self.0)(item));
    }
}

/// Runs a side effect, then forwards the element unchanged.
pub struct Peek<F>(F);

impl<F> Peek<F> {
    pub const fn new(consumer: F) -> Self {
        Self(consumer)
    }
}

impl<T, F> Step<T, T> for Peek<F>
where
    F: Fn(&T),
{
    fn accept(&mut self, item: T, downstream: &mut dyn Sink<T>) {
        (self.0)(&item);
        downstream.accept(item);
    }
}

/// Expands each element into a sub-stream and drains it into the downstream.
///
/// The drain runs the sub-stream to its own completion: the downstream's
/// `done` is only consulted again by the outer driver once `accept` returns.
/// Sub-streams are evaluated in the enclosing evaluation's [`Context`].
pub struct FlatMap<'c, F> {
    mapper: F,
    ctx: &'c Context<'c>,
}

impl<'c, F> FlatMap<'c, F> {
    pub const fn new(mapper: F, ctx: &'c Context<'c>) -> Self {
        Self { mapper, ctx }
    }
}

impl<T, R, F> Step<T, R> for FlatMap<'_, F>
where
    F: Fn(T) -> Stream<R>,
    R: 'static,
{
    fn accept(&mut self, item: T, downstream: &mut dyn Sink<R>) {
        let sub = (self.mapper)(item);
        sub.drive_in(self.ctx, &mut ForEach::new(|x: R| downstream.accept(x)));
    }
}

/* ===================== counting ===================== */

/// Forwards at most `n` elements, then reports `done`.
pub struct Limit {
    n: usize,
    remaining: usize,
}

impl Limit {
    pub const fn new(n: usize) -> Self {
        Self { n, remaining: n }
    }
}

impl<T> Step<T, T> for Limit {
    fn begin(&mut self) {
        self.remaining = self.n;
    }

    fn accept(&mut self, item: T, downstream: &mut dyn Sink<T>) {
        if self.remaining > 0 {
            downstream.accept(item);
            self.remaining -= 1;
        }
    }

    fn done(&self) -> bool {
        self.remaining == 0
    }
}

/// Drops the first `n` elements and forwards the rest.
pub struct Skip {
    n: usize,
    remaining: usize,
}

impl Skip {
    pub const fn new(n: usize) -> Self {
        Self { n, remaining: n }
    }
}

impl<T> Step<T, T> for Skip {
    fn begin(&mut self) {
        self.remaining = self.n;
    }

    fn accept(&mut self, item: T, downstream: &mut dyn Sink<T>) {
        if self.remaining > 0 {
            self.remaining -= 1;
            return;
        }
        downstream.accept(item);
    }
}

/* ===================== stateful ===================== */

/// Forwards an element only the first time its key is observed.
///
/// The seen-set belongs to this step instance, so each evaluation starts empty.
pub struct DistinctBy<K, F> {
    key: F,
    seen: Observer<K>,
}

impl<K, F> DistinctBy<K, F> {
    pub fn new(key: F) -> Self {
        Self {
            key,
            seen: Observer::new(),
        }
    }
}

impl<T, K, F> Step<T, T> for DistinctBy<K, F>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    fn begin(&mut self) {
        self.seen.clear();
    }

    fn accept(&mut self, item: T, downstream: &mut dyn Sink<T>) {
        if self.seen.observe((self.key)(&item)) {
            downstream.accept(item);
        }
    }
}
