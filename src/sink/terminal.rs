//! Terminal sinks: the end of every evaluation chain.
//!
//! Each one holds the running result of a single evaluation; the terminal
//! operations on [`Stream`](crate::Stream) build one, drive the chain into it
//! and read the result back out.
//!
//! - [`Accumulator`] -- generic fold (backs `fold`, `count`, `to_vec`, `collect`)
//! - [`Reduce`] -- fold seeded by the first element
//! - [`Match`] -- all/any/none match, one short-circuiting state machine
//! - [`FindFirst`] -- first element, then done
//! - [`Extremum`] -- running min or max under a less-than function
//! - [`ForEach`] -- plain consumer

use super::Sink;

/* ===================== Accumulator ===================== */

/// Running fold: `value = combine(value, x)` for each element.
pub struct Accumulator<A, F> {
    value: Option<A>,
    combine: F,
}

impl<A, F> Accumulator<A, F> {
    pub const fn new(identity: A, combine: F) -> Self {
        Self {
            value: Some(identity),
            combine,
        }
    }

    /// `true` once a `combine` call has unwound, taking the running value with it.
    pub const fn is_poisoned(&self) -> bool {
        self.value.is_none()
    }

    /// The folded value.
    ///
    /// # Panics
    ///
    /// Panics if the accumulator [`is_poisoned`](Self::is_poisoned): a previous
    /// `combine` panicked and the panic was caught before reaching here. The
    /// terminal operations never observe this, since a panicking `combine`
    /// unwinds out of them before the value is read.
    pub fn into_value(self) -> A {
        match self.value {
            Some(value) => value,
            None => panic!("accumulator poisoned by a panicking combine"),
        }
    }
}

impl<T, A, F> Sink<T> for Accumulator<A, F>
where
    F: FnMut(A, T) -> A,
{
    fn accept(&mut self, item: T) {
        if let Some(acc) = self.value.take() {
            self.value = Some((self.combine)(acc, item));
        }
    }
}

/* ===================== Reduce ===================== */

/// Fold without an identity: the first element seeds the result.
pub struct Reduce<T, F> {
    value: Option<T>,
    combine: F,
}

impl<T, F> Reduce<T, F> {
    pub const fn new(combine: F) -> Self {
        Self {
            value: None,
            combine,
        }
    }

    /// `None` when no element was seen.
    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

impl<T, F> Sink<T> for Reduce<T, F>
where
    F: FnMut(T, T) -> T,
{
    fn accept(&mut self, item: T) {
        self.value = Some(match self.value.take() {
            Some(acc) => (self.combine)(acc, item),
            None => item,
        });
    }
}

/* ===================== Match ===================== */

/// Two-state matcher parameterized by the predicate outcome that decides it.
///
/// | constructor | stops when predicate is | result on stop | empty input |
/// |---|---|---|---|
/// | [`Match::all`]  | `false` | `false` | `true`  |
/// | [`Match::any`]  | `true`  | `true`  | `false` |
/// | [`Match::none`] | `true`  | `false` | `true`  |
pub struct Match<P> {
    predicate: P,
    stop_on: bool,
    stop_value: bool,
    value: bool,
    decided: bool,
}

impl<P> Match<P> {
    pub const fn new(predicate: P, stop_on: bool, stop_value: bool) -> Self {
        Self {
            predicate,
            stop_on,
            stop_value,
            value: !stop_value,
            decided: false,
        }
    }

    pub const fn all(predicate: P) -> Self {
        Self::new(predicate, false, false)
    }

    pub const fn any(predicate: P) -> Self {
        Self::new(predicate, true, true)
    }

    pub const fn none(predicate: P) -> Self {
        Self::new(predicate, true, false)
    }

    pub const fn value(&self) -> bool {
        self.value
    }
}

impl<T, P> Sink<T> for Match<P>
where
    P: FnMut(&T) -> bool,
{
    fn begin(&mut self) {
        self.value = !self.stop_value;
        self.decided = false;
    }

    fn done(&self) -> bool {
        self.decided
    }

    fn accept(&mut self, item: T) {
        if !self.decided && (self.predicate)(&item) == self.stop_on {
            self.value = self.stop_value;
            self.decided = true;
        }
    }
}

/* ===================== FindFirst ===================== */

/// Records the first element, then reports done.
pub struct FindFirst<T> {
    value: Option<T>,
}

impl<T> FindFirst<T> {
    pub const fn new() -> Self {
        Self { value: None }
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for FindFirst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sink<T> for FindFirst<T> {
    fn done(&self) -> bool {
        self.value.is_some()
    }

    fn accept(&mut self, item: T) {
        if self.value.is_none() {
            self.value = Some(item);
        }
    }
}

/* ===================== Extremum ===================== */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bound {
    Min,
    Max,
}

/// Running minimum or maximum under a strict less-than.
///
/// The first element always becomes the current extremum. Later elements
/// replace it only when strictly better, so the earliest of equal candidates wins.
pub struct Extremum<T, L> {
    less: L,
    bound: Bound,
    value: Option<T>,
}

impl<T, L> Extremum<T, L> {
    pub const fn min(less: L) -> Self {
        Self {
            less,
            bound: Bound::Min,
            value: None,
        }
    }

    pub const fn max(less: L) -> Self {
        Self {
            less,
            bound: Bound::Max,
            value: None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

impl<T, L> Sink<T> for Extremum<T, L>
where
    L: FnMut(&T, &T) -> bool,
{
    fn accept(&mut self, item: T) {
        let replace = match &self.value {
            None => true,
            Some(current) => match self.bound {
                Bound::Min => (self.less)(&item, current),
                Bound::Max => (self.less)(current, &item),
            },
        };
        if replace {
            self.value = Some(item);
        }
    }
}

/* ===================== ForEach ===================== */

/// Calls a side-effecting function for every element. Never done.
pub struct ForEach<F>(F);

impl<F> ForEach<F> {
    pub const fn new(effect: F) -> Self {
        Self(effect)
    }
}

impl<T, F> Sink<T> for ForEach<F>
where
    F: FnMut(T),
{
    fn accept(&mut self, item: T) {
        (self.0)(item);
    }
}
