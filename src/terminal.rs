//! Terminal operations: each one runs a single evaluation of the stream.
//!
//! Terminal operations borrow the stream, so the same stream can be
//! evaluated again. Whether a second evaluation sees the same elements is up
//! to the source: a collection-backed source that was fully consumed yields
//! nothing the second time.
//!
//! Operations that may have no answer return `Option`:
//!
//! | operation | empty input |
//! |---|---|
//! | [`all_match`](Stream::all_match) | `true` |
//! | [`any_match`](Stream::any_match) | `false` |
//! | [`none_match`](Stream::none_match) | `true` |
//! | [`find_first`](Stream::find_first), [`reduce`](Stream::reduce), [`min`](Stream::min), [`max`](Stream::max) | `None` |
//! | [`count`](Stream::count) | `0` |

use crate::sink::Sink;
use crate::sink::terminal::{Accumulator, Extremum, FindFirst, ForEach, Match, Reduce};
use crate::stream::Stream;

impl<T: 'static> Stream<T> {
    /// Evaluate into a caller-supplied sink.
    pub fn evaluate(&self, sink: &mut dyn Sink<T>) {
        self.run("evaluate", sink);
    }

    /// Call `effect` for every element.
    pub fn for_each<F>(&self, effect: F)
    where
        F: FnMut(T),
    {
        self.run("for_each", &mut ForEach::new(effect));
    }

    /// Fold every element into `identity` with `combine`.
    pub fn fold<A, F>(&self, identity: A, combine: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        let mut acc = Accumulator::new(identity, combine);
        self.run("fold", &mut acc);
        acc.into_value()
    }

    /// Fold seeded by the first element; `None` on empty input.
    pub fn reduce<F>(&self, combine: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        let mut sink = Reduce::new(combine);
        self.run("reduce", &mut sink);
        sink.into_value()
    }

    /// `true` if every element satisfies `predicate` (vacuously true when empty).
    /// Stops at the first counterexample.
    pub fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut sink = Match::all(predicate);
        self.run("all_match", &mut sink);
        sink.value()
    }

    /// `true` if some element satisfies `predicate`. Stops at the first match.
    pub fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut sink = Match::any(predicate);
        self.run("any_match", &mut sink);
        sink.value()
    }

    /// `true` if no element satisfies `predicate`. Stops at the first match.
    pub fn none_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut sink = Match::none(predicate);
        self.run("none_match", &mut sink);
        sink.value()
    }

    /// The first element, pulling nothing beyond it.
    pub fn find_first(&self) -> Option<T> {
        let mut sink = FindFirst::new();
        self.run("find_first", &mut sink);
        sink.into_value()
    }

    /// The least element under `less`; the earliest wins among equals.
    pub fn min<L>(&self, less: L) -> Option<T>
    where
        L: FnMut(&T, &T) -> bool,
    {
        let mut sink = Extremum::min(less);
        self.run("min", &mut sink);
        sink.into_value()
    }

    /// The greatest element under `less`; the earliest wins among equals.
    pub fn max<L>(&self, less: L) -> Option<T>
    where
        L: FnMut(&T, &T) -> bool,
    {
        let mut sink = Extremum::max(less);
        self.run("max", &mut sink);
        sink.into_value()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.fold(0, |n, _: T| n + 1)
    }

    /// Every element, in arrival order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.fold(Vec::new(), |mut out, x| {
            out.push(x);
            out
        })
    }

    /// Every element, extended into a fresh `C` in arrival order.
    ///
    /// ```
    /// use ironstream::*;
    /// use std::collections::BTreeSet;
    ///
    /// let set: BTreeSet<_> = from_values([3, 1, 3, 2]).collect();
    /// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn collect<C>(&self) -> C
    where
        C: Default + Extend<T>,
    {
        self.fold(C::default(), |mut out, x| {
            out.extend(std::iter::once(x));
            out
        })
    }
}
