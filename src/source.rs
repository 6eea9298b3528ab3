//! Pull-based element sources and the stream constructors built on them.
//!
//! A [`Source`] is stateful and single-pass: every [`pull`](Source::pull)
//! consumes an element for good. A stream built on a source shares it between
//! all clones and all evaluations, so evaluating a stream twice continues from
//! wherever the first evaluation left the source. An exhausted source simply
//! yields an empty second evaluation.
//!
//! ```
//! use ironstream::*;
//!
//! let s = from_values([1, 2, 3, 4]);
//! assert_eq!(s.limit(2).to_vec(), vec![1, 2]);
//!
//! let s = from_values([1, 2, 3, 4]);
//! let first_two = s.clone().limit(2);
//! assert_eq!(first_two.to_vec(), vec![1, 2]);
//! assert_eq!(s.to_vec(), vec![3, 4]); // same source, already advanced
//! ```

use crate::stream::Stream;
use std::collections::VecDeque;

/// A single-pass producer of elements.
pub trait Source<T> {
    /// The next element, or `None` once exhausted.
    ///
    /// Unbounded sources never return `None`; an evaluation over them ends
    /// only through the sink chain's `done` signal.
    fn pull(&mut self) -> Option<T>;
}

/* ===================== Values ===================== */

/// A fixed, ordered sequence, consumed from the front.
#[derive(Clone, Debug, Default)]
pub struct Values<T> {
    items: VecDeque<T>,
}

impl<T> Values<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Elements not yet pulled.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Source<T> for Values<T> {
    fn pull(&mut self) -> Option<T> {
        self.items.pop_front()
    }
}

/* ===================== Generate ===================== */

/// Calls a zero-argument producer on every pull. Infinite.
pub struct Generate<F>(F);

impl<F> Generate<F> {
    pub const fn new(producer: F) -> Self {
        Self(producer)
    }
}

impl<T, F> Source<T> for Generate<F>
where
    F: FnMut() -> T,
{
    fn pull(&mut self) -> Option<T> {
        Some((self.0)())
    }
}

/* ===================== Successors ===================== */

/// Emits a seed, then repeatedly applies a successor function. Infinite.
///
/// Each pull computes the successor of the current value, then hands the
/// current value out and keeps the successor for the next pull. The successor
/// therefore runs once per pulled element, before that element reaches the
/// sink chain.
pub struct Successors<T, F> {
    current: T,
    successor: F,
}

impl<T, F> Successors<T, F> {
    pub const fn new(seed: T, successor: F) -> Self {
        Self {
            current: seed,
            successor,
        }
    }
}

impl<T, F> Source<T> for Successors<T, F>
where
    F: FnMut(&T) -> T,
{
    fn pull(&mut self) -> Option<T> {
        let next = (self.successor)(&self.current);
        Some(std::mem::replace(&mut self.current, next))
    }
}

/* ===================== Enumerator ===================== */

/// Bridges an external "has next / take next" protocol, such as a token scanner.
///
/// `has_next` is consulted before every `next`, and never ahead of a pull.
pub struct Enumerator<H, N> {
    has_next: H,
    next: N,
}

impl<H, N> Enumerator<H, N> {
    pub const fn new(has_next: H, next: N) -> Self {
        Self { has_next, next }
    }
}

impl<T, H, N> Source<T> for Enumerator<H, N>
where
    H: FnMut() -> bool,
    N: FnMut() -> T,
{
    fn pull(&mut self) -> Option<T> {
        if (self.has_next)() {
            Some((self.next)())
        } else {
            None
        }
    }
}

/* ===================== FromIter ===================== */

/// Adapts any [`Iterator`], pulling from it lazily.
pub struct FromIter<I>(I);

impl<I> FromIter<I> {
    pub const fn new(iter: I) -> Self {
        Self(iter)
    }
}

impl<I: Iterator> Source<I::Item> for FromIter<I> {
    fn pull(&mut self) -> Option<I::Item> {
        self.0.next()
    }
}

/* ===================== constructors ===================== */

/// A stream over the given values, in order.
pub fn from_values<T: 'static, const N: usize>(values: [T; N]) -> Stream<T> {
    from_collection(values)
}

/// A stream over a fixed collection, in iteration order.
///
/// The collection is moved into the source up front; nothing is evaluated.
pub fn from_collection<T: 'static>(items: impl IntoIterator<Item = T>) -> Stream<T> {
    Stream::from_source(Values::new(items))
}

/// A stream that pulls lazily from an iterator.
pub fn from_iter<I>(iter: I) -> Stream<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'static,
    I::Item: 'static,
{
    Stream::from_source(FromIter::new(iter.into_iter()))
}

/// An infinite stream calling `producer` once per element.
pub fn generate<T, F>(producer: F) -> Stream<T>
where
    T: 'static,
    F: FnMut() -> T + 'static,
{
    Stream::from_source(Generate::new(producer))
}

/// An infinite stream `seed, f(seed), f(f(seed)), ...`.
///
/// `f` runs once per pulled element, on that element, before it is pushed
/// downstream: pulling `seed` calls `f(&seed)` first.
pub fn iterate<T, F>(seed: T, successor: F) -> Stream<T>
where
    T: 'static,
    F: FnMut(&T) -> T + 'static,
{
    Stream::from_source(Successors::new(seed, successor))
}

/// A stream over an external enumeration protocol.
///
/// ```
/// use ironstream::from_enumerator;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let left = Rc::new(Cell::new(3));
/// let (l1, l2) = (Rc::clone(&left), Rc::clone(&left));
/// let s = from_enumerator(move || l1.get() > 0, move || {
///     let v = l2.get();
///     l2.set(v - 1);
///     v
/// });
/// assert_eq!(s.to_vec(), vec![3, 2, 1]);
/// ```
pub fn from_enumerator<T, H, N>(has_next: H, next: N) -> Stream<T>
where
    T: 'static,
    H: FnMut() -> bool + 'static,
    N: FnMut() -> T + 'static,
{
    Stream::from_source(Enumerator::new(has_next, next))
}

/// A stream with no elements.
#[must_use]
pub fn empty<T: 'static>() -> Stream<T> {
    from_collection(Vec::new())
}

impl<T: 'static> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        from_collection(iter)
    }
}
