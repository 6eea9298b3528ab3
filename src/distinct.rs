//! Deduplication.
//!
//! # Overview
//! - [`Stream::distinct`] / [`Stream::distinct_by`] -- deduplicating stages with
//!   a fresh seen-set per evaluation
//! - [`distinct`] / [`distinct_by`] -- standalone stateful predicates for
//!   [`Stream::filter`]
//! - [`Observer`] -- the seen-set both are built on
//!
//! Both keep the first occurrence of each key and preserve arrival order.
//!
//! The standalone predicates own their seen-set for as long as the predicate
//! lives. Attached to a stream with `filter`, that set survives from one
//! evaluation to the next, so a second evaluation drops every key the first
//! one saw. Prefer the stages unless that carry-over is wanted.

use crate::sink::DistinctBy;
use crate::stream::Stream;
use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

/// Remembers which keys have been seen.
#[derive(Clone, Debug)]
pub struct Observer<K> {
    seen: HashSet<K>,
}

impl<K> Observer<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

impl<K: Eq + Hash> Observer<K> {
    /// `true` the first time `key` is observed, `false` afterwards.
    pub fn observe(&mut self, key: K) -> bool {
        self.seen.insert(key)
    }
}

impl<K> Default for Observer<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// A predicate that is `true` for the first occurrence of each value.
pub fn distinct<T>() -> impl Fn(&T) -> bool
where
    T: Eq + Hash + Clone,
{
    distinct_by(T::clone)
}

/// A predicate that is `true` for the first element of each key.
pub fn distinct_by<T, K, F>(key: F) -> impl Fn(&T) -> bool
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let seen = RefCell::new(Observer::new());
    move |x: &T| {
        let k = key(x);
        seen.borrow_mut().observe(k)
    }
}

impl<T: 'static + Eq + Hash + Clone> Stream<T> {
    /// Drop every repeat of an earlier element.
    ///
    /// ```
    /// use ironstream::*;
    /// let v = from_values([1, 1, 2, 3, 3, 3, 1]).distinct().to_vec();
    /// assert_eq!(v, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn distinct(self) -> Self {
        self.distinct_by(T::clone)
    }
}

impl<T: 'static> Stream<T> {
    /// Drop every element whose key was already produced by an earlier one.
    ///
    /// ```
    /// use ironstream::*;
    /// let v = from_values(["apple", "avocado", "banana", "blueberry", "cherry"])
    ///     .distinct_by(|s| s.chars().next())
    ///     .to_vec();
    /// assert_eq!(v, vec!["apple", "banana", "cherry"]);
    /// ```
    #[must_use]
    pub fn distinct_by<K, F>(self, key: F) -> Self
    where
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + 'static,
    {
        let key = Rc::new(key);
        self.chain(move || {
            let key = Rc::clone(&key);
            DistinctBy::<K, _>::new(move |x: &T| key(x))
        })
    }
}
