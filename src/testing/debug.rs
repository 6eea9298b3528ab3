//! Debug taps for inspecting streams during tests.
//!
//! Both taps are pass-through stages that log through `tracing` at debug
//! level; install a subscriber in the test to see the output.

use crate::sink::{Sink, Step};
use crate::stream::Stream;
use std::fmt::Debug;

/// Logs the first `n` elements of each evaluation.
struct Sample {
    label: String,
    n: usize,
    seen: usize,
}

impl<T: Debug> Step<T, T> for Sample {
    fn begin(&mut self) {
        self.seen = 0;
    }

    fn accept(&mut self, item: T, downstream: &mut dyn Sink<T>) {
        if self.seen < self.n {
            tracing::debug!(label = %self.label, index = self.seen, ?item, "sample");
        }
        self.seen += 1;
        downstream.accept(item);
    }
}

/// Debug methods for [`Stream`].
pub trait StreamDebugExt<T> {
    /// Log every element passing this point.
    ///
    /// ```
    /// use ironstream::*;
    /// use ironstream::testing::StreamDebugExt;
    ///
    /// let out = from_values([1, 2, 3])
    ///     .debug_inspect("source")
    ///     .map(|x| x * 2)
    ///     .debug_inspect("doubled")
    ///     .to_vec();
    /// assert_eq!(out, vec![2, 4, 6]);
    /// ```
    #[must_use]
    fn debug_inspect(self, label: &str) -> Self;

    /// Log only the first `n` elements of each evaluation.
    #[must_use]
    fn debug_sample(self, label: &str, n: usize) -> Self;
}

impl<T: Debug + 'static> StreamDebugExt<T> for Stream<T> {
    fn debug_inspect(self, label: &str) -> Self {
        let label = label.to_string();
        self.peek(move |item| tracing::debug!(label = %label, ?item, "inspect"))
    }

    fn debug_sample(self, label: &str, n: usize) -> Self {
        let label = label.to_string();
        self.chain(move || Sample {
            label: label.clone(),
            n,
            seen: 0,
        })
    }
}
