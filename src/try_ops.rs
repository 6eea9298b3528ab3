//! Fallible terminal operations.
//!
//! Elements and callbacks stay infallible at the core; these helpers let
//! callbacks return [`anyhow::Result`] and stop the evaluation at the first
//! error. Stopping is ordinary short-circuiting: once an error is recorded the
//! sink reports done and the source is not pulled again.

use crate::sink::Sink;
use crate::stream::Stream;
use anyhow::{Result, anyhow};
use std::fmt::Display;

/// Fold that records the first error and then reports done.
struct TryFold<A, F> {
    value: Option<A>,
    error: Option<anyhow::Error>,
    combine: F,
}

impl<A, F> TryFold<A, F> {
    const fn new(identity: A, combine: F) -> Self {
        Self {
            value: Some(identity),
            error: None,
            combine,
        }
    }

    fn into_result(self) -> Result<A> {
        match (self.error, self.value) {
            (Some(e), _) => Err(e),
            (None, Some(v)) => Ok(v),
            (None, None) => Err(anyhow!("fold state lost")),
        }
    }
}

impl<T, A, F> Sink<T> for TryFold<A, F>
where
    F: FnMut(A, T) -> Result<A>,
{
    fn done(&self) -> bool {
        self.error.is_some()
    }

    fn accept(&mut self, item: T) {
        if self.error.is_some() {
            return;
        }
        if let Some(acc) = self.value.take() {
            match (self.combine)(acc, item) {
                Ok(next) => self.value = Some(next),
                Err(e) => self.error = Some(e),
            }
        }
    }
}

impl<T: 'static> Stream<T> {
    /// Fold with a fallible `combine`, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `combine`.
    pub fn try_fold<A, F>(&self, identity: A, combine: F) -> Result<A>
    where
        F: FnMut(A, T) -> Result<A>,
    {
        let mut sink = TryFold::new(identity, combine);
        self.run("try_fold", &mut sink);
        sink.into_result()
    }

    /// Run a fallible `effect` on each element, stopping at the first error.
    ///
    /// ```
    /// use ironstream::*;
    /// use anyhow::bail;
    ///
    /// let mut seen = Vec::new();
    /// let r = from_values([1, 2, -3, 4]).try_for_each(|x| {
    ///     if x < 0 {
    ///         bail!("negative: {x}");
    ///     }
    ///     seen.push(x);
    ///     Ok(())
    /// });
    /// assert_eq!(r.unwrap_err().to_string(), "negative: -3");
    /// assert_eq!(seen, vec![1, 2]);
    /// ```
    ///
    /// # Errors
    /// Returns the first error produced by `effect`.
    pub fn try_for_each<F>(&self, mut effect: F) -> Result<()>
    where
        F: FnMut(T) -> Result<()>,
    {
        self.try_fold((), |(), x| effect(x))
    }

    /// Map each element through a fallible function, keeping the `Result`s in the stream.
    #[must_use]
    pub fn try_map<O, E, F>(self, f: F) -> Stream<std::result::Result<O, E>>
    where
        O: 'static,
        E: 'static,
        F: Fn(T) -> std::result::Result<O, E> + 'static,
    {
        self.map(f)
    }
}

impl<T, E> Stream<std::result::Result<T, E>>
where
    T: 'static,
    E: Display + 'static,
{
    /// Collect the `Ok` values, failing fast on the first `Err`.
    ///
    /// # Errors
    /// Returns `element failed: {e}` for the first `Err` element.
    pub fn try_to_vec(&self) -> Result<Vec<T>> {
        self.try_fold(Vec::new(), |mut out, r| match r {
            Ok(v) => {
                out.push(v);
                Ok(out)
            }
            Err(e) => Err(anyhow!("element failed: {e}")),
        })
    }
}
