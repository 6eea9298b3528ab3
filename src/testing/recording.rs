//! Sinks and counters that record what happened during an evaluation.

use crate::sink::Sink;
use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

/// A sink that logs every lifecycle call as a string.
///
/// Entries are `"begin"`, `"accept({item:?})"` and `"end"`. With a limit, the
/// sink reports done after that many accepts, which lets tests observe how a
/// driver reacts to early termination.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    log: Vec<String>,
    limit: Option<usize>,
    accepted: usize,
}

impl RecordingSink {
    /// A sink that never reports done.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that reports done after `limit` accepts.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    #[must_use]
    pub fn into_log(self) -> Vec<String> {
        self.log
    }

    /// Number of `accept` calls so far.
    #[must_use]
    pub const fn accepted(&self) -> usize {
        self.accepted
    }
}

impl<T: Debug> Sink<T> for RecordingSink {
    fn begin(&mut self) {
        self.log.push("begin".to_string());
    }

    fn done(&self) -> bool {
        self.limit.is_some_and(|l| self.accepted >= l)
    }

    fn accept(&mut self, item: T) {
        self.accepted += 1;
        self.log.push(format!("accept({item:?})"));
    }

    fn end(&mut self) {
        self.log.push("end".to_string());
    }
}

/// A shared invocation counter for closures handed to a stream.
///
/// Clones share the count, so one clone can move into a closure while the
/// test keeps another.
#[derive(Clone, Debug, Default)]
pub struct CallCounter(Rc<Cell<usize>>);

impl CallCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&self) {
        self.0.set(self.0.get() + 1);
    }

    #[must_use]
    pub fn get(&self) -> usize {
        self.0.get()
    }
}
