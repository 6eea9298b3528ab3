//! Testing utilities for streams, sources and custom sinks.
//!
//! - **Recording**: [`RecordingSink`] logs the exact lifecycle calls it receives,
//!   [`CallCounter`] counts callback invocations
//! - **Assertions**: compare evaluation output with expected results
//! - **Debug**: [`StreamDebugExt`] taps a stream and logs what passes through
//!
//! # Quick Start
//!
//! ```
//! use ironstream::*;
//! use ironstream::testing::*;
//!
//! let calls = CallCounter::new();
//! let c = calls.clone();
//! let s = generate(move || {
//!     c.tick();
//!     "a"
//! })
//! .limit(3);
//!
//! assert_stream_yields(&s, &["a", "a", "a"]);
//! assert_eq!(calls.get(), 3);
//! ```
//!
//! Driving a source by hand shows the full lifecycle:
//!
//! ```
//! use ironstream::runner::drive;
//! use ironstream::source::Values;
//! use ironstream::testing::RecordingSink;
//!
//! let mut sink = RecordingSink::with_limit(1);
//! drive::<&str>(&mut Values::new(["a", "b"]), &mut sink);
//! assert_eq!(sink.log(), ["begin", "accept(\"a\")", "end"]);
//! ```

pub mod assertions;
pub mod debug;
pub mod recording;

pub use assertions::*;
pub use debug::*;
pub use recording::*;
