//! # Ironstream
//!
//! **Lazily-evaluated, composable sequence pipelines** for Rust. Declare a chain
//! of transformations over a source of elements; nothing runs until a terminal
//! operation asks for a result.
//!
//! ## Key Features
//!
//! - **Lazy** - building a pipeline has no side effects and pulls nothing
//! - **Short-circuiting** - `limit`, `find_first`, `any_match` and friends stop
//!   pulling as soon as the answer is known, so infinite sources are fine
//! - **Stateful stages** - `skip`, `sorted` (stable), `distinct`, with fresh
//!   state for every evaluation
//! - **Value semantics** - every operation returns a new stream; a stream can
//!   be evaluated more than once
//! - **Extensible** - custom [`Sink`]s, [`sink::Step`]s and [`extensions::Transform`]s
//!
//! ## Quick Start
//!
//! ```
//! use ironstream::*;
//!
//! let odd_squares = iterate(1u64, |x| x + 1)
//!     .filter(|x| x % 2 == 1)
//!     .map(|x| x * x)
//!     .limit(4)
//!     .to_vec();
//! assert_eq!(odd_squares, vec![1, 9, 25, 49]);
//! ```
//!
//! ## Core Concepts
//!
//! ### Source
//!
//! A [`Source`] is a pull-based, single-pass producer. Constructors wrap the
//! common shapes: [`from_values`], [`from_collection`], [`from_iter`],
//! [`generate`], [`iterate`] and [`from_enumerator`].
//!
//! ### Sink
//!
//! A [`Sink`] is a push-based consumer with a `begin → accept* → end`
//! lifecycle and a `done` flag the driver polls before every pull. Each
//! intermediate operation is a [`sink::Chained`] sink wrapping the next one
//! downstream.
//!
//! ### Stream
//!
//! A [`Stream<T>`] is an immutable stage. Intermediate operations wrap the
//! sink they will eventually be given and delegate upstream; a terminal
//! operation supplies the innermost sink and triggers the pull loop.
//!
//! #### Intermediate
//! - [`filter`](Stream::filter), [`map`](Stream::map), [`flat_map`](Stream::flat_map), [`peek`](Stream::peek)
//! - [`limit`](Stream::limit), [`skip`](Stream::skip)
//! - [`sorted`](Stream::sorted) - stable, full barrier
//! - [`distinct`](Stream::distinct), [`distinct_by`](Stream::distinct_by)
//! - [`append`](Stream::append) - lazy on its second stream
//!
//! #### Terminal
//! - [`for_each`](Stream::for_each), [`fold`](Stream::fold), [`reduce`](Stream::reduce)
//! - [`all_match`](Stream::all_match), [`any_match`](Stream::any_match), [`none_match`](Stream::none_match)
//! - [`find_first`](Stream::find_first), [`min`](Stream::min), [`max`](Stream::max)
//! - [`count`](Stream::count), [`to_vec`](Stream::to_vec), [`collect`](Stream::collect)
//! - [`try_for_each`](Stream::try_for_each), [`try_fold`](Stream::try_fold) - stop at the first error
//!
//! ### Ordering
//!
//! [`natural_order`], [`reverse_order`] and [`comparing`] build the less-than
//! functions taken by `sorted`, `min` and `max`.
//!
//! ## Evaluation Model
//!
//! 1. Building a pipeline nests closures; no element moves
//! 2. A terminal operation creates its sink; each stage wraps it, outermost last
//! 3. The head stage pulls from the source and pushes each element through the
//!    chain until the chain reports done or the source runs out
//! 4. `end` runs on every sink exactly once; sort barriers flush there
//!
//! Evaluation is single-threaded and synchronous. Sources are stateful: a
//! second evaluation of the same stream continues from wherever the source
//! was left.
//!
//! ## Feature Flags
//!
//! - `metrics` (default) - evaluation counters via [`Stream::with_metrics`]
//!
//! ## Module Overview
//!
//! - [`source`] - sources and stream constructors
//! - [`sink`] - the sink protocol, chained steps, terminal sinks
//! - [`stream`] - the `Stream` stage and its intermediate operations
//! - [`terminal`] - terminal operations
//! - [`runner`] - the evaluation driver
//! - [`config`] - evaluation options
//! - [`testing`] - helpers for testing pipelines and custom sinks

pub mod config;
pub mod distinct;
pub mod extensions;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod order;
pub mod runner;
pub mod sink;
pub mod source;
pub mod stream;
pub mod terminal;
pub mod testing;
pub mod try_ops;

// General re-exports
pub use config::EvalOptions;
pub use distinct::{Observer, distinct, distinct_by};
pub use order::{comparing, natural_order, reverse_order};
pub use sink::Sink;
pub use source::{
    Source, empty, from_collection, from_enumerator, from_iter, from_values, generate, iterate,
};
pub use stream::Stream;

// Gated re-exports
#[cfg(feature = "metrics")]
pub use metrics::{Metrics, MetricsSnapshot};
