//! Assertion functions for testing evaluation outputs.

use crate::stream::Stream;
use std::fmt::Debug;

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics with the first differing index if the collections differ.
///
/// # Example
///
/// ```
/// use ironstream::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    if let Some(i) = actual.iter().zip(expected).position(|(a, e)| a != e) {
        panic!(
            "Collection mismatch at index {i}:\n  Expected: {:?}\n  Actual: {:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}",
            expected[i], actual[i]
        );
    }
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Evaluate `stream` with `to_vec` and compare against `expected`.
///
/// This runs one evaluation, so it advances the stream's source.
///
/// # Panics
///
/// Panics if the produced elements differ from `expected`.
pub fn assert_stream_yields<T>(stream: &Stream<T>, expected: &[T])
where
    T: Debug + PartialEq + 'static,
{
    assert_collections_equal(&stream.to_vec(), expected);
}

/// Assert that one evaluation of `stream` produces nothing.
///
/// # Panics
///
/// Panics with the produced elements otherwise.
pub fn assert_stream_empty<T>(stream: &Stream<T>)
where
    T: Debug + 'static,
{
    let out = stream.to_vec();
    assert!(out.is_empty(), "Expected an empty stream, got: {out:?}");
}
