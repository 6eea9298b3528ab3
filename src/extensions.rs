//! Extension points for reusable pipeline fragments.
//!
//! - [`Transform`]: package several stages into one named, reusable component
//!
//! For single custom stages, implement [`Step`](crate::sink::Step) and use
//! [`Stream::chain`].

use crate::stream::Stream;

/// A reusable sequence of stages turning a `Stream<I>` into a `Stream<O>`.
///
/// # Example: token normalization
/// ```
/// use ironstream::*;
/// use ironstream::extensions::Transform;
///
/// struct NormalizeTokens;
///
/// impl Transform<String, String> for NormalizeTokens {
///     fn expand(&self, input: Stream<String>) -> Stream<String> {
///         input
///             .map(|t: String| t.trim().to_lowercase())
///             .filter(|t: &String| !t.is_empty())
///             .distinct()
///     }
/// }
///
/// let raw = from_values([" Foo", "bar ", "  ", "FOO"]).map(String::from);
/// let out = raw.apply(&NormalizeTokens).to_vec();
/// assert_eq!(out, vec!["foo", "bar"]);
/// ```
pub trait Transform<I, O> {
    fn expand(&self, input: Stream<I>) -> Stream<O>;
}

impl<I, O, F> Transform<I, O> for F
where
    F: Fn(Stream<I>) -> Stream<O>,
{
    fn expand(&self, input: Stream<I>) -> Stream<O> {
        self(input)
    }
}

impl<T: 'static> Stream<T> {
    /// Apply a [`Transform`].
    #[must_use]
    pub fn apply<O, X>(self, transform: &X) -> Stream<O>
    where
        X: Transform<T, O> + ?Sized,
    {
        transform.expand(self)
    }
}
