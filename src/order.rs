//! Less-than functions for [`sorted`](crate::Stream::sorted),
//! [`min`](crate::Stream::min) and [`max`](crate::Stream::max).
//!
//! ```
//! use ironstream::*;
//!
//! let v = from_values([3, 1, 2]).sorted(reverse_order).to_vec();
//! assert_eq!(v, vec![3, 2, 1]);
//!
//! let shortest = from_values(["ccc", "a", "bb"]).min(comparing(|s: &&str| s.len()));
//! assert_eq!(shortest, Some("a"));
//! ```

/// Ascending order: `a < b`.
pub fn natural_order<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}

/// Descending order: `a > b`.
pub fn reverse_order<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a > b
}

/// Ascending order of the key extracted by `key`.
pub fn comparing<T, K, F>(key: F) -> impl Fn(&T, &T) -> bool
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    move |a: &T, b: &T| key(a) < key(b)
}
