//! Search helpers over arbitrary sequences.
//!
//! ```
//! use quatern::seq::first_then_apply;
//!
//! let r = first_then_apply([1, 2, 3], |x| x % 2 == 0, |x| x * 10);
//! assert_eq!(r, Some(20));
//! ```

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Apply `f` to the first element of `items` satisfying `predicate`.
///
/// Returns `None` when the sequence is empty or nothing matches.
/// Elements after the first match are never visited.
pub fn first_then_apply<I, P, F, U>(items: I, predicate: P, f: F) -> Option<U>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
    F: FnOnce(I::Item) -> U,
{
    items.into_iter().find(predicate).map(f)
}

/// Lowercase the first string in `items` satisfying `predicate`.
#[cfg(feature = "alloc")]
pub fn first_then_lowercase<I, P>(items: I, predicate: P) -> Option<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    P: FnMut(&I::Item) -> bool,
{
    first_then_apply(items, predicate, |s| s.as_ref().to_lowercase())
}
