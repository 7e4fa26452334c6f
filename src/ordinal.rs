//! Ordinal element access: `second()` through `tenth()`.
//!
//! `std` covers the first element (`Iterator::next`, `slice::first`) and
//! arbitrary zero-based positions (`Iterator::nth`). This module adds named
//! accessors for positions two through ten, with error messages that say what
//! went wrong:
//!
//! - `"Sequence contains no elements."` for an empty sequence
//! - `"Sequence contains no {ordinal} element."` for a sequence that is too short
//!
//! # Algorithm
//! One forward pass that stops at the requested position. The sequence is
//! never counted or collected, so infinite iterators are fine as long as the
//! position exists.
//!
//! # Complexity
//! Time: O(N) for position N, independent of the sequence length. Space: O(1).

use crate::error::{Error, Result};

/// Outcome of walking a sequence to a fixed position.
enum Lookup<T> {
    Found(T),
    Empty,
    TooShort,
}

/// Walks `source` to the 1-based `position` (2..=10).
///
/// Consumes at most `position` elements. The iterator is dropped before
/// returning, whatever the outcome.
fn lookup<I: IntoIterator>(source: I, position: usize) -> Lookup<I::Item> {
    debug_assert!((2..=10).contains(&position));
    let mut iter = source.into_iter();
    if iter.next().is_none() {
        return Lookup::Empty;
    }
    match iter.nth(position - 2) {
        Some(item) => Lookup::Found(item),
        None => Lookup::TooShort,
    }
}

fn element_at<I: IntoIterator>(source: I, position: usize) -> Result<I::Item> {
    match lookup(source, position) {
        Lookup::Found(item) => Ok(item),
        Lookup::Empty => Err(Error::no_elements()),
        Lookup::TooShort => Err(Error::no_element(position - 1)),
    }
}

fn element_at_or_default<I>(source: I, position: usize) -> I::Item
where
    I: IntoIterator,
    I::Item: Default,
{
    match lookup(source, position) {
        Lookup::Found(item) => item,
        Lookup::Empty | Lookup::TooShort => Default::default(),
    }
}

macro_rules! ordinal_accessors {
    ($( $name:ident, $or_default:ident, $word:literal => $position:literal; )*) => {
        $(
            #[doc = concat!("Returns the ", $word, " element.")]
            ///
            /// # Errors
            /// [`Error::InvalidState`] if the sequence is empty or has fewer
            #[doc = concat!("than ", stringify!($position), " elements.")]
            fn $name(self) -> Result<Self::Item> {
                element_at(self, $position)
            }

            #[doc = concat!("Returns the ", $word, " element, or `Default::default()` if there is none.")]
            fn $or_default(self) -> Self::Item
            where
                Self::Item: Default,
            {
                element_at_or_default(self, $position)
            }
        )*
    };
}

/// Named positional accessors for any [`IntoIterator`].
///
/// Implemented for every `IntoIterator`, so it works on vectors, slices
/// (yielding references), ranges and arbitrary iterator chains.
///
/// # Examples
/// ```
/// use u_collections::ordinal::Ordinals;
///
/// let v = vec![10, 20, 30];
/// assert_eq!(v.iter().second(), Ok(&20));
/// assert_eq!(
///     v.iter().fourth().unwrap_err().to_string(),
///     "Sequence contains no fourth element."
/// );
/// assert_eq!(v.into_iter().fifth_or_default(), 0);
///
/// // Infinite sources are fine.
/// assert_eq!((1..).tenth(), Ok(10));
/// ```
pub trait Ordinals: IntoIterator + Sized {
    ordinal_accessors! {
        second, second_or_default, "second" => 2;
        third, third_or_default, "third" => 3;
        fourth, fourth_or_default, "fourth" => 4;
        fifth, fifth_or_default, "fifth" => 5;
        sixth, sixth_or_default, "sixth" => 6;
        seventh, seventh_or_default, "seventh" => 7;
        eighth, eighth_or_default, "eighth" => 8;
        ninth, ninth_or_default, "ninth" => 9;
        tenth, tenth_or_default, "tenth" => 10;
    }
}

impl<I: IntoIterator> Ordinals for I {}
