//! Error type shared by every fallible operation in the crate.
//!
//! Two classes of failure reach the caller:
//!
//! - [`Error::InvalidArgument`]: an input violates a documented precondition
//!   (geometric start of zero, Collatz seed of zero, out-of-range indices).
//! - [`Error::InvalidState`]: an ordinal accessor asked for a position the
//!   sequence does not have.
//!
//! Asking for the name of an ordinal outside `1..=9` is a bug in this crate,
//! not a caller error, and panics.

use thiserror::Error;

/// Names of the ordinals reachable through [`crate::ordinal::Ordinals`],
/// indexed by `position - 2`.
const ORDINAL_NAMES: [&str; 9] = [
    "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
];

/// Errors produced by this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A precondition on an argument does not hold.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// The requested element does not exist in the sequence.
    #[error("{0}")]
    InvalidState(String),
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { name, reason }
    }

    /// The sequence had no elements at all.
    pub(crate) fn no_elements() -> Self {
        Self::InvalidState("Sequence contains no elements.".to_owned())
    }

    /// The sequence was non-empty but ran out before the ordinal at `index`.
    ///
    /// # Panics
    /// Panics if `index` is outside `1..=9`.
    pub(crate) fn no_element(index: usize) -> Self {
        Self::InvalidState(format!(
            "Sequence contains no {} element.",
            ordinal_name(index)
        ))
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Returns the English ordinal word for `index` in `1..=9`, where `index`
/// counts the elements after the first (`1` is "second", `9` is "tenth").
///
/// # Panics
/// Panics if `index` is zero or greater than nine. Such a call can only come
/// from inside this crate.
pub fn ordinal_name(index: usize) -> &'static str {
    match index {
        1..=9 => ORDINAL_NAMES[index - 1],
        _ => panic!("ordinal index {index} out of range 1..=9"),
    }
}
