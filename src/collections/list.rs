//! In-place replace, swap, and move operations on vectors.

use crate::error::{Error, Result};

/// Value-based editing helpers for `Vec<T>`.
///
/// # Examples
/// ```
/// use u_collections::collections::ListExt;
///
/// let mut v = vec!['a', 'b', 'c', 'd'];
/// v.move_item(0, 3).unwrap();
/// assert_eq!(v, vec!['b', 'c', 'd', 'a']);
///
/// assert!(v.swap_values(&'b', &'a'));
/// assert_eq!(v, vec!['a', 'c', 'd', 'b']);
///
/// assert_eq!(v.replace_all(&'c', 'z'), 1);
/// assert_eq!(v, vec!['a', 'z', 'd', 'b']);
/// ```
pub trait ListExt<T> {
    /// Replaces the first element equal to `old` with `new`.
    ///
    /// Returns `false` (and drops `new`) if no element matched.
    fn replace_first(&mut self, old: &T, new: T) -> bool
    where
        T: PartialEq;

    /// Replaces every element equal to `old` with a clone of `new`.
    ///
    /// Returns the number of replacements.
    fn replace_all(&mut self, old: &T, new: T) -> usize
    where
        T: PartialEq + Clone;

    /// Swaps the first occurrence of `a` with the first occurrence of `b`.
    ///
    /// Returns `false` and leaves the vector untouched if either is missing.
    fn swap_values(&mut self, a: &T, b: &T) -> bool
    where
        T: PartialEq;

    /// Removes the element at `from` and reinserts it at `to`.
    ///
    /// Other elements keep their relative order.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if either index is out of bounds.
    ///
    /// # Complexity
    /// O(|from − to|)
    fn move_item(&mut self, from: usize, to: usize) -> Result<()>;
}

impl<T> ListExt<T> for Vec<T> {
    fn replace_first(&mut self, old: &T, new: T) -> bool
    where
        T: PartialEq,
    {
        match self.iter_mut().find(|x| **x == *old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    fn replace_all(&mut self, old: &T, new: T) -> usize
    where
        T: PartialEq + Clone,
    {
        let mut count = 0;
        for slot in self.iter_mut().filter(|x| **x == *old) {
            *slot = new.clone();
            count += 1;
        }
        count
    }

    fn swap_values(&mut self, a: &T, b: &T) -> bool
    where
        T: PartialEq,
    {
        let (Some(i), Some(j)) = (
            self.iter().position(|x| x == a),
            self.iter().position(|x| x == b),
        ) else {
            return false;
        };
        self.swap(i, j);
        true
    }

    fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.len();
        if from >= len {
            return Err(Error::invalid_argument("from", "index out of range"));
        }
        if to >= len {
            return Err(Error::invalid_argument("to", "index out of range"));
        }
        if from < to {
            self[from..=to].rotate_left(1);
        } else {
            self[to..=from].rotate_right(1);
        }
        Ok(())
    }
}
