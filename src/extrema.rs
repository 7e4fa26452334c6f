//! Multi-winner extrema: every element tied for the maximum (or minimum) key.
//!
//! `Iterator::max_by_key` picks one winner (the last one on ties) and
//! `Iterator::min_by_key` picks the first. The functions here keep all of
//! them, in the order they were encountered.
//!
//! # Algorithm
//! One forward pass with a running best key and an accumulator. A strictly
//! better key resets the accumulator; an equal key appends to it.
//!
//! # Complexity
//! Time: O(n) key extractions and comparisons. Space: O(k) for k tied winners.

use std::cmp::Ordering;

/// Which end of the ordering to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extreme {
    /// Largest key wins.
    Max,
    /// Smallest key wins.
    Min,
}

impl Extreme {
    /// The comparison result that makes a candidate strictly better than
    /// the current best.
    fn winning(self) -> Ordering {
        match self {
            Self::Max => Ordering::Greater,
            Self::Min => Ordering::Less,
        }
    }
}

/// Returns every element of `source` whose key ties for the extreme value
/// under `compare`.
///
/// `compare` is expected to be a total preorder over keys. With an
/// inconsistent comparer the result is some subset of the input, but which
/// one is unspecified.
///
/// # Returns
/// An empty vector for an empty source; otherwise at least one element.
///
/// # Examples
/// ```
/// use u_collections::extrema::{select_by_extreme, Extreme};
///
/// let words = ["pear", "fig", "plum", "kiwi", "date"];
/// let longest = select_by_extreme(words, |w| w.len(), |a, b| a.cmp(b), Extreme::Max);
/// assert_eq!(longest, vec!["pear", "plum", "kiwi", "date"]);
///
/// let shortest = select_by_extreme(words, |w| w.len(), |a, b| a.cmp(b), Extreme::Min);
/// assert_eq!(shortest, vec!["fig"]);
/// ```
pub fn select_by_extreme<I, K, F, C>(
    source: I,
    mut key: F,
    mut compare: C,
    direction: Extreme,
) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    let winning = direction.winning();
    let mut iter = source.into_iter();

    let Some(first) = iter.next() else {
        return Vec::new();
    };
    let mut best = key(&first);
    let mut winners = vec![first];

    for item in iter {
        let k = key(&item);
        let ord = compare(&k, &best);
        if ord == winning {
            best = k;
            winners.clear();
            winners.push(item);
        } else if ord == Ordering::Equal {
            winners.push(item);
        }
    }

    winners
}

/// Extension methods that collect all tied extrema of a sequence.
///
/// # Examples
/// ```
/// use u_collections::extrema::Extrema;
///
/// assert_eq!(vec![10, 20, 20, 5].maxima_by_key(|x| *x), vec![20, 20]);
/// assert_eq!(vec![3, -1, 1, -3].minima_by_key(|x: &i32| x.abs()), vec![-1, 1]);
/// assert!(Vec::<i32>::new().maxima_by_key(|x| *x).is_empty());
/// ```
pub trait Extrema: IntoIterator + Sized {
    /// All elements whose key equals the maximum key.
    fn maxima_by_key<K, F>(self, key: F) -> Vec<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        select_by_extreme(self, key, K::cmp, Extreme::Max)
    }

    /// All elements whose key equals the minimum key.
    fn minima_by_key<K, F>(self, key: F) -> Vec<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        select_by_extreme(self, key, K::cmp, Extreme::Min)
    }

    /// Like [`Extrema::maxima_by_key`], ordering keys with `compare`.
    fn maxima_by_key_with<K, F, C>(self, key: F, compare: C) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        select_by_extreme(self, key, compare, Extreme::Max)
    }

    /// Like [`Extrema::minima_by_key`], ordering keys with `compare`.
    fn minima_by_key_with<K, F, C>(self, key: F, compare: C) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        select_by_extreme(self, key, compare, Extreme::Min)
    }
}

impl<I: IntoIterator> Extrema for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_single_winner() {
        assert_eq!(vec![10, 30, 20].maxima_by_key(|x| *x), vec![30]);
    }

    #[test]
    fn test_max_ties_keep_order() {
        assert_eq!(vec![10, 20, 20, 5].maxima_by_key(|x| *x), vec![20, 20]);
    }

    #[test]
    fn test_empty() {
        assert!(Vec::<i32>::new().maxima_by_key(|x| *x).is_empty());
        assert!(Vec::<i32>::new().minima_by_key(|x| *x).is_empty());
    }

    #[test]
    fn test_min_ties() {
        let v = vec![(1, 'a'), (0, 'b'), (2, 'c'), (0, 'd')];
        assert_eq!(v.minima_by_key(|p| p.0), vec![(0, 'b'), (0, 'd')]);
    }

    #[test]
    fn test_identical_keys_keep_everything() {
        let v = vec!["x", "y", "z"];
        assert_eq!(v.clone().maxima_by_key(|_| 0), v);
    }

    #[test]
    fn test_better_resets_accumulator() {
        let v = vec![1, 1, 3, 2, 3, 3];
        assert_eq!(v.maxima_by_key(|x| *x), vec![3, 3, 3]);
    }

    #[test]
    fn test_custom_comparer_reverses() {
        let v = vec![4, 9, 2, 9];
        let reversed = v.maxima_by_key_with(|x| *x, |a: &i32, b: &i32| b.cmp(a));
        assert_eq!(reversed, vec![2]);
    }

    #[test]
    fn test_float_keys_with_total_cmp() {
        let v = vec![1.5_f64, -0.5, 1.5, 0.0];
        let max = v.iter().maxima_by_key_with(|x| **x, f64::total_cmp);
        assert_eq!(max, vec![&1.5, &1.5]);
        let min = v.iter().minima_by_key_with(|x| **x, f64::total_cmp);
        assert_eq!(min, vec![&-0.5]);
    }

    #[test]
    fn test_borrowed_items() {
        let names = vec!["ann".to_string(), "bob".to_string(), "clara".to_string()];
        let short = names.iter().minima_by_key(|s| s.len());
        assert_eq!(short, vec![&names[0], &names[1]]);
    }

    #[test]
    fn test_key_called_once_per_element() {
        let mut calls = 0;
        let _ = select_by_extreme(
            0..50,
            |x| {
                calls += 1;
                x % 7
            },
            |a: &i32, b: &i32| a.cmp(b),
            Extreme::Max,
        );
        assert_eq!(calls, 50);
    }
}
