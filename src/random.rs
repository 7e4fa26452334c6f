//! Random selection, removal, and shuffling.
//!
//! Every operation comes in two forms: one that takes an explicit [`Rng`]
//! (reproducible with [`create_rng`]) and one that uses the thread-local
//! generator from [`rand::rng`], which is safe to call from any thread.
//!
//! Tests and simulations that need repeatable picks pass a generator from
//! [`create_rng`] to the `_with` variants.

use rand::Rng;

/// Seeded generator for the `_with` variants.
///
/// Two generators built from the same seed pick and remove the same
/// elements in the same order, on the same platform.
///
/// # Examples
/// ```
/// use u_collections::random::{create_rng, RandomTake};
/// let mut a = vec!['x', 'y', 'z'];
/// let mut b = a.clone();
/// let first = a.take_random_with(&mut create_rng(11));
/// let second = b.take_random_with(&mut create_rng(11));
/// assert_eq!(first, second);
/// assert_eq!(a, b);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Reorders `items` in place so every ordering is equally likely.
///
/// Walks from the back, swapping each slot with a uniformly drawn slot at or
/// before it (Durstenfeld's form of Fisher-Yates).
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_collections::random::{create_rng, shuffle};
/// let mut deck: Vec<u8> = (1..=52).collect();
/// shuffle(&mut deck, &mut create_rng(3));
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.iter().map(|&c| c as u32).sum::<u32>(), 52 * 53 / 2);
/// ```
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for last in (1..items.len()).rev() {
        let pick = rng.random_range(0..=last);
        items.swap(last, pick);
    }
}

/// `0..n` in random order, for visiting a collection randomly without
/// moving its elements.
///
/// # Complexity
/// Time: O(n), Space: O(n)
pub fn shuffled_indices<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    shuffled(0..n, rng)
}

/// Collects `source` into a vector in uniformly random order.
pub fn shuffled<I, R>(source: I, rng: &mut R) -> Vec<I::Item>
where
    I: IntoIterator,
    R: Rng,
{
    let mut items: Vec<I::Item> = source.into_iter().collect();
    shuffle(&mut items, rng);
    items
}

/// Random choice from a slice.
///
/// # Examples
/// ```
/// use u_collections::random::{create_rng, RandomChoice};
/// let colors = ["red", "green", "blue"];
/// let mut rng = create_rng(7);
/// let pick = colors.choose_random_with(&mut rng).unwrap();
/// assert!(colors.contains(pick));
/// assert!(Vec::<u8>::new().choose_random().is_none());
/// ```
pub trait RandomChoice<T> {
    /// Returns a uniformly chosen element, or `None` if empty.
    fn choose_random_with<R: Rng>(&self, rng: &mut R) -> Option<&T>;

    /// [`RandomChoice::choose_random_with`] using the thread-local generator.
    fn choose_random(&self) -> Option<&T> {
        self.choose_random_with(&mut rand::rng())
    }
}

impl<T> RandomChoice<T> for [T] {
    fn choose_random_with<R: Rng>(&self, rng: &mut R) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.get(rng.random_range(0..self.len()))
    }
}

/// Random removal from a vector.
pub trait RandomTake<T> {
    /// Removes and returns a uniformly chosen element, or `None` if empty.
    ///
    /// The remaining elements keep their relative order.
    ///
    /// # Complexity
    /// O(n) for the shift after removal.
    fn take_random_with<R: Rng>(&mut self, rng: &mut R) -> Option<T>;

    /// [`RandomTake::take_random_with`] using the thread-local generator.
    fn take_random(&mut self) -> Option<T> {
        self.take_random_with(&mut rand::rng())
    }
}

impl<T> RandomTake<T> for Vec<T> {
    fn take_random_with<R: Rng>(&mut self, rng: &mut R) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.len());
        Some(self.remove(idx))
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn shuffled_keeps_multiset(
            seed in any::<u64>(),
            words in proptest::collection::vec("[a-c]{1,3}", 0..40),
        ) {
            let mut out = shuffled(words.iter().cloned(), &mut create_rng(seed));
            let mut expected = words;
            out.sort();
            expected.sort();
            prop_assert_eq!(out, expected);
        }

        #[test]
        fn choose_returns_member(
            seed in any::<u64>(),
            data in proptest::collection::vec(any::<i64>(), 1..30),
        ) {
            let pick = data.choose_random_with(&mut create_rng(seed));
            prop_assert!(pick.is_some_and(|p| data.contains(p)));
        }

        #[test]
        fn take_random_removes_one_member(
            seed in 0_u64..10000,
            data in proptest::collection::vec(0_i32..1000, 1..50),
        ) {
            let mut rest = data.clone();
            let mut rng = create_rng(seed);
            let taken = rest.take_random_with(&mut rng).unwrap();
            prop_assert_eq!(rest.len(), data.len() - 1);
            let mut rebuilt = rest;
            rebuilt.push(taken);
            rebuilt.sort();
            let mut expected = data;
            expected.sort();
            prop_assert_eq!(rebuilt, expected);
        }
    }
}
