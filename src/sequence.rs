//! Deterministic integer-sequence generators.
//!
//! Every generator returns a freshly allocated `Vec` of exactly `size`
//! elements; `size == 0` gives an empty vector for every rule. Only two rules
//! reject inputs: [`geometric`] with a zero start and [`collatz`] with a zero
//! seed.
//!
//! # Overflow
//! The sized generators use `i64` and wrap on overflow. Geometric and
//! Fibonacci sequences leave the representable range quickly (Fibonacci
//! after 93 terms); stay within range if exact values matter. [`collatz`]
//! truncates instead of wrapping.
//!
//! # Unbounded searches
//! [`primes_from`] and [`collatz`] have no internal iteration cap. The caller
//! bounds their cost through the input magnitude.

use tracing::trace;

use crate::error::{Error, Result};

/// `1, 2, 3, ..., size`.
///
/// # Examples
/// ```
/// use u_collections::sequence::natural;
/// assert_eq!(natural(3), vec![1, 2, 3]);
/// ```
pub fn natural(size: usize) -> Vec<i64> {
    integers_from(size, 1)
}

/// `0, 1, 2, ..., size - 1`.
pub fn whole(size: usize) -> Vec<i64> {
    integers_from(size, 0)
}

/// `0, 1, 2, ...`; same as [`whole`].
pub fn integers(size: usize) -> Vec<i64> {
    integers_from(size, 0)
}

/// `start, start + 1, ..., start + size - 1`. Negative starts are allowed.
pub fn integers_from(size: usize, start: i64) -> Vec<i64> {
    arithmetic(size, start, 1)
}

/// `start, start + diff, start + 2·diff, ...`.
///
/// `diff` may be zero or negative.
pub fn arithmetic(size: usize, start: i64, diff: i64) -> Vec<i64> {
    std::iter::successors(Some(start), |n| Some(n.wrapping_add(diff)))
        .take(size)
        .collect()
}

/// `start, start·multiplier, start·multiplier², ...`.
///
/// # Errors
/// [`Error::InvalidArgument`] if `start == 0`, since every term would be
/// zero.
///
/// # Examples
/// ```
/// use u_collections::sequence::geometric;
/// assert_eq!(geometric(5, 1, 2).unwrap(), vec![1, 2, 4, 8, 16]);
/// assert!(geometric(5, 0, 2).is_err());
/// ```
pub fn geometric(size: usize, start: i64, multiplier: i64) -> Result<Vec<i64>> {
    if start == 0 {
        return Err(Error::invalid_argument("start", "must be non-zero"));
    }
    Ok(
        std::iter::successors(Some(start), |n| Some(n.wrapping_mul(multiplier)))
            .take(size)
            .collect(),
    )
}

/// The first `size` Fibonacci numbers, starting `0, 1, 1, 2, 3, 5, ...`.
///
/// # Examples
/// ```
/// use u_collections::sequence::fibonacci;
/// let fib = fibonacci(9);
/// assert_eq!(fib, vec![0, 1, 1, 2, 3, 5, 8, 13, 21]);
/// ```
pub fn fibonacci(size: usize) -> Vec<i64> {
    let mut out = Vec::with_capacity(size);
    let (mut a, mut b) = (0_i64, 1_i64);
    for _ in 0..size {
        out.push(a);
        (a, b) = (b, a.wrapping_add(b));
    }
    out
}

/// Primality by trial division.
///
/// 2 is handled directly; other even numbers and everything below 2 are
/// composite. Odd candidates are tested against odd divisors up to ⌊√n⌋.
///
/// # Complexity
/// O(√n)
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let n = n as u64;
    let mut divisor = 3_u64;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// The first `size` primes.
///
/// # Examples
/// ```
/// use u_collections::sequence::primes;
/// assert_eq!(primes(5), vec![2, 3, 5, 7, 11]);
/// ```
pub fn primes(size: usize) -> Vec<i64> {
    primes_from(size, 0)
}

/// The first `size` primes greater than or equal to `start`, ascending.
///
/// Starts below 2 scan from 2. The search is unbounded above.
///
/// # Complexity
/// Roughly O(size · √p) where p is the last prime returned.
///
/// # Examples
/// ```
/// use u_collections::sequence::primes_from;
/// assert_eq!(primes_from(5, 10), vec![11, 13, 17, 19, 23]);
/// ```
pub fn primes_from(size: usize, start: i64) -> Vec<i64> {
    let mut out = Vec::with_capacity(size);
    if size == 0 {
        return out;
    }

    let mut candidate = start.max(2);
    if candidate == 2 {
        out.push(2);
        candidate = 3;
    } else if candidate % 2 == 0 {
        candidate += 1;
    }

    while out.len() < size {
        if is_prime(candidate) {
            out.push(candidate);
        }
        candidate += 2;
    }

    trace!(size, start, last = out.last().copied(), "prime search finished");
    out
}

/// The Collatz trajectory from `seed`, including the seed and the terminal
/// value.
///
/// Positive seeds follow the classic rule (halve if even, else `3n + 1`) and
/// end at `1`. Negative seeds halve while even and end at the first odd value
/// reached, so a negative power of two ends at `-1`.
///
/// # Termination
/// Positive trajectories are known to reach 1 for every seed anyone has
/// tested, though it is unproven in general. Negative trajectories always
/// terminate, in at most 63 steps.
///
/// # Overflow
/// Unlike the sized generators, this one does not wrap. If a `3n + 1` step
/// would exceed `i64::MAX`, the trajectory stops at the last representable
/// value instead of reaching 1. Odd values above `(i64::MAX - 1) / 3` hit
/// this on their next step.
///
/// # Errors
/// [`Error::InvalidArgument`] if `seed == 0`.
///
/// # Examples
/// ```
/// use u_collections::sequence::collatz;
/// assert_eq!(collatz(10).unwrap(), vec![10, 5, 16, 8, 4, 2, 1]);
/// assert_eq!(collatz(-10).unwrap(), vec![-10, -5]);
/// assert_eq!(collatz(-8).unwrap(), vec![-8, -4, -2, -1]);
/// ```
pub fn collatz(seed: i64) -> Result<Vec<i64>> {
    if seed == 0 {
        return Err(Error::invalid_argument("seed", "must be non-zero"));
    }

    let mut trajectory = vec![seed];
    let mut n = seed;
    if seed > 0 {
        while n != 1 {
            let next = if n % 2 == 0 {
                Some(n / 2)
            } else {
                n.checked_mul(3).and_then(|m| m.checked_add(1))
            };
            let Some(next) = next else {
                trace!(seed, last = n, "collatz step overflows i64, trajectory truncated");
                break;
            };
            n = next;
            trajectory.push(n);
        }
    } else {
        while n % 2 == 0 {
            n /= 2;
            trajectory.push(n);
        }
    }

    trace!(seed, steps = trajectory.len() - 1, "collatz trajectory finished");
    Ok(trajectory)
}

/// `value` repeated `size` times.
pub fn repeating<T: Clone>(size: usize, value: T) -> Vec<T> {
    vec![value; size]
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn lengths_match_size(size in 0_usize..200, start in -1000_i64..1000) {
            prop_assert_eq!(natural(size).len(), size);
            prop_assert_eq!(whole(size).len(), size);
            prop_assert_eq!(integers_from(size, start).len(), size);
            prop_assert_eq!(arithmetic(size, start, 3).len(), size);
            prop_assert_eq!(fibonacci(size).len(), size);
            prop_assert_eq!(repeating(size, start).len(), size);
        }

        #[test]
        fn arithmetic_steps_are_constant(
            size in 2_usize..50,
            start in -1000_i64..1000,
            diff in -50_i64..50,
        ) {
            let seq = arithmetic(size, start, diff);
            for pair in seq.windows(2) {
                prop_assert_eq!(pair[1] - pair[0], diff);
            }
        }

        #[test]
        fn fibonacci_recurrence(size in 3_usize..90) {
            let fib = fibonacci(size);
            for w in fib.windows(3) {
                prop_assert_eq!(w[2], w[0] + w[1]);
            }
        }

        #[test]
        fn primes_from_are_ascending_primes(size in 0_usize..30, start in -50_i64..500) {
            let ps = primes_from(size, start);
            prop_assert_eq!(ps.len(), size);
            prop_assert!(ps.iter().all(|&p| is_prime(p) && p >= start));
            prop_assert!(ps.windows(2).all(|w| w[0] < w[1]));
            // No prime is skipped between consecutive results.
            if let (Some(&lo), Some(&hi)) = (ps.first(), ps.last()) {
                let between = (lo..=hi).filter(|&n| is_prime(n)).count();
                prop_assert_eq!(between, size);
                prop_assert!((start.max(2)..lo).all(|n| !is_prime(n)));
            }
        }

        #[test]
        fn collatz_positive_ends_at_one(seed in 1_i64..10_000) {
            let t = collatz(seed).unwrap();
            prop_assert_eq!(t[0], seed);
            prop_assert_eq!(*t.last().unwrap(), 1);
            prop_assert_eq!(t.iter().filter(|&&n| n == 1).count(), 1);
        }
    }
}
