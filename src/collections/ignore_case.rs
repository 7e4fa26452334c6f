//! Case-insensitive lookup for string-keyed maps.
//!
//! An exact (hashed or ordered) lookup is tried first. On a miss the keys are
//! scanned and compared after Unicode lower-casing; the first match in the
//! map's iteration order wins. For `HashMap` that order is unspecified, so
//! maps holding several keys that differ only in case give an arbitrary
//! one of them.
//!
//! # Complexity
//! O(1) / O(log n) on an exact hit, O(n · k) on a miss for keys of length k.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Compares two strings ignoring case, using full Unicode lower-casing.
///
/// # Examples
/// ```
/// use u_collections::collections::eq_ignore_case;
/// assert!(!eq_ignore_case("Straße", "STRASSE"));
/// assert!(eq_ignore_case("ÉCOLE", "école"));
/// assert!(eq_ignore_case("Content-Type", "content-type"));
/// ```
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn key_matches<K: AsRef<str>>(candidate: &K, key: &str) -> bool {
    eq_ignore_case(candidate.as_ref(), key)
}

/// Case-insensitive key lookup.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use u_collections::collections::IgnoreCaseExt;
///
/// let mut headers = HashMap::new();
/// headers.insert("Content-Type".to_string(), "text/plain");
/// assert_eq!(headers.get_ignore_case("content-type"), Some(&"text/plain"));
/// assert!(headers.contains_key_ignore_case("CONTENT-TYPE"));
/// assert!(!headers.contains_key_ignore_case("accept"));
/// ```
pub trait IgnoreCaseExt<V> {
    /// Value whose key equals `key` ignoring case.
    fn get_ignore_case(&self, key: &str) -> Option<&V>;

    /// Mutable value whose key equals `key` ignoring case.
    fn get_mut_ignore_case(&mut self, key: &str) -> Option<&mut V>;

    /// Returns `true` if some key equals `key` ignoring case.
    fn contains_key_ignore_case(&self, key: &str) -> bool {
        self.get_ignore_case(key).is_some()
    }
}

impl<K, V, S> IgnoreCaseExt<V> for HashMap<K, V, S>
where
    K: AsRef<str> + Eq + Hash + Borrow<str>,
    S: BuildHasher,
{
    fn get_ignore_case(&self, key: &str) -> Option<&V> {
        if let Some(v) = self.get(key) {
            return Some(v);
        }
        self.iter()
            .find(|(k, _)| key_matches(*k, key))
            .map(|(_, v)| v)
    }

    fn get_mut_ignore_case(&mut self, key: &str) -> Option<&mut V> {
        if self.contains_key(key) {
            return self.get_mut(key);
        }
        self.iter_mut()
            .find(|(k, _)| key_matches(*k, key))
            .map(|(_, v)| v)
    }
}

impl<K, V> IgnoreCaseExt<V> for BTreeMap<K, V>
where
    K: AsRef<str> + Ord + Borrow<str>,
{
    fn get_ignore_case(&self, key: &str) -> Option<&V> {
        if let Some(v) = self.get(key) {
            return Some(v);
        }
        self.iter()
            .find(|(k, _)| key_matches(*k, key))
            .map(|(_, v)| v)
    }

    fn get_mut_ignore_case(&mut self, key: &str) -> Option<&mut V> {
        if self.contains_key(key) {
            return self.get_mut(key);
        }
        self.iter_mut()
            .find(|(k, _)| key_matches(*k, key))
            .map(|(_, v)| v)
    }
}
