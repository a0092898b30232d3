//! Insertion-ordered mapping with unique keys.
//!
//! [`Entries`] is the materialized realization of a sequence. Entries are
//! kept in a `Vec` in insertion order, and a hash index maps every key to
//! its position so lookups and in-place replacement stay O(1).
//!
//! # Examples
//!
//! ```rust
//! use fnpipe::sequence::Entries;
//!
//! let mut entries = Entries::new();
//! entries.insert("b", 2);
//! entries.insert("a", 1);
//! entries.insert("b", 20);
//!
//! // Replacing a key keeps its original position.
//! let pairs: Vec<_> = entries.into_iter().collect();
//! assert_eq!(pairs, vec![("b", 20), ("a", 1)]);
//! ```

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Marker for types usable as sequence keys.
///
/// Keys must be hashable and cloneable because [`Entries`] stores each key
/// both in its entry list and in its position index.
pub trait SequenceKey: Eq + Hash + Clone {}

impl<K: Eq + Hash + Clone> SequenceKey for K {}

/// An ordered mapping from unique keys to values.
///
/// Iteration order is insertion order. Inserting a key that is already
/// present replaces its value without moving it.
#[derive(Clone)]
pub struct Entries<K, V> {
    entries: Vec<(K, V)>,
    index: FxHashMap<K, usize>,
}

impl<K: SequenceKey, V> Entries<K, V> {
    /// Creates an empty mapping.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Creates an empty mapping with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `value` under `key`.
    ///
    /// Returns the previous value if the key was present; the entry then
    /// keeps its position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&position) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[position].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the first entry in insertion order.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(key, value)| (key, value))
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Consumes the mapping, returning its values in order.
    pub fn into_values(self) -> Vec<V> {
        self.entries.into_iter().map(|(_, value)| value).collect()
    }

    /// Transforms every value while keeping keys and order.
    ///
    /// The position index is reused as is.
    pub fn map_values<W, F>(self, mut function: F) -> Entries<K, W>
    where
        F: FnMut(&K, V) -> W,
    {
        Entries {
            entries: self
                .entries
                .into_iter()
                .map(|(key, value)| {
                    let mapped = function(&key, value);
                    (key, mapped)
                })
                .collect(),
            index: self.index,
        }
    }

    /// Keeps only the entries for which `predicate` holds.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.entries.retain(|(key, value)| predicate(key, value));
        self.reindex();
    }

    /// Shortens the mapping to its first `length` entries.
    ///
    /// Does nothing if the mapping is already that short.
    pub fn truncate(&mut self, length: usize) {
        if length >= self.entries.len() {
            return;
        }
        for (key, _) in self.entries.drain(length..) {
            self.index.remove(&key);
        }
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (position, (key, _)) in self.entries.iter().enumerate() {
            self.index.insert(key.clone(), position);
        }
    }
}

impl<V> Entries<usize, V> {
    /// Builds a position-keyed mapping (`0, 1, 2, ...`) from a list.
    pub fn from_values(values: impl IntoIterator<Item = V>) -> Self {
        values.into_iter().enumerate().collect()
    }

    /// Returns the key [`push`](Self::push) would use: one past the largest
    /// key, or `0` when empty.
    ///
    /// `None` once the largest key is `usize::MAX`.
    pub fn next_key(&self) -> Option<usize> {
        self.keys().max().map_or(Some(0), |largest| largest.checked_add(1))
    }

    /// Appends `value` under [`next_key`](Self::next_key).
    ///
    /// # Errors
    ///
    /// Hands `value` back, leaving the mapping untouched, when no key is
    /// left after the largest one.
    pub fn push(&mut self, value: V) -> Result<(), V> {
        match self.next_key() {
            Some(key) => {
                self.insert(key, value);
                Ok(())
            }
            None => Err(value),
        }
    }
}

impl<K: SequenceKey, V> Default for Entries<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: SequenceKey, V> FromIterator<(K, V)> for Entries<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut entries = Self::with_capacity(iter.size_hint().0);
        entries.extend(iter);
        entries
    }
}

impl<K: SequenceKey, V> Extend<(K, V)> for Entries<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> IntoIterator for Entries<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: SequenceKey, V, const N: usize> From<[(K, V); N]> for Entries<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Equality is order-sensitive: two mappings are equal when they hold the
/// same pairs in the same order.
impl<K: PartialEq, V: PartialEq> PartialEq for Entries<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for Entries<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entries<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.entries.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Entries<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct EntriesVisitor<K, V> {
    marker: std::marker::PhantomData<fn() -> (K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for EntriesVisitor<K, V>
where
    K: serde::Deserialize<'de> + SequenceKey,
    V: serde::Deserialize<'de>,
{
    type Value = Entries<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut entries = Entries::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry()? {
            entries.insert(key, value);
        }
        Ok(entries)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Entries<K, V>
where
    K: serde::Deserialize<'de> + SequenceKey,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(EntriesVisitor {
            marker: std::marker::PhantomData,
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_keeps_insertion_order() {
        let entries = Entries::from([("z".to_string(), 1), ("a".to_string(), 2)]);
        let json = serde_json::to_string(&entries).unwrap();
        assert_eq!(json, r#"{"z":1,"a":2}"#);
    }

    #[rstest]
    fn test_deserialize_keeps_document_order() {
        let entries: Entries<String, i32> = serde_json::from_str(r#"{"z":1,"a":2}"#).unwrap();
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }
}
