//! The insertion-ordered map backing [`Value::Object`](crate::Value::Object).
//!
//! Entries live in a growable list of [`Pair`]s, so iteration follows the
//! order keys were first seen. A hash table of slot numbers finds a key's
//! entry; the key text itself is stored once, in its pair. When a key is
//! inserted twice the value is replaced in place: the last write wins on
//! value, the first write wins on position.
use alloc::{string::String, vec::Vec};
use core::{fmt, hash::BuildHasher, slice};

use hashbrown::{DefaultHashBuilder, HashTable, hash_table::Entry};

use crate::{Pair, Value};

/// An ordered mapping from string keys to [`Value`]s.
///
/// # Examples
///
/// ```
/// use jsontree::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("a".into(), Value::Integer(1));
/// map.insert("b".into(), Value::Integer(2));
/// assert_eq!(map.insert("a".into(), Value::Integer(3)), Some(Value::Integer(1)));
///
/// let keys: Vec<&str> = map.keys().collect();
/// assert_eq!(keys, ["a", "b"]);
/// assert_eq!(map.get("a"), Some(&Value::Integer(3)));
/// ```
#[derive(Clone, Default)]
pub struct Map {
    entries: Vec<Pair<String, Value>>,
    /// Slot numbers into `entries`, hashed by their key.
    index: HashTable<usize>,
    hasher: DefaultHashBuilder,
}

impl Map {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Binds `value` to `key`.
    ///
    /// A new key is appended at the end. An existing key keeps its position
    /// and its pair is rebound with [`Pair::set`]; the previous value is
    /// returned.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        let Self {
            entries,
            index,
            hasher,
        } = self;
        let hash = hasher.hash_one(key.as_str());
        let slot = index.entry(
            hash,
            |&slot| entries[slot].key() == &key,
            |&slot| hasher.hash_one(entries[slot].key().as_str()),
        );
        match slot {
            Entry::Occupied(slot) => Some(entries[*slot.get()].set(value)),
            Entry::Vacant(slot) => {
                slot.insert(entries.len());
                entries.push(Pair::new(key, value));
                None
            }
        }
    }

    /// Returns the value bound to `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        let hash = self.hasher.hash_one(key);
        let &slot = self
            .index
            .find(hash, |&slot| self.entries[slot].key() == key)?;
        Some(self.entries[slot].value())
    }

    /// Returns the entry at position `index` in insertion order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&str, &Value)> {
        self.entries.get(index).map(entry_ref)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|pair| pair.key().as_str())
    }

    /// The underlying entries, in insertion order.
    #[must_use]
    pub fn as_pairs(&self) -> &[Pair<String, Value>] {
        &self.entries
    }
}

fn entry_ref(pair: &Pair<String, Value>) -> (&str, &Value) {
    (pair.key().as_str(), pair.value())
}

/// Order matters: two maps are equal when they hold equal entries in the same
/// order.
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`Map`], yielding `(key, value)` in insertion
/// order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, Pair<String, Value>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(entry_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Owning iterator over a [`Map`], yielding `(key, value)` in insertion order.
#[derive(Debug)]
pub struct IntoIter {
    inner: alloc::vec::IntoIter<Pair<String, Value>>,
}

impl Iterator for IntoIter {
    type Item = (String, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Pair::into_parts)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<(String, Value)> for Map {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Value); N]> for Map {
    fn from(entries: [(K, Value); N]) -> Self {
        entries
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{
        format,
        string::{String, ToString},
        vec::Vec,
    };

    use super::Map;
    use crate::Value;

    #[test]
    fn overwrite_keeps_first_position() {
        let mut map = Map::new();
        assert_eq!(map.insert("a".into(), Value::Integer(1)), None);
        assert_eq!(map.insert("b".into(), Value::Integer(2)), None);
        assert_eq!(
            map.insert("a".into(), Value::Integer(3)),
            Some(Value::Integer(1))
        );

        let entries: Vec<_> = map.iter().collect();
        assert_eq!(
            entries,
            [("a", &Value::Integer(3)), ("b", &Value::Integer(2))]
        );
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn grows_without_bound() {
        let map: Map = (0..5000)
            .map(|i| (format!("k{i}"), Value::Integer(i)))
            .collect();
        assert_eq!(map.len(), 5000);
        assert_eq!(map.get("k4999"), Some(&Value::Integer(4999)));
        assert_eq!(map.get_index(1234), Some(("k1234", &Value::Integer(1234))));
    }

    #[test]
    fn overwrite_rebinds_through_pair() {
        let mut map = Map::from([("x", Value::Null), ("y", Value::Null)]);
        let mut expected = map.as_pairs()[0].clone();
        map.insert("x".into(), Value::True);
        assert_eq!(expected.set(Value::True), Value::Null);
        assert_eq!(map.as_pairs()[0], expected);
        assert_eq!(map.get("y"), Some(&Value::Null));
        assert_eq!(map.get("z"), None);
    }

    #[test]
    fn lookups_compare_whole_keys() {
        let keys: Vec<String> = (0..300).map(|i| "a".repeat(i % 7) + &i.to_string()).collect();
        let map: Map = keys
            .iter()
            .zip(0..)
            .map(|(key, n)| (key.clone(), Value::Integer(n)))
            .collect();
        assert_eq!(map.len(), 300);
        for (n, key) in (0..).zip(&keys) {
            assert_eq!(map.get(key), Some(&Value::Integer(n)));
        }
        assert_eq!(map.get("a"), None);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let ab = Map::from([("a", Value::Null), ("b", Value::Null)]);
        let ba = Map::from([("b", Value::Null), ("a", Value::Null)]);
        assert_ne!(ab, ba);
        assert_eq!(ab.clone(), ab);
    }

    #[test]
    fn owned_iteration_preserves_order() {
        let map = Map::from([("z", Value::Integer(1)), ("a", Value::Integer(2))]);
        let keys: Vec<_> = map.into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["z".to_string(), "a".to_string()]);
    }

    #[test]
    fn debug_renders_as_map() {
        let map = Map::from([("k", Value::Integer(1))]);
        assert_eq!(format!("{map:?}"), r#"{"k": Integer(1)}"#);
    }
}
