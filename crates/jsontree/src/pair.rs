//! A key/value association whose key is fixed at construction.
//!
//! [`Pair`] knows nothing about JSON. It is the entry type behind
//! [`Map`](crate::Map), and can be reused anywhere an ordered list of
//! key/value associations is wanted.
use core::fmt;

/// A key bound to a value.
///
/// The key cannot change once the pair exists. The value can be rebound, but
/// only through [`Pair::set`]; there is no other way to mutate a pair in
/// place. [`Map`](crate::Map) follows the same rule: a repeated key rebinds
/// its pair with `set`, and the map hands out no mutable access to values.
///
/// # Examples
///
/// ```
/// use jsontree::Pair;
///
/// let mut pair = Pair::new("answer", 41);
/// assert_eq!(pair.set(42), 41);
/// assert_eq!(*pair.value(), 42);
/// assert_eq!(pair.to_string(), "<answer:42>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair<K, V> {
    key: K,
    value: V,
}

impl<K, V> Pair<K, V> {
    /// Creates a new pair.
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Rebinds the value, returning the one it replaced.
    pub fn set(&mut self, value: V) -> V {
        core::mem::replace(&mut self.value, value)
    }

    /// Splits the pair into its key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Pair<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}>", self.key, self.value)
    }
}
