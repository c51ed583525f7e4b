use super::KeyNotFound;

/// An associative lookup over a fixed set of entries, searched by linear scan.
///
/// The entry set is established at construction and never grows or shrinks;
/// values (but not keys) can be updated in place. Lookups are `O(N)`, which
/// for the small, literal entry sets this type is meant for is usually faster
/// than anything cleverer.
///
/// A lookup for an absent key never invents a default value: it fails with
/// [`KeyNotFound`], which carries the probe key.
///
/// # Examples
/// ```
/// # use seq_basics::collections::linear::LinearMap;
/// let palette = LinearMap::from([("red", 1), ("blue", 2), ("green", 3)]);
///
/// assert_eq!(palette.get(&"blue"), Ok(&2));
/// assert_eq!(palette.get(&"purple").unwrap_err().key, "purple");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearMap<K, V, const N: usize> {
    entries: [(K, V); N],
}

impl<K, V, const N: usize> LinearMap<K, V, N> {
    /// Creates a map over the provided entries. Entries keep their order; if
    /// a key appears twice, lookups find its first occurrence.
    pub const fn new(entries: [(K, V); N]) -> LinearMap<K, V, N> {
        LinearMap { entries }
    }

    /// The number of entries, fixed at construction.
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the map holds no entries at all.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// An iterator over the entries in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// An iterator over the keys in construction order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// An iterator over the values in construction order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K: PartialEq, V, const N: usize> LinearMap<K, V, N> {
    /// Whether `key` is among the map's entries.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Returns the value associated with `key`, or [`KeyNotFound`] when the
    /// key is not among the entries.
    pub fn get(&self, key: &K) -> Result<&V, KeyNotFound<K>>
    where
        K: Clone,
    {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| KeyNotFound { key: key.clone() })
    }

    /// Returns a mutable reference to the value associated with `key`, or
    /// [`KeyNotFound`] when the key is not among the entries.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFound<K>>
    where
        K: Clone,
    {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| KeyNotFound { key: key.clone() })
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for LinearMap<K, V, N> {
    fn from(entries: [(K, V); N]) -> Self {
        Self::new(entries)
    }
}
