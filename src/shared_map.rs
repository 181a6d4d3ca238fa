use parking_lot::RwLock;
use std::sync::Arc;

use crate::{chained_map::ChainedHashMap, error::Result, hashable::Hashable};

/// Wrapper for a ChainedHashMap which is shareable across thread boundaries.
/// The map itself does no locking of its own; this puts every call behind a
/// single reader-writer lock.
pub struct SharedMap<K, V>(Arc<RwLock<ChainedHashMap<K, V>>>)
where
    K: Hashable,
    V: Clone;

impl<K, V> SharedMap<K, V>
where
    K: Hashable,
    V: Clone,
{
    /// Makes a new shared map with a fixed number of buckets.
    pub fn new(bucket_count: usize) -> Result<Self> {
        Ok(Self::with_map(ChainedHashMap::new(bucket_count)?))
    }

    /// Wraps a map into a shared map accessor, making it safe to move across
    /// thread boundaries. Enforces an additional constraint of Clone on
    /// values.
    pub fn with_map(map: ChainedHashMap<K, V>) -> Self {
        Self(Arc::new(RwLock::new(map)))
    }

    /// Stores a value, returning whatever was there before.
    pub fn set(&self, k: K, v: V) -> Option<V> {
        self.0.write().set(k, v)
    }

    /// Get a value from the map. This clones it to minimize the lock time of
    /// the map.
    pub fn get(&self, k: &K) -> Option<V> {
        self.0.read().get(k).cloned()
    }

    pub fn contains_key(&self, k: &K) -> bool {
        self.0.read().contains_key(k)
    }

    /// Remove a value from the map, returning it if it existed.
    pub fn delete(&self, k: &K) -> Option<V> {
        self.0.write().delete(k)
    }

    /// Clears the map.
    pub fn clear(&self) {
        self.0.write().clear()
    }

    /// The number of entries in the map at present.
    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }
}

impl<K, V> Clone for SharedMap<K, V>
where
    K: Hashable,
    V: Clone,
{
    fn clone(&self) -> Self {
        SharedMap(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use crate::{string_hash::string_hash, Error, SharedMap, StringHash};

    #[test]
    fn test_across_threads() {
        let map: SharedMap<StringHash, usize> = SharedMap::new(4).unwrap();
        map.set(string_hash("a"), 1);

        let thread_map = map.clone();
        let r = thread::spawn(move || thread_map.get(&string_hash("a"))).join();

        assert_eq!(Some(1), r.unwrap());
    }

    #[test]
    fn test_concurrent_writers() {
        let map: SharedMap<u32, u32> = SharedMap::new(8).unwrap();

        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let map = map.clone();
                thread::spawn(move || {
                    for i in 0..100u32 {
                        map.set(t * 100 + i, i);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(400, map.len());
        assert_eq!(Some(7), map.get(&307));

        assert_eq!(Some(7), map.delete(&307));
        assert!(!map.contains_key(&307));

        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn test_invalid_bucket_count() {
        assert!(matches!(
            SharedMap::<u32, u32>::new(0),
            Err(Error::InvalidConfiguration { .. })
        ));
    }
}
