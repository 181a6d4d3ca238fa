//! A hash map which resolves collisions by chaining entries onto a fixed
//! number of buckets. There is no rehashing: the bucket count chosen at
//! construction is the bucket count forever, and chains simply grow longer as
//! the load factor climbs.

use log::{debug, trace};
use std::{fmt, mem};

use crate::{
    error::{Error, Result},
    hashable::Hashable,
    linked_list::{LinkedList, NodeHandle},
};

/// A key and its value, living in exactly one bucket's chain.
struct Entry<K, V> {
    key: K,
    value: V,
}

type Chain<K, V> = LinkedList<Entry<K, V>>;

/// A separate-chaining hash map over any [`Hashable`] key.
///
/// Keys are sent to bucket `hash_code(key) mod bucket_count`, normalized so
/// negative hash codes still land in range, and then found by walking that
/// bucket's chain and comparing keys for equality.
///
/// Not synchronized. Wrap it in a [`SharedMap`](crate::SharedMap) (or your
/// own lock) to touch it from more than one thread.
pub struct ChainedHashMap<K, V>
where
    K: Hashable,
{
    buckets: Vec<Chain<K, V>>,
    len: usize,
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Hashable,
{
    /// Makes a new map with a fixed number of buckets. Zero buckets leaves
    /// nothing to reduce hash codes into, so it is rejected.
    pub fn new(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            return Err(Error::InvalidConfiguration { bucket_count });
        }

        debug!("creating chained hash map with {} buckets", bucket_count);

        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, LinkedList::new);

        Ok(Self { buckets, len: 0 })
    }

    /// The number of buckets, fixed at construction.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// The number of entries stored in the map right now.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries per bucket. Nothing caps this.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// The bucket a key belongs in, always within `0..bucket_count`.
    pub fn bucket_index(&self, k: &K) -> usize {
        // rem_euclid keeps negative hash codes in range; plain % would not
        k.hash_code().rem_euclid(self.buckets.len() as i64) as usize
    }

    /// How many entries are chained onto a given bucket, or `None` if there
    /// is no such bucket.
    pub fn chain_len(&self, index: usize) -> Option<usize> {
        self.buckets.get(index).map(|chain| chain.len())
    }

    /// Finds the bucket for a key and the node holding it, if any. Stops
    /// walking the chain at the first match.
    fn lookup(&self, k: &K) -> (usize, Option<NodeHandle>) {
        let idx = self.bucket_index(k);
        let node = self.buckets[idx].each(|entry, _| entry.key == *k);

        (idx, node)
    }

    /// Gets the value stored for a key.
    pub fn get(&self, k: &K) -> Option<&V> {
        let (idx, node) = self.lookup(k);
        self.buckets[idx].get(node?).map(|entry| &entry.value)
    }

    /// Gets a mutable reference to the value stored for a key.
    pub fn get_mut(&mut self, k: &K) -> Option<&mut V> {
        let (idx, node) = self.lookup(k);
        self.buckets[idx].get_mut(node?).map(|entry| &mut entry.value)
    }

    pub fn contains_key(&self, k: &K) -> bool {
        self.lookup(k).1.is_some()
    }

    /// Stores a value for a key. If the key is already present its value is
    /// replaced in place and the previous value is returned; otherwise a new
    /// entry is appended to the end of the key's chain.
    pub fn set(&mut self, k: K, v: V) -> Option<V> {
        let (idx, node) = self.lookup(&k);
        let chain = &mut self.buckets[idx];

        if let Some(entry) = node.and_then(|n| chain.get_mut(n)) {
            trace!("updating entry in bucket {}", idx);
            return Some(mem::replace(&mut entry.value, v));
        }

        chain.append(Entry { key: k, value: v });
        self.len += 1;
        trace!(
            "appended entry to bucket {}, chain length now {}",
            idx,
            chain.len()
        );

        None
    }

    /// Removes a key from the map, returning its value if it was there.
    pub fn delete(&mut self, k: &K) -> Option<V> {
        let (idx, node) = self.lookup(k);
        let entry = self.buckets[idx].remove_node(node?)?;
        self.len -= 1;
        trace!("removed entry from bucket {}", idx);

        Some(entry.value)
    }

    /// Clears out every entry. The bucket count stays the same.
    pub fn clear(&mut self) {
        debug!("clearing {} entries", self.len);

        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
    }

    /// Iterates over every key and value, bucket by bucket and then in chain
    /// order. Callers shouldn't read anything into that order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|entry| (&entry.key, &entry.value)))
    }
}

impl<K, V> fmt::Debug for ChainedHashMap<K, V>
where
    K: Hashable + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
