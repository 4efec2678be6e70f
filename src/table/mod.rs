//! Fixed-capacity separate-chaining hash table.
//!
//! The content-addressed lookup structure at the heart of duplicate
//! detection: a mapping from digest string to [`Value`], with a bucket
//! count chosen once at creation and never changed. Colliding keys share
//! a bucket and are resolved by a linear scan on exact key equality.
//!
//! There is deliberately no resize path. Capacity bounds the load factor
//! up front; key distributions or input sizes far in excess of capacity
//! degrade lookups toward linear scans, a documented trade-off of the
//! design rather than a defect.
//!
//! # Example
//!
//! ```
//! use dupescan::table::{HashTable, Value};
//!
//! let mut table = HashTable::new(64);
//! table.insert("5d41402abc4b2a76b9719d911017c592", Value::Text("a.txt".into()));
//! assert_eq!(table.len(), 1);
//! assert!(table.get("5d41402abc4b2a76b9719d911017c592").is_some());
//! ```

pub mod entry;

use std::io::{self, Write};

pub use entry::{Entry, Value};

use crate::hash::bucket_hash;

/// Bucket count used when a caller requests a capacity of zero.
pub const DEFAULT_CAPACITY: usize = 1024;

/// A fixed-capacity hash table mapping string keys to [`Value`]s.
///
/// Each bucket owns a growable chain of entries, newest first. Dropping
/// the table releases every entry's owned key and value along with the
/// bucket storage.
#[derive(Debug)]
pub struct HashTable {
    /// Bucket chains; index for key K is always `bucket_hash(K) % capacity`.
    buckets: Vec<Vec<Entry>>,
    /// Number of live entries across all chains.
    size: usize,
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HashTable {
    /// Create a table with the given number of buckets.
    ///
    /// A `capacity` of zero selects [`DEFAULT_CAPACITY`]. The bucket count
    /// is fixed for the table's entire lifetime; entries never move
    /// between buckets after insertion.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 { DEFAULT_CAPACITY } else { capacity };
        Self {
            buckets: vec![Vec::new(); capacity],
            size: 0,
        }
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of buckets (fixed at creation).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket index for a key.
    fn bucket_index(&self, key: &str) -> usize {
        (bucket_hash(key.as_bytes()) % self.buckets.len() as u64) as usize
    }

    /// Insert a key/value pair, or update the value if the key exists.
    ///
    /// On update the previous value (including any owned `Text` payload)
    /// is dropped in place and the entry count is unchanged. On insert the
    /// key and value are copied into a new entry linked at the head of its
    /// bucket's chain, so the most recently inserted key in a bucket is
    /// found first. Cost is O(1 + chain length).
    pub fn insert(&mut self, key: &str, value: Value) {
        let index = self.bucket_index(key);
        let chain = &mut self.buckets[index];

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            entry.value = value;
            return;
        }

        chain.insert(0, Entry::new(key, value));
        self.size += 1;
    }

    /// Look up a key, returning a reference to its value if present.
    ///
    /// Read-only: never mutates the entry count, chain order, or any
    /// stored data.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        let chain = &self.buckets[self.bucket_index(key)];
        chain.iter().find(|entry| entry.key == key).map(|entry| &entry.value)
    }

    /// Remove a key, returning whether it was present.
    ///
    /// On a match the entry is unlinked from its chain and its owned key
    /// and value are dropped; the entry count decrements. An absent key
    /// leaves the table untouched.
    pub fn remove(&mut self, key: &str) -> bool {
        let index = self.bucket_index(key);
        let chain = &mut self.buckets[index];

        match chain.iter().position(|entry| entry.key == key) {
            Some(position) => {
                chain.remove(position);
                self.size -= 1;
                true
            }
            None => false,
        }
    }

    /// Write every entry to `sink`, one `"<key>\t<value>\n"` line each.
    ///
    /// Buckets are visited in index order; within a bucket, the most
    /// recently inserted key appears first. Callers must not rely on
    /// global insertion order.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from the sink.
    pub fn format<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        for chain in &self.buckets {
            for entry in chain {
                entry.format(sink)?;
            }
        }
        Ok(())
    }
}
